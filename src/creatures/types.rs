use serde::{Deserialize, Serialize};

/// Elemental alignment of a creature or skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Fire,
    Water,
    Leaf,
    Normal,
}

impl ElementType {
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Leaf => "Leaf",
            ElementType::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub display_name: String,
    pub skill_type: ElementType,
    pub base_damage: u32,
    /// Physical skills use attack/defense; special skills use sp_attack/sp_defense.
    pub is_physical: bool,
}

impl Skill {
    pub fn new(name: &str, skill_type: ElementType, base_damage: u32, is_physical: bool) -> Self {
        Self {
            display_name: name.to_string(),
            skill_type,
            base_damage,
            is_physical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub display_name: String,
    pub creature_type: ElementType,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
    pub skills: Vec<Skill>,
}

impl Creature {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        creature_type: ElementType,
        max_hp: u32,
        attack: u32,
        defense: u32,
        sp_attack: u32,
        sp_defense: u32,
        speed: u32,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            display_name: name.to_string(),
            creature_type,
            max_hp,
            hp: max_hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
            skills,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn reset_hp(&mut self) {
        self.hp = self.max_hp;
    }

    /// Fraction of HP remaining, for gauges. Zero max HP reads as empty.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }
}

/// Who drives a player's choices each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub display_name: String,
    pub creatures: Vec<Creature>,
    /// Index of the creature currently on the field.
    pub active: usize,
    pub controller: Controller,
}

impl Player {
    pub fn new(name: &str, creatures: Vec<Creature>, controller: Controller) -> Self {
        Self {
            display_name: name.to_string(),
            creatures,
            active: 0,
            controller,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.controller == Controller::Bot
    }

    pub fn active_creature(&self) -> &Creature {
        &self.creatures[self.active]
    }

    pub fn active_creature_mut(&mut self) -> &mut Creature {
        &mut self.creatures[self.active]
    }

    pub fn has_living_creature(&self) -> bool {
        self.creatures.iter().any(|c| c.is_alive())
    }

    /// Indices of living creatures on the bench (everything but the active slot).
    pub fn living_bench_indices(&self) -> Vec<usize> {
        self.creatures
            .iter()
            .enumerate()
            .filter(|(i, c)| *i != self.active && c.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Full heal for every creature and the active slot back to the lead.
    pub fn reset_team(&mut self) {
        for creature in &mut self.creatures {
            creature.reset_hp();
        }
        self.active = 0;
    }
}
