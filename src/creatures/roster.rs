//! Fixed creature roster and the stock line-ups used by every battle mode.

use super::types::{Controller, Creature, ElementType, Player, Skill};
use crate::constants::SQUAD_SIZE;

fn emberwolf() -> Creature {
    Creature::new(
        "Emberwolf",
        ElementType::Fire,
        42,
        12,
        6,
        11,
        7,
        12,
        vec![
            Skill::new("Scratch", ElementType::Normal, 7, true),
            Skill::new("Flame Bite", ElementType::Fire, 9, true),
            Skill::new("Cinder Burst", ElementType::Fire, 12, false),
        ],
    )
}

fn tidefin() -> Creature {
    Creature::new(
        "Tidefin",
        ElementType::Water,
        46,
        10,
        8,
        12,
        9,
        9,
        vec![
            Skill::new("Splash Jab", ElementType::Water, 8, true),
            Skill::new("Ripple Beam", ElementType::Water, 11, false),
            Skill::new("Tackle", ElementType::Normal, 7, true),
        ],
    )
}

fn bramblehorn() -> Creature {
    Creature::new(
        "Bramblehorn",
        ElementType::Leaf,
        50,
        13,
        9,
        8,
        8,
        7,
        vec![
            Skill::new("Thorn Ram", ElementType::Leaf, 10, true),
            Skill::new("Spore Puff", ElementType::Leaf, 11, false),
        ],
    )
}

fn grittusk() -> Creature {
    Creature::new(
        "Grittusk",
        ElementType::Normal,
        55,
        14,
        10,
        6,
        7,
        6,
        vec![
            Skill::new("Tusk Slam", ElementType::Normal, 11, true),
            Skill::new("Stone Fling", ElementType::Normal, 9, true),
        ],
    )
}

fn ashwing() -> Creature {
    Creature::new(
        "Ashwing",
        ElementType::Fire,
        38,
        9,
        5,
        14,
        8,
        14,
        vec![
            Skill::new("Ember Dart", ElementType::Fire, 8, false),
            Skill::new("Wing Slap", ElementType::Normal, 7, true),
            Skill::new("Heat Wave", ElementType::Fire, 13, false),
        ],
    )
}

fn mossling() -> Creature {
    Creature::new(
        "Mossling",
        ElementType::Leaf,
        44,
        8,
        7,
        12,
        10,
        8,
        vec![
            Skill::new("Vine Whip", ElementType::Leaf, 9, true),
            Skill::new("Petal Storm", ElementType::Leaf, 12, false),
        ],
    )
}

/// Every creature in the roster, fresh at full HP.
pub fn all_creatures() -> Vec<Creature> {
    vec![
        emberwolf(),
        tidefin(),
        bramblehorn(),
        grittusk(),
        ashwing(),
        mossling(),
    ]
}

/// One-creature line-up for duel mode. Side A leads with Emberwolf,
/// side B with Tidefin, so the stock duel is a live type matchup.
pub fn duel_player(name: &str, lead: Creature, controller: Controller) -> Player {
    Player::new(name, vec![lead], controller)
}

pub fn duel_pair(name_a: &str, name_b: &str, controller_b: Controller) -> (Player, Player) {
    (
        duel_player(name_a, emberwolf(), Controller::Human),
        duel_player(name_b, tidefin(), controller_b),
    )
}

/// Three-creature squads with mirrored type coverage.
pub fn squad_pair(name_a: &str, name_b: &str, controller_b: Controller) -> (Player, Player) {
    let squad_a = vec![emberwolf(), tidefin(), bramblehorn()];
    let squad_b = vec![mossling(), ashwing(), grittusk()];
    debug_assert_eq!(squad_a.len(), SQUAD_SIZE);
    debug_assert_eq!(squad_b.len(), SQUAD_SIZE);
    (
        Player::new(name_a, squad_a, Controller::Human),
        Player::new(name_b, squad_b, controller_b),
    )
}

/// Bot-vs-bot line-ups for the headless simulator.
pub fn sim_pair(squads: bool) -> (Player, Player) {
    if squads {
        let (mut a, b) = squad_pair("Bot A", "Bot B", Controller::Bot);
        a.controller = Controller::Bot;
        (a, b)
    } else {
        (
            duel_player("Bot A", emberwolf(), Controller::Bot),
            duel_player("Bot B", tidefin(), Controller::Bot),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_creatures_are_battle_ready() {
        for creature in all_creatures() {
            assert!(!creature.display_name.is_empty());
            assert!(creature.max_hp > 0);
            assert_eq!(creature.hp, creature.max_hp);
            assert!(!creature.skills.is_empty(), "{} has no skills", creature.display_name);
            assert!(creature.sp_defense > 0);
            for skill in &creature.skills {
                assert!(skill.base_damage > 0);
            }
        }
    }

    #[test]
    fn test_roster_names_are_unique() {
        let creatures = all_creatures();
        for i in 0..creatures.len() {
            for j in (i + 1)..creatures.len() {
                assert_ne!(creatures[i].display_name, creatures[j].display_name);
            }
        }
    }

    #[test]
    fn test_roster_covers_every_element() {
        let creatures = all_creatures();
        for element in [
            ElementType::Fire,
            ElementType::Water,
            ElementType::Leaf,
            ElementType::Normal,
        ] {
            assert!(
                creatures.iter().any(|c| c.creature_type == element),
                "no {} creature in roster",
                element.label()
            );
        }
    }

    #[test]
    fn test_duel_pair_is_one_on_one() {
        let (a, b) = duel_pair("P1", "P2", Controller::Bot);
        assert_eq!(a.creatures.len(), 1);
        assert_eq!(b.creatures.len(), 1);
        assert_eq!(a.controller, Controller::Human);
        assert_eq!(b.controller, Controller::Bot);
    }

    #[test]
    fn test_squad_pair_has_full_benches() {
        let (a, b) = squad_pair("P1", "P2", Controller::Bot);
        assert_eq!(a.creatures.len(), SQUAD_SIZE);
        assert_eq!(b.creatures.len(), SQUAD_SIZE);
        // No creature appears on both sides
        for ca in &a.creatures {
            assert!(b
                .creatures
                .iter()
                .all(|cb| cb.display_name != ca.display_name));
        }
    }

    #[test]
    fn test_sim_pair_is_all_bots() {
        for squads in [false, true] {
            let (a, b) = sim_pair(squads);
            assert!(a.is_bot());
            assert!(b.is_bot());
        }
    }
}
