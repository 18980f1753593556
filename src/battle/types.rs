use std::collections::VecDeque;

use crate::constants::BATTLE_LOG_CAPACITY;
use crate::creatures::Player;

/// The two seats in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// One choice a side can submit for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    /// Index into the active creature's skill list.
    UseSkill(usize),
    /// Index into the player's creature list (must be a living bench slot).
    Swap(usize),
}

/// Where the battle currently waits for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// That side must submit its action for the round.
    Choosing(Side),
    /// That side's active creature fainted and a replacement must be sent in.
    AwaitingSwap(Side),
    Complete,
}

/// Everything that happened while resolving input, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    SkillUsed {
        side: Side,
        attacker: String,
        skill: String,
        damage: u32,
        effectiveness: f64,
    },
    Swapped {
        side: Side,
        name: String,
    },
    /// The actor was knocked out earlier in the same round and lost its turn.
    SkillFizzled {
        side: Side,
    },
    CreatureFainted {
        side: Side,
        name: String,
    },
    BattleEnded {
        winner: Side,
    },
}

/// Full state of one battle. Both teams enter at max HP and leave at max HP.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub player_a: Player,
    pub player_b: Player,
    pub phase: BattlePhase,
    /// Resolved rounds so far.
    pub round: u32,
    pub log: VecDeque<String>,
    pub outcome: Option<Side>,
    pub(crate) pending_a: Option<BattleAction>,
    pub(crate) pending_b: Option<BattleAction>,
}

impl BattleState {
    pub fn new(mut player_a: Player, mut player_b: Player) -> Self {
        player_a.reset_team();
        player_b.reset_team();
        Self {
            player_a,
            player_b,
            phase: BattlePhase::Choosing(Side::A),
            round: 0,
            log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
            outcome: None,
            pending_a: None,
            pending_b: None,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::A => &mut self.player_a,
            Side::B => &mut self.player_b,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BattlePhase::Complete
    }

    pub fn add_log(&mut self, message: String) {
        if self.log.len() >= BATTLE_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(message);
    }

    pub(crate) fn pending(&self, side: Side) -> Option<BattleAction> {
        match side {
            Side::A => self.pending_a,
            Side::B => self.pending_b,
        }
    }

    pub(crate) fn set_pending(&mut self, side: Side, action: BattleAction) {
        match side {
            Side::A => self.pending_a = Some(action),
            Side::B => self.pending_b = Some(action),
        }
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending_a = None;
        self.pending_b = None;
    }
}
