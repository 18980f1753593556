//! Simulation configuration.

use crate::constants::{DEFAULT_MOVE_BUDGET, DEFAULT_SIM_BATTLES};

/// Configuration for a random-mode simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of bot-vs-bot battles to play out
    pub num_battles: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum submitted actions per battle before a graceful stop
    pub move_budget: u32,

    /// Squad mode (three-creature benches) instead of one-on-one duels
    pub squads: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-battle lines)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_battles: DEFAULT_SIM_BATTLES,
            seed: None,
            move_budget: DEFAULT_MOVE_BUDGET,
            squads: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity check: a handful of duels.
    pub fn quick() -> Self {
        Self {
            num_battles: 20,
            ..Default::default()
        }
    }

    /// Full sweep: many squad battles.
    pub fn full() -> Self {
        Self {
            num_battles: 500,
            squads: true,
            ..Default::default()
        }
    }
}
