//! Headless random-mode runner: bot-vs-bot playouts under a move budget.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::SimReport;
use crate::battle::logic::submit_action;
use crate::battle::policy::random_action;
use crate::battle::{BattlePhase, BattleState, Side};
use crate::creatures::roster;

/// Outcome of one simulated battle.
#[derive(Debug, Clone)]
pub struct BattleRecord {
    /// None when the move budget stopped the battle first.
    pub winner: Option<Side>,
    pub rounds: u32,
    pub budget_exhausted: bool,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut records = Vec::with_capacity(config.num_battles as usize);

    for battle_idx in 0..config.num_battles {
        // Each battle gets its own RNG so seeded runs replay exactly.
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + battle_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let record = simulate_single_battle(config, &mut rng);

        if config.verbosity >= 2 {
            let outcome = match record.winner {
                Some(Side::A) => "A wins",
                Some(Side::B) => "B wins",
                None => "budget stop",
            };
            println!(
                "Battle {}/{} - {} after {} rounds",
                battle_idx + 1,
                config.num_battles,
                outcome,
                record.rounds
            );
        }

        records.push(record);
    }

    SimReport::from_battles(records, config.move_budget)
}

/// Drive both sides with the random policy until completion or budget.
fn simulate_single_battle(config: &SimConfig, rng: &mut ChaCha8Rng) -> BattleRecord {
    let (player_a, player_b) = roster::sim_pair(config.squads);
    let mut state = BattleState::new(player_a, player_b);

    let mut moves_submitted: u32 = 0;
    while moves_submitted < config.move_budget {
        let side = match state.phase {
            BattlePhase::Choosing(side) | BattlePhase::AwaitingSwap(side) => side,
            BattlePhase::Complete => break,
        };
        let Some(action) = random_action(&state, side, rng) else {
            break;
        };
        // Legal by construction, so submission cannot fail.
        let _ = submit_action(&mut state, side, action, rng);
        moves_submitted += 1;
    }

    BattleRecord {
        winner: state.outcome,
        rounds: state.round,
        budget_exhausted: !state.is_complete(),
    }
}
