//! Simple random bot policy, shared by interactive play and the simulator.

use rand::Rng;

use super::logic::legal_actions;
use super::types::{BattleAction, BattleState, Side};

/// Pick uniformly among the side's legal actions. Only meaningful while the
/// phase is waiting on this side; returns None otherwise.
pub fn random_action<R: Rng>(state: &BattleState, side: Side, rng: &mut R) -> Option<BattleAction> {
    let actions = legal_actions(state, side);
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.gen_range(0..actions.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::types::BattlePhase;
    use crate::creatures::{roster, Controller};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_action_is_always_legal() {
        let (a, b) = roster::squad_pair("P1", "P2", Controller::Bot);
        let state = crate::battle::BattleState::new(a, b);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let action = random_action(&state, Side::A, &mut rng).expect("side A must have moves");
            assert!(legal_actions(&state, Side::A).contains(&action));
        }
    }

    #[test]
    fn test_random_action_none_when_battle_over() {
        let (a, b) = roster::duel_pair("P1", "P2", Controller::Bot);
        let mut state = crate::battle::BattleState::new(a, b);
        state.phase = BattlePhase::Complete;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(random_action(&state, Side::A, &mut rng).is_none());
    }

    #[test]
    fn test_random_action_none_for_side_not_choosing() {
        let (a, b) = roster::duel_pair("P1", "P2", Controller::Bot);
        let state = crate::battle::BattleState::new(a, b);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        assert_eq!(state.phase, BattlePhase::Choosing(Side::A));
        assert!(random_action(&state, Side::B, &mut rng).is_none());
    }

    #[test]
    fn test_random_action_covers_every_option() {
        let (a, b) = roster::squad_pair("P1", "P2", Controller::Bot);
        let state = crate::battle::BattleState::new(a, b);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let legal = legal_actions(&state, Side::A);
        let mut seen = vec![false; legal.len()];
        for _ in 0..200 {
            let action = random_action(&state, Side::A, &mut rng).unwrap();
            let pos = legal.iter().position(|a| *a == action).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|s| *s), "some legal action never chosen");
    }
}
