//! Round resolution: action legality, turn ordering, and the damage formula.

use rand::Rng;

use super::types::{BattleAction, BattleEvent, BattlePhase, BattleState, Side};
use crate::constants::{MIN_DAMAGE, NEUTRAL_FACTOR, STRONG_FACTOR, WEAK_FACTOR};
use crate::creatures::{Creature, ElementType, Skill};

/// Type effectiveness chart. Fire beats Leaf, Water beats Fire, Leaf beats
/// Water; Normal is neutral both ways; same-type matchups are neutral.
pub fn type_factor(skill_type: ElementType, defender_type: ElementType) -> f64 {
    use ElementType::*;
    match (skill_type, defender_type) {
        (Fire, Leaf) | (Water, Fire) | (Leaf, Water) => STRONG_FACTOR,
        (Fire, Water) | (Water, Leaf) | (Leaf, Fire) => WEAK_FACTOR,
        _ => NEUTRAL_FACTOR,
    }
}

/// Shared damage formula. Physical skills pit attack against defense,
/// special skills scale base damage by the sp_attack/sp_defense ratio.
/// Truncated to integer after the type factor, never below MIN_DAMAGE.
pub fn compute_damage(attacker: &Creature, defender: &Creature, skill: &Skill) -> u32 {
    let raw = if skill.is_physical {
        attacker.attack as f64 + skill.base_damage as f64 - defender.defense as f64
    } else {
        // A zero sp_defense counts as 1 rather than dividing by zero.
        let divisor = defender.sp_defense.max(1) as f64;
        (attacker.sp_attack as f64 / divisor) * skill.base_damage as f64
    };
    let factor = type_factor(skill.skill_type, defender.creature_type);
    let scaled = (raw * factor).trunc();
    if scaled < MIN_DAMAGE as f64 {
        MIN_DAMAGE
    } else {
        scaled as u32
    }
}

/// Every action the side could legally submit right now.
pub fn legal_actions(state: &BattleState, side: Side) -> Vec<BattleAction> {
    match state.phase {
        BattlePhase::Complete => Vec::new(),
        BattlePhase::AwaitingSwap(s) => {
            if s != side {
                return Vec::new();
            }
            state
                .player(side)
                .living_bench_indices()
                .into_iter()
                .map(BattleAction::Swap)
                .collect()
        }
        BattlePhase::Choosing(s) => {
            if s != side {
                return Vec::new();
            }
            let player = state.player(side);
            let mut actions: Vec<BattleAction> = (0..player.active_creature().skills.len())
                .map(BattleAction::UseSkill)
                .collect();
            actions.extend(player.living_bench_indices().into_iter().map(BattleAction::Swap));
            actions
        }
    }
}

/// Submit one side's action. Out-of-phase submissions and out-of-range
/// indices are rejected and leave the state untouched. Once both sides have
/// chosen, the round resolves and its events are returned.
pub fn submit_action<R: Rng>(
    state: &mut BattleState,
    side: Side,
    action: BattleAction,
    rng: &mut R,
) -> Result<Vec<BattleEvent>, String> {
    match state.phase {
        BattlePhase::Complete => Err("the battle is over".to_string()),
        BattlePhase::AwaitingSwap(s) => {
            if s != side {
                return Err("waiting on a swap from the other side".to_string());
            }
            let index = match action {
                BattleAction::Swap(index) => index,
                BattleAction::UseSkill(_) => {
                    return Err("a fainted active can only be swapped out".to_string())
                }
            };
            validate_swap(state, side, index)?;
            let mut events = Vec::new();
            apply_swap(state, side, index, &mut events);
            state.phase = BattlePhase::Choosing(Side::A);
            Ok(events)
        }
        BattlePhase::Choosing(s) => {
            if s != side {
                return Err("not this side's turn to choose".to_string());
            }
            validate_action(state, side, action)?;
            state.set_pending(side, action);
            if state.pending(side.opponent()).is_some() {
                Ok(resolve_round(state, rng))
            } else {
                state.phase = BattlePhase::Choosing(side.opponent());
                Ok(Vec::new())
            }
        }
    }
}

fn validate_action(state: &BattleState, side: Side, action: BattleAction) -> Result<(), String> {
    match action {
        BattleAction::UseSkill(index) => {
            let skills = &state.player(side).active_creature().skills;
            if index >= skills.len() {
                return Err(format!("skill index {} out of range", index));
            }
            Ok(())
        }
        BattleAction::Swap(index) => validate_swap(state, side, index),
    }
}

fn validate_swap(state: &BattleState, side: Side, index: usize) -> Result<(), String> {
    let player = state.player(side);
    if index >= player.creatures.len() {
        return Err(format!("swap index {} out of range", index));
    }
    if index == player.active {
        return Err("cannot swap to the creature already in play".to_string());
    }
    if !player.creatures[index].is_alive() {
        return Err(format!(
            "{} has fainted and cannot be sent in",
            player.creatures[index].display_name
        ));
    }
    Ok(())
}

/// Resolve the round now that both actions are in: swaps strictly before
/// skills, then faster creature first, equal speeds settled by a coin flip.
fn resolve_round<R: Rng>(state: &mut BattleState, rng: &mut R) -> Vec<BattleEvent> {
    let action_a = state.pending_a.take().unwrap_or(BattleAction::UseSkill(0));
    let action_b = state.pending_b.take().unwrap_or(BattleAction::UseSkill(0));
    state.clear_pending();

    let order = action_order(state, action_a, action_b, rng);

    let mut events = Vec::new();
    for (side, action) in order {
        if state.outcome.is_some() {
            break;
        }
        match action {
            BattleAction::Swap(index) => apply_swap(state, side, index, &mut events),
            BattleAction::UseSkill(index) => apply_skill(state, side, index, &mut events),
        }
    }

    state.round += 1;

    if state.outcome.is_none() {
        state.phase = match fainted_active(state) {
            Some(side) => BattlePhase::AwaitingSwap(side),
            None => BattlePhase::Choosing(Side::A),
        };
    }

    events
}

/// Orders the two pending actions for resolution.
fn action_order<R: Rng>(
    state: &BattleState,
    action_a: BattleAction,
    action_b: BattleAction,
    rng: &mut R,
) -> [(Side, BattleAction); 2] {
    let a_first = [(Side::A, action_a), (Side::B, action_b)];
    let b_first = [(Side::B, action_b), (Side::A, action_a)];

    let swap_a = matches!(action_a, BattleAction::Swap(_));
    let swap_b = matches!(action_b, BattleAction::Swap(_));
    if swap_a != swap_b {
        return if swap_a { a_first } else { b_first };
    }

    let speed_a = state.player(Side::A).active_creature().speed;
    let speed_b = state.player(Side::B).active_creature().speed;
    if speed_a > speed_b {
        a_first
    } else if speed_b > speed_a {
        b_first
    } else if rng.gen_bool(0.5) {
        a_first
    } else {
        b_first
    }
}

fn apply_swap(state: &mut BattleState, side: Side, index: usize, events: &mut Vec<BattleEvent>) {
    state.player_mut(side).active = index;
    let name = state.player(side).active_creature().display_name.clone();
    state.add_log(format!(
        "{} sent in {}.",
        state.player(side).display_name, name
    ));
    events.push(BattleEvent::Swapped { side, name });
}

fn apply_skill(state: &mut BattleState, side: Side, index: usize, events: &mut Vec<BattleEvent>) {
    if !state.player(side).active_creature().is_alive() {
        state.add_log(format!(
            "{}'s creature was down before it could act.",
            state.player(side).display_name
        ));
        events.push(BattleEvent::SkillFizzled { side });
        return;
    }

    let attacker = state.player(side).active_creature();
    let defender = state.player(side.opponent()).active_creature();
    let skill = attacker.skills[index].clone();
    let damage = compute_damage(attacker, defender, &skill);
    let effectiveness = type_factor(skill.skill_type, defender.creature_type);
    let attacker_name = attacker.display_name.clone();
    let defender_name = defender.display_name.clone();

    state
        .player_mut(side.opponent())
        .active_creature_mut()
        .take_damage(damage);

    let mut line = format!(
        "{} used {} for {} damage!",
        attacker_name, skill.display_name, damage
    );
    if effectiveness > NEUTRAL_FACTOR {
        line.push_str(" It's super effective!");
    } else if effectiveness < NEUTRAL_FACTOR {
        line.push_str(" It's not very effective...");
    }
    state.add_log(line);

    events.push(BattleEvent::SkillUsed {
        side,
        attacker: attacker_name,
        skill: skill.display_name,
        damage,
        effectiveness,
    });

    if !state.player(side.opponent()).active_creature().is_alive() {
        state.add_log(format!("{} fainted!", defender_name));
        events.push(BattleEvent::CreatureFainted {
            side: side.opponent(),
            name: defender_name,
        });
        if !state.player(side.opponent()).has_living_creature() {
            conclude(state, side, events);
        }
    }
}

fn fainted_active(state: &BattleState) -> Option<Side> {
    for side in [Side::A, Side::B] {
        if !state.player(side).active_creature().is_alive()
            && state.player(side).has_living_creature()
        {
            return Some(side);
        }
    }
    None
}

/// Ends the battle and heals both teams back to full.
fn conclude(state: &mut BattleState, winner: Side, events: &mut Vec<BattleEvent>) {
    state.outcome = Some(winner);
    state.phase = BattlePhase::Complete;
    state.add_log(format!("{} wins the battle!", state.player(winner).display_name));
    events.push(BattleEvent::BattleEnded { winner });
    state.player_a.reset_team();
    state.player_b.reset_team();
}
