//! Battle scene: actives with HP gauges, action list, battle log, and the
//! play-again prompt. One scene covers every battle mode; bot turns are
//! resolved automatically after each human submission.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::InputOutcome;
use crate::battle::logic::submit_action;
use crate::battle::policy::random_action;
use crate::battle::{BattleAction, BattlePhase, BattleState, Side};
use crate::creatures::{roster, Controller, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleMode {
    DuelVsBot,
    SquadVsBot,
    HotSeat,
}

const PLAY_AGAIN_ENTRIES: [&str; 2] = ["Play Again", "Main Menu"];

pub struct BattleSceneState {
    pub mode: BattleMode,
    pub battle: BattleState,
    pub selected_index: usize,
    pub play_again_index: usize,
}

fn new_battle(mode: BattleMode) -> BattleState {
    let (a, b) = match mode {
        BattleMode::DuelVsBot => roster::duel_pair("You", "Rival Bot", Controller::Bot),
        BattleMode::SquadVsBot => roster::squad_pair("You", "Rival Bot", Controller::Bot),
        BattleMode::HotSeat => roster::duel_pair("Player 1", "Player 2", Controller::Human),
    };
    BattleState::new(a, b)
}

impl BattleSceneState {
    pub fn new(mode: BattleMode) -> Self {
        Self {
            mode,
            battle: new_battle(mode),
            selected_index: 0,
            play_again_index: 0,
        }
    }

    /// The side the scene is currently collecting input for, if any.
    pub fn current_side(&self) -> Option<Side> {
        match self.battle.phase {
            BattlePhase::Choosing(side) | BattlePhase::AwaitingSwap(side) => Some(side),
            BattlePhase::Complete => None,
        }
    }

    /// Labelled actions for the side currently choosing.
    pub fn action_menu(&self) -> Vec<(BattleAction, String)> {
        let Some(side) = self.current_side() else {
            return Vec::new();
        };
        let player = self.battle.player(side);
        crate::battle::logic::legal_actions(&self.battle, side)
            .into_iter()
            .map(|action| {
                let label = match action {
                    BattleAction::UseSkill(i) => {
                        let skill = &player.active_creature().skills[i];
                        format!(
                            "{}  [{}, {} dmg, {}]",
                            skill.display_name,
                            skill.skill_type.label(),
                            skill.base_damage,
                            if skill.is_physical { "phys" } else { "spec" }
                        )
                    }
                    BattleAction::Swap(i) => {
                        format!("Swap -> {}", player.creatures[i].display_name)
                    }
                };
                (action, label)
            })
            .collect()
    }

    /// Resolve bot turns until the battle waits on a human (or ends).
    fn advance_bots(&mut self) {
        let mut rng = rand::thread_rng();
        while let Some(side) = self.current_side() {
            if !self.battle.player(side).is_bot() {
                break;
            }
            let Some(action) = random_action(&self.battle, side, &mut rng) else {
                break;
            };
            let _ = submit_action(&mut self.battle, side, action, &mut rng);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> InputOutcome {
        if self.battle.is_complete() {
            return self.handle_play_again_key(code);
        }

        match code {
            KeyCode::Up => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
                InputOutcome::Continue
            }
            KeyCode::Down => {
                let max = self.action_menu().len();
                if self.selected_index + 1 < max {
                    self.selected_index += 1;
                }
                InputOutcome::Continue
            }
            KeyCode::Enter => {
                self.submit_selected();
                InputOutcome::Continue
            }
            KeyCode::Esc => InputOutcome::ToMenu,
            _ => InputOutcome::Continue,
        }
    }

    fn handle_play_again_key(&mut self, code: KeyCode) -> InputOutcome {
        match code {
            KeyCode::Up | KeyCode::Down => {
                self.play_again_index = 1 - self.play_again_index;
                InputOutcome::Continue
            }
            KeyCode::Enter => {
                if self.play_again_index == 0 {
                    self.battle = new_battle(self.mode);
                    self.selected_index = 0;
                    self.play_again_index = 0;
                    InputOutcome::Continue
                } else {
                    InputOutcome::ToMenu
                }
            }
            KeyCode::Esc => InputOutcome::ToMenu,
            _ => InputOutcome::Continue,
        }
    }

    fn submit_selected(&mut self) {
        let Some(side) = self.current_side() else {
            return;
        };
        let menu = self.action_menu();
        let Some((action, _)) = menu.get(self.selected_index) else {
            return;
        };
        let mut rng = rand::thread_rng();
        if submit_action(&mut self.battle, side, *action, &mut rng).is_ok() {
            self.selected_index = 0;
            self.advance_bots();
        }
    }
}

pub fn draw_battle_scene(frame: &mut Frame, area: Rect, state: &BattleSceneState) {
    let block = Block::default()
        .title(" Battle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Side B active
            Constraint::Length(4), // Side A active
            Constraint::Min(6),    // Actions + log
            Constraint::Length(1), // Help
        ])
        .split(inner);

    draw_active(frame, chunks[0], state.battle.player(Side::B), Color::Red);
    draw_active(frame, chunks[1], state.battle.player(Side::A), Color::Green);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    if state.battle.is_complete() {
        draw_play_again(frame, body[0], state);
    } else {
        draw_action_list(frame, body[0], state);
    }
    draw_battle_log(frame, body[1], state);

    let help_text = if state.battle.is_complete() {
        "[Up/Down] Select  [Enter] Confirm  [Esc] Main Menu"
    } else {
        "[Up/Down] Navigate  [Enter] Submit  [Esc] Main Menu"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_active(frame: &mut Frame, area: Rect, player: &Player, gauge_color: Color) {
    let creature = player.active_creature();
    let title = format!(" {} - {} ", player.display_name, creature.display_name);

    let hp_ratio = creature.hp_fraction().clamp(0.0, 1.0);
    let mut label = format!(
        "{} | HP {}/{}",
        creature.creature_type.label(),
        creature.hp,
        creature.max_hp
    );

    // Bench markers in squad mode.
    if player.creatures.len() > 1 {
        let bench: Vec<String> = player
            .creatures
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != player.active)
            .map(|(_, c)| {
                format!("{}{}", if c.is_alive() { "" } else { "x " }, c.display_name)
            })
            .collect();
        label.push_str(&format!(" | bench: {}", bench.join(", ")));
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .label(label)
        .ratio(hp_ratio);
    frame.render_widget(gauge, area);
}

fn draw_action_list(frame: &mut Frame, area: Rect, state: &BattleSceneState) {
    let side = state.current_side();
    let title = match side {
        Some(side) => {
            let player = state.battle.player(side);
            match state.battle.phase {
                BattlePhase::AwaitingSwap(_) => format!(" {} - send in a creature ", player.display_name),
                _ => format!(" {} - choose an action ", player.display_name),
            }
        }
        None => " Actions ".to_string(),
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = state
        .action_menu()
        .into_iter()
        .enumerate()
        .map(|(i, (_, label))| {
            let prefix = if i == state.selected_index { "> " } else { "  " };
            let style = if i == state.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, label)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn draw_play_again(frame: &mut Frame, area: Rect, state: &BattleSceneState) {
    let winner = state
        .battle
        .outcome
        .map(|side| state.battle.player(side).display_name.clone())
        .unwrap_or_else(|| "Nobody".to_string());

    let block = Block::default()
        .title(format!(" {} wins! ", winner))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = PLAY_AGAIN_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prefix = if i == state.play_again_index { "> " } else { "  " };
            let style = if i == state.play_again_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, entry)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn draw_battle_log(frame: &mut Frame, area: Rect, state: &BattleSceneState) {
    let block = Block::default().title(" Log ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let lines: Vec<Line> = state
        .battle
        .log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| Line::from(Span::raw(entry.clone())))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
