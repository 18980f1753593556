//! Main menu scene: battle mode selection.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::build_info;

pub const MENU_ENTRIES: [&str; 4] = [
    "Duel vs Bot",
    "Squad Battle vs Bot",
    "Hot-Seat Duel",
    "Quit",
];

/// What the player picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DuelVsBot,
    SquadVsBot,
    HotSeat,
    Quit,
}

pub struct MainMenuState {
    pub selected_index: usize,
}

impl MainMenuState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MENU_ENTRIES.len() {
            self.selected_index += 1;
        }
    }

    /// Map a key to a menu choice. `q`/Esc quit the whole program from here.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<MenuChoice> {
        match code {
            KeyCode::Up => {
                self.move_up();
                None
            }
            KeyCode::Down => {
                self.move_down();
                None
            }
            KeyCode::Enter => Some(match self.selected_index {
                0 => MenuChoice::DuelVsBot,
                1 => MenuChoice::SquadVsBot,
                2 => MenuChoice::HotSeat,
                _ => MenuChoice::Quit,
            }),
            KeyCode::Esc | KeyCode::Char('q') => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

impl Default for MainMenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw_main_menu(frame: &mut Frame, area: Rect, state: &MainMenuState) {
    let block = Block::default()
        .title(" Skirmish ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Min(0),    // Entries
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "Creature Skirmish",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("build {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prefix = if i == state.selected_index { "> " } else { "  " };
            let style = if i == state.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, entry)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    let help = Paragraph::new("[Up/Down] Navigate  [Enter] Select  [Q/Esc] Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
