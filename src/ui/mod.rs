//! Terminal scenes: main menu, battle view, and the results dashboard.

pub mod battle_scene;
pub mod dashboard_scene;
pub mod main_menu_scene;

/// What a scene wants the main loop to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    ToMenu,
    /// Unwinds the main loop; the terminal is restored and the process exits.
    QuitGame,
}
