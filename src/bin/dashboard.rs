//! Benchmark results dashboard TUI.
//!
//! Usage:
//!   cargo run --bin dashboard -- <records.json> [owner/repo]
//!
//! The records file is a JSON array of run records; the optional repo slug
//! is used to build code/log links (defaults to a placeholder).

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use skirmish::constants::POLL_INTERVAL_MS;
use skirmish::dashboard::load_records;
use skirmish::ui::dashboard_scene::{draw_dashboard, DashboardState};
use skirmish::ui::InputOutcome;

const DEFAULT_REPO: &str = "example/benchmark-runs";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let Some(records_path) = args.get(1) else {
        eprintln!("Usage: dashboard <records.json> [owner/repo]");
        std::process::exit(1);
    };
    if records_path == "--help" || records_path == "-h" {
        println!("Skirmish Benchmark Dashboard\n");
        println!("Usage: dashboard <records.json> [owner/repo]\n");
        println!("Keys: Left/Right switch ladder, Up/Down select, Enter expand, Q quit.");
        return Ok(());
    }
    let repo = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| DEFAULT_REPO.to_string());

    let records = match load_records(records_path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to load {}: {}", records_path, e);
            std::process::exit(1);
        }
    };

    let mut state = DashboardState::new(records, repo);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut DashboardState,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            draw_dashboard(frame, area, state);
        })?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key.code) {
            InputOutcome::QuitGame => return Ok(()),
            InputOutcome::Continue | InputOutcome::ToMenu => {}
        }
    }
}
