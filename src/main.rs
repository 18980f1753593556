//! Interactive battler: main menu and battle scenes over a 50ms poll loop.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use skirmish::constants::POLL_INTERVAL_MS;
use skirmish::ui::battle_scene::{draw_battle_scene, BattleMode, BattleSceneState};
use skirmish::ui::main_menu_scene::{draw_main_menu, MainMenuState, MenuChoice};
use skirmish::build_info;
use skirmish::ui::InputOutcome;

enum Screen {
    MainMenu,
    Battle(BattleSceneState),
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skirmish {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Skirmish - Terminal Creature Battler\n");
                println!("Usage: skirmish\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!();
                println!("Related binaries: 'dashboard' browses benchmark run records,");
                println!("'simulate' runs headless bot-vs-bot battles.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skirmish --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut menu = MainMenuState::new();
    let mut screen = Screen::MainMenu;

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match &screen {
                Screen::MainMenu => draw_main_menu(frame, area, &menu),
                Screen::Battle(scene) => draw_battle_scene(frame, area, scene),
            }
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

        match &mut screen {
            Screen::MainMenu => {
                if let Some(choice) = menu.handle_key(key.code) {
                    match choice {
                        MenuChoice::DuelVsBot => {
                            screen = Screen::Battle(BattleSceneState::new(BattleMode::DuelVsBot));
                        }
                        MenuChoice::SquadVsBot => {
                            screen = Screen::Battle(BattleSceneState::new(BattleMode::SquadVsBot));
                        }
                        MenuChoice::HotSeat => {
                            screen = Screen::Battle(BattleSceneState::new(BattleMode::HotSeat));
                        }
                        MenuChoice::Quit => return Ok(()),
                    }
                }
            }
            Screen::Battle(scene) => match scene.handle_key(key.code) {
                InputOutcome::Continue => {}
                InputOutcome::ToMenu => {
                    menu = MainMenuState::new();
                    screen = Screen::MainMenu;
                }
                InputOutcome::QuitGame => return Ok(()),
            },
        }
    }
}
