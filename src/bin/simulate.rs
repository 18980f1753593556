//! Random-mode battle simulator CLI.
//!
//! Plays headless bot-vs-bot battles and reports the outcome split.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 100 duels
//!   cargo run --bin simulate -- --battles 500     # Bigger batch
//!   cargo run --bin simulate -- --seed 42         # Reproducible run
//!   cargo run --bin simulate -- --squads          # Three-creature benches

use skirmish::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH RANDOM-MODE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Battles:      {}", config.num_battles);
    println!("  Move Budget:  {}", config.move_budget);
    println!("  Mode:         {}", if config.squads { "squads" } else { "duels" });
    if let Some(seed) = config.seed {
        println!("  Seed:         {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write JSON report: {}", e);
            std::process::exit(1);
        }
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--battles" => {
                if i + 1 < args.len() {
                    config.num_battles = args[i + 1].parse().unwrap_or(config.num_battles);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-b" | "--budget" => {
                if i + 1 < args.len() {
                    config.move_budget = args[i + 1].parse().unwrap_or(config.move_budget);
                    i += 1;
                }
            }
            "--squads" => {
                config.squads = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--full" => {
                config = SimConfig::full();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Skirmish Random-Mode Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --battles <N>   Number of battles (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -b, --budget <M>    Move budget per battle (default: 200)");
    println!("    --squads            Squad battles instead of duels");
    println!("    --json              Save JSON report");
    println!("    -v, --verbose       Per-battle output");
    println!("    --quick             Quick check (20 duels)");
    println!("    --full              Full sweep (500 squad battles)");
    println!("    -h, --help          Show this help");
}
