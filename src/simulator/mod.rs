//! Headless random-mode simulator.
//!
//! Plays bot-vs-bot battles under a per-battle move budget and aggregates
//! the outcomes into a report. Exhausting the budget is benign termination.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, BattleRecord};
