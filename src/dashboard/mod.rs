//! Benchmark run-results dashboard: record model, loader, aggregation,
//! and GitHub link construction. Shares no state with the battler.

pub mod calculations;
pub mod github;
pub mod loader;
pub mod types;

pub use calculations::{agent_ladder_success_rates, agent_success_rates, AgentLadderSummary, AgentSummary};
pub use loader::load_records;
pub use types::{field_present, RunRecord};
