//! Turn-based battle engine: phase machine, round resolution, bot policy.

pub mod logic;
pub mod policy;
pub mod types;

pub use types::*;
