//! Creature, skill, and player data model plus the fixed roster.

pub mod roster;
pub mod types;

pub use roster::*;
pub use types::*;
