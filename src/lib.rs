//! Skirmish - creature battler and benchmark results dashboard.
//!
//! This module exposes the battle engine, simulator, and dashboard logic
//! for the binaries and for testing.

pub mod battle;
pub mod build_info;
pub mod constants;
pub mod creatures;
pub mod dashboard;
pub mod simulator;
pub mod ui;
