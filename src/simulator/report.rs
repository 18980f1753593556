//! Simulation report generation.

use super::runner::BattleRecord;
use crate::battle::Side;

/// Aggregated results from a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_battles: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    /// Battles stopped by the move budget (benign, not an error).
    pub graceful_stops: u32,

    pub avg_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,

    pub move_budget: u32,

    /// Individual records for detailed analysis.
    pub records: Vec<BattleRecord>,
}

impl SimReport {
    pub fn from_battles(records: Vec<BattleRecord>, move_budget: u32) -> Self {
        let num_battles = records.len() as u32;
        let wins_a = records.iter().filter(|r| r.winner == Some(Side::A)).count() as u32;
        let wins_b = records.iter().filter(|r| r.winner == Some(Side::B)).count() as u32;
        let graceful_stops = records.iter().filter(|r| r.budget_exhausted).count() as u32;

        let avg_rounds = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.rounds as f64).sum::<f64>() / num_battles as f64
        };
        let min_rounds = records.iter().map(|r| r.rounds).min().unwrap_or(0);
        let max_rounds = records.iter().map(|r| r.rounds).max().unwrap_or(0);

        Self {
            num_battles,
            wins_a,
            wins_b,
            graceful_stops,
            avg_rounds,
            min_rounds,
            max_rounds,
            move_budget,
            records,
        }
    }

    fn percent(&self, count: u32) -> f64 {
        if self.num_battles == 0 {
            0.0
        } else {
            (count as f64 / self.num_battles as f64) * 100.0
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 RANDOM-MODE BATTLE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Battles: {} total, {} decided, {} stopped at the {}-move budget\n\n",
            self.num_battles,
            self.wins_a + self.wins_b,
            self.graceful_stops,
            self.move_budget
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        for (label, count) in [
            ("Side A wins", self.wins_a),
            ("Side B wins", self.wins_b),
            ("Budget stop", self.graceful_stops),
        ] {
            let pct = self.percent(count);
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<12} {:>5.1}% {}\n", label, pct, bar));
        }
        report.push('\n');

        report.push_str("── ROUNDS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rounds:  {:.1}\n", self.avg_rounds));
        report.push_str(&format!("  Min Rounds:  {}\n", self.min_rounds));
        report.push_str(&format!("  Max Rounds:  {}\n", self.max_rounds));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Manual Serialize: only the aggregate fields go to JSON, not every record.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 8)?;
        state.serialize_field("num_battles", &self.num_battles)?;
        state.serialize_field("wins_a", &self.wins_a)?;
        state.serialize_field("wins_b", &self.wins_b)?;
        state.serialize_field("graceful_stops", &self.graceful_stops)?;
        state.serialize_field("avg_rounds", &self.avg_rounds)?;
        state.serialize_field("min_rounds", &self.min_rounds)?;
        state.serialize_field("max_rounds", &self.max_rounds)?;
        state.serialize_field("move_budget", &self.move_budget)?;
        state.end()
    }
}
