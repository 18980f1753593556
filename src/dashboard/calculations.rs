//! Success-rate aggregation over run records.

use std::collections::HashMap;

use super::types::RunRecord;

/// Per-agent aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSummary {
    pub agent_id: String,
    pub total: u32,
    pub successes: u32,
    /// In [0.0, 1.0]; divides by this group's total only.
    pub rate: f64,
}

/// Per-agent-per-ladder aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentLadderSummary {
    pub agent_id: String,
    pub ladder: String,
    pub total: u32,
    pub successes: u32,
    pub rate: f64,
}

fn rate(successes: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        successes as f64 / total as f64
    }
}

/// Group records by agent and compute per-agent success rates,
/// sorted by agent id.
pub fn agent_success_rates(records: &[RunRecord]) -> Vec<AgentSummary> {
    let mut groups: HashMap<String, (u32, u32)> = HashMap::new();
    for record in records {
        let entry = groups.entry(record.agent_id.clone()).or_insert((0, 0));
        entry.0 += 1;
        if record.is_success() {
            entry.1 += 1;
        }
    }

    let mut summaries: Vec<AgentSummary> = groups
        .into_iter()
        .map(|(agent_id, (total, successes))| AgentSummary {
            agent_id,
            total,
            successes,
            rate: rate(successes, total),
        })
        .collect();
    summaries.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
    summaries
}

/// Group records by (agent, ladder), sorted by agent id then ladder.
pub fn agent_ladder_success_rates(records: &[RunRecord]) -> Vec<AgentLadderSummary> {
    let mut groups: HashMap<(String, String), (u32, u32)> = HashMap::new();
    for record in records {
        let key = (record.agent_id.clone(), record.ladder.clone());
        let entry = groups.entry(key).or_insert((0, 0));
        entry.0 += 1;
        if record.is_success() {
            entry.1 += 1;
        }
    }

    let mut summaries: Vec<AgentLadderSummary> = groups
        .into_iter()
        .map(|((agent_id, ladder), (total, successes))| AgentLadderSummary {
            agent_id,
            ladder,
            total,
            successes,
            rate: rate(successes, total),
        })
        .collect();
    summaries.sort_by(|a, b| {
        a.agent_id
            .cmp(&b.agent_id)
            .then_with(|| a.ladder.cmp(&b.ladder))
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(agent: &str, ladder: &str, status: &str) -> RunRecord {
        RunRecord {
            agent_id: agent.to_string(),
            ladder: ladder.to_string(),
            run: 0,
            status: status.to_string(),
            branch: None,
            error: None,
            traceback: None,
            file_timestamp: None,
            logs: None,
            commit_url: None,
        }
    }

    #[test]
    fn test_agent_success_rates() {
        let records = vec![
            record("beta", "easy", "success"),
            record("alpha", "easy", "success"),
            record("alpha", "hard", "failure"),
            record("alpha", "hard", "success"),
        ];

        let summaries = agent_success_rates(&records);
        assert_eq!(summaries.len(), 2);

        // Sorted by agent id.
        assert_eq!(summaries[0].agent_id, "alpha");
        assert_eq!(summaries[0].total, 3);
        assert_eq!(summaries[0].successes, 2);
        assert!((summaries[0].rate - 2.0 / 3.0).abs() < 1e-9);

        assert_eq!(summaries[1].agent_id, "beta");
        assert!((summaries[1].rate - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_agent_ladder_success_rates() {
        let records = vec![
            record("alpha", "hard", "failure"),
            record("alpha", "easy", "success"),
            record("alpha", "hard", "success"),
            record("beta", "easy", "failure"),
        ];

        let summaries = agent_ladder_success_rates(&records);
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].agent_id, "alpha");
        assert_eq!(summaries[0].ladder, "easy");
        assert!((summaries[0].rate - 1.0).abs() < 1e-9);

        assert_eq!(summaries[1].ladder, "hard");
        assert_eq!(summaries[1].total, 2);
        assert!((summaries[1].rate - 0.5).abs() < 1e-9);

        assert_eq!(summaries[2].agent_id, "beta");
        assert_eq!(summaries[2].rate, 0.0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(agent_success_rates(&[]).is_empty());
        assert!(agent_ladder_success_rates(&[]).is_empty());
    }

    #[test]
    fn test_rates_divide_by_own_group_total() {
        let records = vec![
            record("alpha", "easy", "success"),
            record("beta", "easy", "failure"),
            record("beta", "easy", "failure"),
        ];

        let summaries = agent_success_rates(&records);
        assert!((summaries[0].rate - 1.0).abs() < 1e-9);
        assert_eq!(summaries[1].rate, 0.0);
    }
}
