//! Integration test: dashboard data flow
//!
//! Loads run records from disk, aggregates success rates, and builds the
//! GitHub links the browser scene renders.

use std::fs;
use std::io;

use skirmish::dashboard::github::{
    branch_tree_url, desanitize_branch, run_logs_url, sanitize_branch,
};
use skirmish::dashboard::{
    agent_ladder_success_rates, agent_success_rates, field_present, load_records,
};
use skirmish::ui::dashboard_scene::DashboardState;

const SAMPLE_RECORDS: &str = r#"[
    {
        "agent_id": "codegen-a",
        "ladder": "easy",
        "run": 1,
        "status": "success",
        "branch": "runs__wave-1",
        "file_timestamp": 1700000000.0,
        "commit_url": "https://github.com/acme/bench-runs/commit/abc1234"
    },
    {
        "agent_id": "codegen-a",
        "ladder": "hard",
        "run": 1,
        "status": "failure",
        "branch": "runs__wave-1",
        "error": "assertion failed",
        "traceback": "Traceback (most recent call last):\n  ...",
        "file_timestamp": 1700000100.0
    },
    {
        "agent_id": "codegen-b",
        "ladder": "easy",
        "run": 1,
        "status": "success",
        "error": "nan",
        "traceback": null
    }
]"#;

fn write_sample(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, SAMPLE_RECORDS).expect("write sample records");
    path
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_sample_records() {
    let path = write_sample("skirmish_dashboard_sample.json");
    let records = load_records(&path).expect("sample file loads");
    fs::remove_file(path).ok();

    assert_eq!(records.len(), 3);
    assert!(records[0].is_success());
    assert!(!records[1].is_success());

    // Holes come through as defaults, and "nan" strings count as absent.
    assert!(records[2].branch.is_none());
    assert!(!field_present(&records[2].error));
    assert!(!records[2].has_timestamp());
    assert!(field_present(&records[1].error));
}

#[test]
fn test_load_non_array_json_is_invalid_data() {
    let path = std::env::temp_dir().join("skirmish_dashboard_bad.json");
    fs::write(&path, r#"{"not": "an array"}"#).unwrap();
    let err = load_records(&path).unwrap_err();
    fs::remove_file(path).ok();

    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_success_rates_over_loaded_records() {
    let path = write_sample("skirmish_dashboard_rates.json");
    let records = load_records(&path).expect("sample file loads");
    fs::remove_file(path).ok();

    let agents = agent_success_rates(&records);
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].agent_id, "codegen-a");
    assert!((agents[0].rate - 0.5).abs() < 1e-9);
    assert!((agents[1].rate - 1.0).abs() < 1e-9);

    let per_ladder = agent_ladder_success_rates(&records);
    assert_eq!(per_ladder.len(), 3);
    assert_eq!(per_ladder[0].ladder, "easy");
    assert!((per_ladder[0].rate - 1.0).abs() < 1e-9);
    assert_eq!(per_ladder[1].ladder, "hard");
    assert_eq!(per_ladder[1].successes, 0);
}

// =============================================================================
// GitHub links
// =============================================================================

#[test]
fn test_branch_names_round_trip_through_sanitization() {
    for branch in ["main", "runs/wave-1", "bench/2024/agent-a"] {
        let sanitized = sanitize_branch(branch);
        assert!(!sanitized.contains('/'));
        assert_eq!(desanitize_branch(&sanitized), branch);
    }
}

#[test]
fn test_link_shapes_for_a_failed_run() {
    let path = write_sample("skirmish_dashboard_links.json");
    let records = load_records(&path).expect("sample file loads");
    fs::remove_file(path).ok();

    let failed = &records[1];
    let branch = failed.branch.as_deref().unwrap();

    assert_eq!(
        branch_tree_url("acme/bench-runs", branch),
        "https://github.com/acme/bench-runs/tree/runs/wave-1"
    );
    assert_eq!(
        run_logs_url("acme/bench-runs", branch, &failed.agent_id, failed.run),
        "https://github.com/acme/bench-runs/tree/runs/wave-1/codegen-a/run_1/logs"
    );
}

// =============================================================================
// Browser state over real records
// =============================================================================

#[test]
fn test_dashboard_state_over_loaded_records() {
    let path = write_sample("skirmish_dashboard_state.json");
    let records = load_records(&path).expect("sample file loads");
    fs::remove_file(path).ok();

    let mut state = DashboardState::new(records, "acme/bench-runs".to_string());
    assert_eq!(state.ladders, vec!["All", "easy", "hard"]);
    assert_eq!(state.agent_summaries.len(), 2);

    state.next_tab(); // "easy"
    assert_eq!(state.filtered_indices().len(), 2);
    state.move_down();
    let selected = state.selected_record().expect("record under cursor");
    assert_eq!(selected.agent_id, "codegen-b");
}
