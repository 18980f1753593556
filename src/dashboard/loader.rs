//! Run-record file loading.

use std::fs;
use std::io;
use std::path::Path;

use super::types::RunRecord;

/// Load a JSON array of run records. Parse failures surface as
/// `InvalidData` so callers can tell a bad file from a missing one.
pub fn load_records<P: AsRef<Path>>(path: P) -> io::Result<Vec<RunRecord>> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn test_load_records_from_array() {
        let path = temp_file(
            "skirmish_loader_ok.json",
            r#"[
                {"agent_id": "a1", "ladder": "easy", "run": 1, "status": "success"},
                {"agent_id": "a1", "ladder": "easy", "run": 2, "status": "failure", "error": "boom"}
            ]"#,
        );
        let records = load_records(&path).expect("load should succeed");
        assert_eq!(records.len(), 2);
        assert!(records[0].is_success());
        assert_eq!(records[1].error.as_deref(), Some("boom"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = load_records("/nonexistent/skirmish_records.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_load_bad_json_is_invalid_data() {
        let path = temp_file("skirmish_loader_bad.json", "not json at all");
        let err = load_records(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(path).ok();
    }
}
