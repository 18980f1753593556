use serde::{Deserialize, Serialize};

use crate::constants::{MARKER_FAILURE, MARKER_SUCCESS, MARKER_UNKNOWN};

/// One benchmark run result.
///
/// The upstream table has NaN holes, so every hole-prone field carries
/// `#[serde(default)]` and may hold the literal string "nan"/"NaN"; use
/// `field_present` before rendering any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub ladder: String,
    #[serde(default)]
    pub run: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub traceback: Option<String>,
    /// Epoch seconds; may be missing or NaN.
    #[serde(default)]
    pub file_timestamp: Option<f64>,
    #[serde(default)]
    pub logs: Option<String>,
    #[serde(default)]
    pub commit_url: Option<String>,
}

impl RunRecord {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    pub fn status_marker(&self) -> &'static str {
        if self.is_success() {
            MARKER_SUCCESS
        } else if self.status.eq_ignore_ascii_case("failure")
            || self.status.eq_ignore_ascii_case("failed")
        {
            MARKER_FAILURE
        } else {
            MARKER_UNKNOWN
        }
    }

    pub fn has_timestamp(&self) -> bool {
        matches!(self.file_timestamp, Some(t) if t.is_finite())
    }

    /// Formatted timestamp, or "-" when the field is missing or NaN.
    pub fn timestamp_display(&self) -> String {
        if !self.has_timestamp() {
            return "-".to_string();
        }
        let secs = self.file_timestamp.unwrap_or(0.0) as i64;
        chrono::DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// True when the field holds a usable value: present, non-empty, and not a
/// stringified NaN hole.
pub fn field_present(field: &Option<String>) -> bool {
    match field {
        Some(value) => {
            let trimmed = value.trim();
            !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("nan")
        }
        None => false,
    }
}
