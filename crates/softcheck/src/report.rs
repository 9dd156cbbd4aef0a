//! Aggregate failure reports

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::check::FailureRecord;
use crate::error::Result;

/// Snapshot of a session's failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionReport {
    pub session_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total_failures: usize,
    pub failures: Vec<FailureRecord>,
}

impl AssertionReport {
    pub fn new(session_id: Uuid, failures: Vec<FailureRecord>) -> Self {
        Self {
            session_id,
            generated_at: Utc::now(),
            total_failures: failures.len(),
            failures,
        }
    }

    /// Render the report text carried by [`AssertionError`](crate::AssertionError).
    ///
    /// ```text
    /// <banner>
    ///
    /// ❌ [Assertion 1]:
    /// <message>
    ///
    /// ❌ [Assertion 2]:
    /// <message>
    /// ```
    pub fn render(&self, banner: &str, marker: &str) -> String {
        let entries: Vec<String> = self
            .failures
            .iter()
            .enumerate()
            .map(|(i, failure)| {
                format!("{} [Assertion {}]: \n{}\n", marker, i + 1, failure.message)
            })
            .collect();

        format!("{}\n\n{}", banner, entries.join("\n"))
    }

    /// Write the report as JSON into `dir`, returning the file path
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join(format!("soft-assertions-{}.json", self.session_id));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        info!("Assertion report written to: {}", path.display());
        Ok(path)
    }
}
