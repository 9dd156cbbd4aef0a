//! Accumulator configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Configuration for a [`SoftAssertions`](crate::SoftAssertions) session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftAssertConfig {
    /// First line of the aggregate report
    pub banner: String,

    /// Marker prefixed to every entry in the report
    pub marker: String,

    /// Log passing checks at debug level
    pub log_passes: bool,

    /// Directory to write a JSON report into when `assert_all` raises
    pub report_dir: Option<PathBuf>,
}

impl Default for SoftAssertConfig {
    fn default() -> Self {
        Self {
            banner: "Soft assertion failures:".to_string(),
            marker: "❌".to_string(),
            log_passes: true,
            report_dir: None,
        }
    }
}

impl SoftAssertConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }
}
