//! Logging configuration (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one line per analysis event. Disabled when unset.
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily-rolling operational logs. Overridden by `--log-dir`.
    pub dir: Option<PathBuf>,
}
