//! Medication catalog configuration (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `path` points at a newline-separated list of medication names.
/// When unset, the built-in list is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    pub path: Option<PathBuf>,
    /// Maximum number of autocomplete suggestions
    pub suggestion_limit: usize,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            suggestion_limit: pillpal_domain::SUGGESTION_LIMIT,
        }
    }
}
