//! Model selection from TOML (`[models]` section)

use pillpal_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// analysis = "claude-sonnet-4.5"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used for interaction analysis
    pub analysis: Option<String>,
}

impl FileModelsConfig {
    /// Parse the analysis model, reporting an empty name as an error.
    pub fn parse_analysis(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.analysis.as_deref() {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "analysis".to_string(),
                    },
                    "models.analysis: model name cannot be empty",
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }
}
