//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the TOML config file. String
//! fields that name enum values are parsed on demand so that a typo
//! produces a [`ConfigIssue`] instead of a load failure.

mod catalog;
mod logging;
mod models;
mod output;
mod providers;

pub use catalog::FileCatalogConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use providers::{
    FileAnthropicConfig, FileOllamaConfig, FileOpenAiConfig, FileProvidersConfig,
};

use pillpal_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Configuration rejected by [`FileConfig::ensure_valid`].
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {}", .messages.join("; "))]
pub struct ConfigValidationError {
    pub messages: Vec<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub models: FileModelsConfig,
    pub providers: FileProvidersConfig,
    pub catalog: FileCatalogConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.parse_analysis().1);
        issues.extend(self.providers.parse_default().1);
        issues.extend(self.providers.routing_issues());
        issues.extend(self.output.parse_format().1);
        issues
    }

    /// Fail on error-severity issues; return the remaining warnings.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError {
                messages: errors.into_iter().map(|i| i.message).collect(),
            })
        }
    }
}
