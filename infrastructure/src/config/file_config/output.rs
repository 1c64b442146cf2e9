//! Output configuration from TOML (`[output]` section)

use pillpal_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn parse_format(&self) -> (Option<OutputFormat>, Vec<ConfigIssue>) {
        match self.format.as_deref() {
            None => (None, Vec::new()),
            Some(s) => match s.parse::<OutputFormat>() {
                Ok(format) => (Some(format), Vec::new()),
                Err(_) => (
                    None,
                    vec![ConfigIssue::warning(
                        ConfigIssueCode::InvalidEnumValue {
                            field: "output.format".to_string(),
                            value: s.to_string(),
                            valid_values: vec!["text".to_string(), "json".to_string()],
                        },
                        format!(
                            "output.format: unknown value '{}', falling back to 'text'",
                            s
                        ),
                    )],
                ),
            },
        }
    }
}
