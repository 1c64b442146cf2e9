//! Provider configuration from TOML (`[providers]` section)

use crate::providers::ProviderKind;
use pillpal_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the env var.
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 2048,
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key. Prefer the env var.
    pub api_key: Option<String>,
    /// Base URL (can be pointed at an OpenAI-compatible server).
    pub base_url: String,
    /// Max completion tokens per response.
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 2048,
        }
    }
}

/// Local Ollama server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "openai", "anthropic" or "ollama".
    pub default: Option<String>,
    /// Upper bound on one model call, in seconds. 0 disables the limit.
    pub timeout_secs: u64,
    pub openai: FileOpenAiConfig,
    pub anthropic: FileAnthropicConfig,
    pub ollama: FileOllamaConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: None,
            timeout_secs: 120,
            openai: FileOpenAiConfig::default(),
            anthropic: FileAnthropicConfig::default(),
            ollama: FileOllamaConfig::default(),
            routing: HashMap::new(),
        }
    }
}

impl FileProvidersConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Parse the default provider, warning on unknown names.
    pub fn parse_default(&self) -> (Option<ProviderKind>, Vec<ConfigIssue>) {
        match self.default.as_deref() {
            None => (None, Vec::new()),
            Some(name) => match name.parse::<ProviderKind>() {
                Ok(kind) => (Some(kind), Vec::new()),
                Err(_) => (None, vec![unknown_provider_issue("providers.default", name)]),
            },
        }
    }

    /// Warn on routing entries that name an unknown provider.
    pub fn routing_issues(&self) -> Vec<ConfigIssue> {
        let mut entries: Vec<_> = self.routing.iter().collect();
        entries.sort();
        entries
            .into_iter()
            .filter(|(_, provider)| provider.parse::<ProviderKind>().is_err())
            .map(|(model, provider)| {
                unknown_provider_issue(&format!("providers.routing.\"{}\"", model), provider)
            })
            .collect()
    }
}

fn unknown_provider_issue(field: &str, value: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::InvalidEnumValue {
            field: field.to_string(),
            value: value.to_string(),
            valid_values: ProviderKind::all()
                .iter()
                .map(|k| k.as_str().to_string())
                .collect(),
        },
        format!("{}: unknown provider '{}', ignoring", field, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_zero_disables() {
        let mut config = FileProvidersConfig::default();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(120)));
        config.timeout_secs = 0;
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_parse_default() {
        let config = FileProvidersConfig {
            default: Some("Anthropic".to_string()),
            ..Default::default()
        };
        assert_eq!(config.parse_default().0, Some(ProviderKind::Anthropic));

        let config = FileProvidersConfig {
            default: Some("bedrock".to_string()),
            ..Default::default()
        };
        let (kind, issues) = config.parse_default();
        assert!(kind.is_none());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_routing_issues() {
        let mut config = FileProvidersConfig::default();
        config
            .routing
            .insert("gpt-4.1".to_string(), "openai".to_string());
        config
            .routing
            .insert("medgemma".to_string(), "lmstudio".to_string());
        let issues = config.routing_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("lmstudio"));
    }
}
