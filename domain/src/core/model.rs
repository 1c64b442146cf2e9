//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// Identifies the text-generation model the interaction analysis is
/// delegated to. Unknown identifiers are kept verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeSonnet45,
    ClaudeHaiku45,
    ClaudeOpus45,
    // GPT models
    Gpt41,
    Gpt41Mini,
    Gpt5,
    Gpt5Mini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::ClaudeOpus45 => "claude-opus-4.5",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt5 => "gpt-5",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        match self {
            Model::ClaudeSonnet45 | Model::ClaudeHaiku45 | Model::ClaudeOpus45 => true,
            Model::Custom(s) => s.starts_with("claude-"),
            _ => false,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt41 | Model::Gpt41Mini | Model::Gpt5 | Model::Gpt5Mini => true,
            Model::Custom(s) => s.starts_with("gpt-") || s.starts_with("o3") || s.starts_with("o4"),
            _ => false,
        }
    }
}

impl Default for Model {
    /// Returns the default analysis model (GPT-4.1 mini)
    fn default() -> Self {
        Model::Gpt41Mini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            "claude-opus-4.5" => Model::ClaudeOpus45,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-5" => Model::Gpt5,
            "gpt-5-mini" => Model::Gpt5Mini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::ClaudeSonnet45, Model::Gpt41, Model::Gpt5Mini] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-2.5-flash".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-2.5-flash".to_string()));
        assert_eq!(model.to_string(), "gemini-2.5-flash");
    }

    #[test]
    fn test_model_family_detection() {
        assert!(Model::ClaudeSonnet45.is_claude());
        assert!(Model::Gpt41.is_gpt());
        assert!(!Model::ClaudeSonnet45.is_gpt());
        assert!(Model::from("claude-3-5-haiku-latest").is_claude());
        assert!(Model::from("gpt-4o").is_gpt());
        assert!(!Model::from("gemini-2.5-flash").is_gpt());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt41Mini);
    }

    #[test]
    fn test_model_serde_as_string() {
        let json = serde_json::to_string(&Model::Gpt41).unwrap();
        assert_eq!(json, "\"gpt-4.1\"");
        let model: Model = serde_json::from_str("\"claude-haiku-4.5\"").unwrap();
        assert_eq!(model, Model::ClaudeHaiku45);
    }
}
