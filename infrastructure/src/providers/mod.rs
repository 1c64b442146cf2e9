//! LLM provider adapters
//!
//! Each adapter speaks one vendor's HTTP API and hands out
//! [`LlmSession`]s. [`RoutingGateway`](routing::RoutingGateway) picks the
//! adapter for a given model.

pub mod anthropic;
pub mod factory;
pub mod http;
pub mod ollama;
pub mod openai;
pub mod routing;

use async_trait::async_trait;
use pillpal_application::ports::llm_gateway::{GatewayError, LlmSession};
use pillpal_domain::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
    Ollama,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Ollama => "ollama",
        }
    }

    pub fn all() -> &'static [ProviderKind] {
        &[
            ProviderKind::OpenAi,
            ProviderKind::Anthropic,
            ProviderKind::Ollama,
        ]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    fn supports_model(&self, model: &Model) -> bool;
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in ProviderKind::all() {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), *kind);
        }
        assert!("vertex".parse::<ProviderKind>().is_err());
    }
}
