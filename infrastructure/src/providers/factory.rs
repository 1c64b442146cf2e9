//! Assemble a [`RoutingGateway`] from the `[providers]` section.

use super::anthropic::AnthropicProviderAdapter;
use super::http::{build_client, resolve_api_key};
use super::ollama::OllamaProviderAdapter;
use super::openai::OpenAiProviderAdapter;
use super::routing::RoutingGateway;
use super::{ProviderAdapter, ProviderKind};
use crate::config::FileProvidersConfig;
use pillpal_application::ports::llm_gateway::GatewayError;
use pillpal_domain::{ConfigIssue, ConfigIssueCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Transport-level cap when no analysis timeout is configured.
const FALLBACK_HTTP_TIMEOUT: Duration = Duration::from_secs(600);

/// Register every provider that can be reached.
///
/// OpenAI and Anthropic are registered only when an API key resolves.
/// Ollama needs no key and is always registered, after the hosted
/// providers so that it never wins the first-provider fallback over them.
/// A missing key for the configured default provider is reported as a
/// warning.
pub fn build_gateway(
    config: &FileProvidersConfig,
) -> Result<(RoutingGateway, Vec<ConfigIssue>), GatewayError> {
    let client = Arc::new(build_client(
        config.request_timeout().unwrap_or(FALLBACK_HTTP_TIMEOUT),
    )?);
    let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();
    let mut issues = Vec::new();

    let openai = &config.openai;
    match resolve_api_key(openai.api_key.as_deref(), &openai.api_key_env) {
        Some(key) => providers.push(Arc::new(OpenAiProviderAdapter::new(
            client.clone(),
            key,
            &openai.base_url,
            openai.max_tokens,
        ))),
        None => issues.extend(missing_key(config, ProviderKind::OpenAi, &openai.api_key_env)),
    }

    let anthropic = &config.anthropic;
    match resolve_api_key(anthropic.api_key.as_deref(), &anthropic.api_key_env) {
        Some(key) => providers.push(Arc::new(AnthropicProviderAdapter::new(
            client.clone(),
            key,
            &anthropic.base_url,
            anthropic.api_version.clone(),
            anthropic.max_tokens,
        ))),
        None => issues.extend(missing_key(
            config,
            ProviderKind::Anthropic,
            &anthropic.api_key_env,
        )),
    }

    providers.push(Arc::new(OllamaProviderAdapter::new(
        client,
        &config.ollama.base_url,
    )));

    let gateway = RoutingGateway::new(providers, config);
    info!(providers = ?gateway.provider_kinds(), "LLM providers registered");
    Ok((gateway, issues))
}

fn missing_key(
    config: &FileProvidersConfig,
    kind: ProviderKind,
    env_var: &str,
) -> Option<ConfigIssue> {
    let selected = config.default.as_deref().unwrap_or(ProviderKind::default().as_str());
    (selected.eq_ignore_ascii_case(kind.as_str())).then(|| {
        ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey {
                provider: kind.to_string(),
            },
            format!(
                "providers.{}: no API key (set {} or providers.{}.api_key)",
                kind, env_var, kind
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_keys_register_all_providers() {
        let mut config = FileProvidersConfig::default();
        config.openai.api_key = Some("sk-test".to_string());
        config.anthropic.api_key = Some("sk-ant-test".to_string());

        let (gateway, issues) = build_gateway(&config).unwrap();
        assert_eq!(
            gateway.provider_kinds(),
            vec![
                ProviderKind::OpenAi,
                ProviderKind::Anthropic,
                ProviderKind::Ollama
            ]
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_default_key_warns() {
        let mut config = FileProvidersConfig::default();
        config.default = Some("anthropic".to_string());
        config.openai.api_key = Some("sk-test".to_string());
        config.anthropic.api_key_env = "PILLPAL_TEST_UNSET_ANTHROPIC_KEY".to_string();

        let (gateway, issues) = build_gateway(&config).unwrap();
        assert_eq!(
            gateway.provider_kinds(),
            vec![ProviderKind::OpenAi, ProviderKind::Ollama]
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::MissingApiKey {
                provider: "anthropic".to_string()
            }
        );
    }
}
