use super::{ProviderAdapter, ProviderKind};
use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use pillpal_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use pillpal_domain::Model;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Gateway that dispatches each session to one of the registered providers.
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Model name to index into `providers`, from `[providers.routing]`.
    explicit_model_routing: HashMap<String, usize>,
    default_kind: ProviderKind,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &FileProvidersConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Ok(target_kind) = provider_name.parse::<ProviderKind>() else {
                warn!(model = %model_name, provider = %provider_name, "Ignoring routing entry for unknown provider");
                continue;
            };

            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        let default_kind = config
            .default
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();

        Self {
            providers,
            explicit_model_routing,
            default_kind,
        }
    }

    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Routing priority:
    ///  1. explicit `[providers.routing]` entry for the model
    ///  2. provider inferred from the model family
    ///  3. configured default provider
    ///  4. first registered provider
    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        if let Some(&idx) = self.explicit_model_routing.get(model.as_str()) {
            return Ok(self.providers[idx].as_ref());
        }

        if let Some(p) = self.providers.iter().find(|p| p.supports_model(model)) {
            return Ok(p.as_ref());
        }

        if let Some(p) = self
            .providers
            .iter()
            .find(|p| p.kind() == self.default_kind)
        {
            return Ok(p.as_ref());
        }

        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(GatewayError::ModelNotAvailable(
                "No providers available".to_string(),
            ))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.create_session_with_system_prompt(model, "").await
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let provider = self.resolve_provider(model)?;
        debug!(model = %model, provider = %provider.kind(), "Routing session");
        provider
            .create_session_with_system_prompt(model, system_prompt)
            .await
    }
}
