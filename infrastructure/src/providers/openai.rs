//! OpenAI Chat Completions provider
//!
//! Also usable with OpenAI-compatible endpoints (Azure OpenAI, vLLM, etc.)
//! by overriding `base_url`. Structured requests use the
//! `response_format: json_schema` feature.

use super::http::send_json;
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use pillpal_application::ports::llm_gateway::{GatewayError, LlmSession, OutputSchema};
use pillpal_domain::Model;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub struct OpenAiProviderAdapter {
    client: Arc<reqwest::Client>,
    api_key: String,
    base_url: String,
    max_tokens: u32,
}

impl OpenAiProviderAdapter {
    pub fn new(
        client: Arc<reqwest::Client>,
        api_key: impl Into<String>,
        base_url: &str,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            max_tokens,
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiProviderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_gpt()
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession {
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            endpoint: format!("{}/v1/chat/completions", self.base_url),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            max_tokens: self.max_tokens,
        }))
    }
}

pub struct OpenAiSession {
    client: Arc<reqwest::Client>,
    api_key: String,
    endpoint: String,
    model: Model,
    system_prompt: String,
    max_tokens: u32,
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiSession {
    fn build_request<'a>(
        &'a self,
        content: &'a str,
        schema: Option<&OutputSchema>,
    ) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if !self.system_prompt.is_empty() {
            messages.push(ChatMessage {
                role: "system",
                content: &self.system_prompt,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content,
        });

        ChatRequest {
            model: self.model.as_str(),
            messages,
            max_completion_tokens: self.max_tokens,
            response_format: schema.map(|s| {
                serde_json::json!({
                    "type": "json_schema",
                    "json_schema": {
                        "name": s.name,
                        "schema": s.schema,
                        "strict": true,
                    }
                })
            }),
        }
    }

    async fn complete(
        &self,
        content: &str,
        schema: Option<&OutputSchema>,
    ) -> Result<String, GatewayError> {
        let body = self.build_request(content, schema);
        debug!(model = %self.model, structured = schema.is_some(), "Calling OpenAI chat completions");

        let response: ChatResponse = send_json(
            self.client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body),
        )
        .await?;

        extract_content(response)
    }
}

fn extract_content(response: ChatResponse) -> Result<String, GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))?;

    if let Some(refusal) = choice.message.refusal {
        return Err(GatewayError::RequestFailed(format!(
            "Model refused: {}",
            refusal
        )));
    }

    choice
        .message
        .content
        .ok_or_else(|| GatewayError::InvalidResponse("Empty message content".to_string()))
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.complete(content, None).await
    }

    async fn send_structured(
        &self,
        content: &str,
        schema: &OutputSchema,
    ) -> Result<String, GatewayError> {
        self.complete(content, Some(schema)).await
    }
}
