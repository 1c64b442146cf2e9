//! Ollama provider for local inference
//!
//! Talks to `/api/chat` with streaming disabled. Structured requests pass
//! the JSON schema as the `format` field.

use super::http::send_json;
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use pillpal_application::ports::llm_gateway::{GatewayError, LlmSession, OutputSchema};
use pillpal_domain::Model;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub struct OllamaProviderAdapter {
    client: Arc<reqwest::Client>,
    base_url: String,
}

impl OllamaProviderAdapter {
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OllamaProviderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    /// Local model names carry no family marker; Ollama is only reached
    /// through explicit routing or as the default provider.
    fn supports_model(&self, _model: &Model) -> bool {
        false
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession {
            client: self.client.clone(),
            endpoint: format!("{}/api/chat", self.base_url),
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
        }))
    }
}

pub struct OllamaSession {
    client: Arc<reqwest::Client>,
    endpoint: String,
    model: Model,
    system_prompt: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaSession {
    fn build_request<'a>(
        &'a self,
        content: &'a str,
        schema: Option<&'a OutputSchema>,
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
            stream: false,
            format: schema.map(|s| &s.schema),
        }
    }

    async fn complete(
        &self,
        content: &str,
        schema: Option<&OutputSchema>,
    ) -> Result<String, GatewayError> {
        debug!(model = %self.model, "Calling Ollama chat API");

        let response: ChatResponse = send_json(
            self.client
                .post(&self.endpoint)
                .json(&self.build_request(content, schema)),
        )
        .await?;

        Ok(response.message.content)
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_schema_as_format() {
        let session = OllamaSession {
            client: Arc::new(reqwest::Client::new()),
            endpoint: "http://localhost:11434/api/chat".to_string(),
            model: Model::from("medgemma:4b"),
            system_prompt: "sys".to_string(),
        };
        let schema = OutputSchema::new("s", serde_json::json!({"type": "object"}));
        let body = serde_json::to_value(session.build_request("Analyze", Some(&schema))).unwrap();

        assert_eq!(body["model"], "medgemma:4b");
        assert_eq!(body["stream"], false);
        assert_eq!(body["format"]["type"], "object");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_response_decoding() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"model": "medgemma", "message": {"role": "assistant", "content": "{\"summary\": \"ok\"}"}, "done": true}"#,
        )
        .unwrap();
        assert_eq!(response.message.content, r#"{"summary": "ok"}"#);
    }
}
