//! Anthropic Messages API provider
//!
//! The Messages API has no schema-constrained output mode, so structured
//! requests embed the schema in the user message and rely on the caller
//! to validate the reply.

use super::http::send_json;
use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use pillpal_application::ports::llm_gateway::{GatewayError, LlmSession, OutputSchema};
use pillpal_domain::Model;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub struct AnthropicProviderAdapter {
    client: Arc<reqwest::Client>,
    api_key: String,
    base_url: String,
    api_version: String,
    max_tokens: u32,
}

impl AnthropicProviderAdapter {
    pub fn new(
        client: Arc<reqwest::Client>,
        api_key: impl Into<String>,
        base_url: &str,
        api_version: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            max_tokens,
        }
    }
}

/// Map a domain model id to the identifier the Messages API expects.
///
/// Known Claude ids use dots for the version (`claude-sonnet-4.5`); the API
/// uses dashes (`claude-sonnet-4-5`). Custom ids are passed through.
pub fn api_model_id(model: &Model) -> String {
    match model {
        Model::Custom(id) => id.clone(),
        known => known.as_str().replace('.', "-"),
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProviderAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_claude()
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(AnthropicSession {
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            api_version: self.api_version.clone(),
            endpoint: format!("{}/v1/messages", self.base_url),
            model: model.clone(),
            api_model: api_model_id(model),
            system_prompt: system_prompt.to_string(),
            max_tokens: self.max_tokens,
        }))
    }
}

pub struct AnthropicSession {
    client: Arc<reqwest::Client>,
    api_key: String,
    api_version: String,
    endpoint: String,
    model: Model,
    api_model: String,
    system_prompt: String,
    max_tokens: u32,
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Append the output schema to a user message.
fn with_schema_instructions(content: &str, schema: &OutputSchema) -> String {
    format!(
        "{}\n\nRespond with only a JSON object matching this JSON schema, without any surrounding text:\n{}",
        content,
        serde_json::to_string_pretty(&schema.schema).unwrap_or_default()
    )
}

fn extract_text(response: MessagesResponse) -> Result<String, GatewayError> {
    let text: String = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Other => None,
        })
        .collect();

    if text.is_empty() {
        return Err(GatewayError::InvalidResponse(format!(
            "No text content (stop_reason: {})",
            response.stop_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

impl AnthropicSession {
    fn build_request<'a>(&'a self, content: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.api_model,
            max_tokens: self.max_tokens,
            system: Some(self.system_prompt.as_str()).filter(|s| !s.is_empty()),
            messages: vec![Message {
                role: "user",
                content,
            }],
        }
    }
}

#[async_trait]
impl LlmSession for AnthropicSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        debug!(model = %self.api_model, "Calling Anthropic messages API");

        let response: MessagesResponse = send_json(
            self.client
                .post(&self.endpoint)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", &self.api_version)
                .json(&self.build_request(content)),
        )
        .await?;

        extract_text(response)
    }

    async fn send_structured(
        &self,
        content: &str,
        schema: &OutputSchema,
    ) -> Result<String, GatewayError> {
        self.send(&with_schema_instructions(content, schema)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_model_id() {
        assert_eq!(api_model_id(&Model::ClaudeSonnet45), "claude-sonnet-4-5");
        assert_eq!(api_model_id(&Model::ClaudeHaiku45), "claude-haiku-4-5");
        assert_eq!(
            api_model_id(&Model::from("claude-3-5-haiku-20241022")),
            "claude-3-5-haiku-20241022"
        );
    }

    #[test]
    fn test_request_body() {
        let session = AnthropicSession {
            client: Arc::new(reqwest::Client::new()),
            api_key: "key".to_string(),
            api_version: "2023-06-01".to_string(),
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: Model::ClaudeSonnet45,
            api_model: api_model_id(&Model::ClaudeSonnet45),
            system_prompt: String::new(),
            max_tokens: 2048,
        };
        let body = serde_json::to_value(session.build_request("Analyze")).unwrap();
        assert_eq!(body["model"], "claude-sonnet-4-5");
        assert_eq!(body["max_tokens"], 2048);
        assert!(body.get("system").is_none());
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_schema_instructions_include_schema() {
        let schema = OutputSchema::new(
            "interaction_summary",
            serde_json::json!({"required": ["summary"]}),
        );
        let content = with_schema_instructions("Analyze these.", &schema);
        assert!(content.starts_with("Analyze these."));
        assert!(content.contains("\"summary\""));
    }

    #[test]
    fn test_extract_text_joins_text_blocks() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "{\"summary\":"}, {"type": "thinking", "thinking": "..."}, {"type": "text", "text": " \"ok\"}"}], "stop_reason": "end_turn"}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), r#"{"summary": "ok"}"#);
    }

    #[test]
    fn test_extract_text_empty_is_invalid() {
        let response: MessagesResponse =
            serde_json::from_str(r#"{"content": [], "stop_reason": "max_tokens"}"#).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(err.to_string().contains("max_tokens"));
    }
}
