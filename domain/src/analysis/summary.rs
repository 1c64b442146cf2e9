//! Declared output shape of the model and its parser.
//!
//! The model is asked for a JSON object with a single string field
//! `summary`. Providers with native structured output return that object
//! directly; others may wrap it in a fenced block or surrounding prose,
//! so [`parse_summary_response`] accepts all three forms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Description attached to the `summary` field in the output schema.
pub const SUMMARY_DESCRIPTION: &str =
    "A summary of potential drug interactions, side effects, and necessary precautions.";

/// The structured output expected from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub summary: String,
}

impl InteractionSummary {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// JSON schema describing the output shape.
    pub fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": SUMMARY_DESCRIPTION,
                }
            },
            "required": ["summary"],
            "additionalProperties": false,
        })
    }
}

/// Why a model response did not satisfy the output shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryParseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response JSON is not an object")]
    NotAnObject,

    #[error("Response has no `summary` field")]
    MissingSummary,

    #[error("Response `summary` field is null")]
    NullSummary,

    #[error("Response `summary` field is not a string (found {0})")]
    WrongType(&'static str),
}

/// Parse the model's raw text into an [`InteractionSummary`].
pub fn parse_summary_response(response: &str) -> Result<InteractionSummary, SummaryParseError> {
    // Bare JSON first: summary prose may itself contain fences or braces
    let value: serde_json::Value = match serde_json::from_str(response.trim()) {
        Ok(value) => value,
        Err(_) => serde_json::from_str(extract_json_candidate(response))
            .map_err(|e| SummaryParseError::InvalidJson(e.to_string()))?,
    };
    parse_summary_json(&value)
}

/// Validate an already-decoded JSON value against the output shape.
pub fn parse_summary_json(value: &serde_json::Value) -> Result<InteractionSummary, SummaryParseError> {
    let object = value.as_object().ok_or(SummaryParseError::NotAnObject)?;

    match object.get("summary") {
        None => Err(SummaryParseError::MissingSummary),
        Some(serde_json::Value::Null) => Err(SummaryParseError::NullSummary),
        Some(serde_json::Value::String(s)) => Ok(InteractionSummary::new(s.clone())),
        Some(other) => Err(SummaryParseError::WrongType(json_type_name(other))),
    }
}

/// Pick the JSON text out of a response: a fenced block if present,
/// otherwise the outermost `{...}` span, otherwise the whole text.
fn extract_json_candidate(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        // Skip the info string (e.g. `json`) up to the end of the line
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after_fence[body_start..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_object() {
        let parsed = parse_summary_response(r#"{"summary": "Monitor INR closely."}"#).unwrap();
        assert_eq!(parsed.summary, "Monitor INR closely.");
    }

    #[test]
    fn test_parse_bare_object_with_backticks_in_summary() {
        let response =
            r#"{"summary": "Avoid combining. Example label text: ```take with food```."}"#;
        assert_eq!(
            parse_summary_response(response).unwrap().summary,
            "Avoid combining. Example label text: ```take with food```."
        );
    }

    #[test]
    fn test_parse_fenced_block() {
        let response = "Here you go:\n```json\n{\"summary\": \"Avoid NSAIDs.\"}\n```\n";
        assert_eq!(
            parse_summary_response(response).unwrap().summary,
            "Avoid NSAIDs."
        );
    }

    #[test]
    fn test_parse_object_embedded_in_prose() {
        let response = "Sure. {\"summary\": \"No known interactions.\"} Hope this helps.";
        assert_eq!(
            parse_summary_response(response).unwrap().summary,
            "No known interactions."
        );
    }

    #[test]
    fn test_null_summary_is_an_error() {
        assert_eq!(
            parse_summary_response(r#"{"summary": null}"#),
            Err(SummaryParseError::NullSummary)
        );
    }

    #[test]
    fn test_missing_summary_is_an_error() {
        assert_eq!(
            parse_summary_response(r#"{"analysis": "text"}"#),
            Err(SummaryParseError::MissingSummary)
        );
    }

    #[test]
    fn test_wrong_type_and_non_object() {
        assert_eq!(
            parse_summary_response(r#"{"summary": 42}"#),
            Err(SummaryParseError::WrongType("number"))
        );
        assert_eq!(
            parse_summary_json(&serde_json::json!(["summary"])),
            Err(SummaryParseError::NotAnObject)
        );
    }

    #[test]
    fn test_plain_text_is_invalid_json() {
        assert!(matches!(
            parse_summary_response("Aspirin and warfarin increase bleeding risk."),
            Err(SummaryParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_empty_summary_is_accepted() {
        assert_eq!(
            parse_summary_response(r#"{"summary": ""}"#).unwrap().summary,
            ""
        );
    }

    #[test]
    fn test_schema_requires_summary() {
        let schema = InteractionSummary::json_schema();
        assert_eq!(schema["required"], serde_json::json!(["summary"]));
        assert_eq!(schema["properties"]["summary"]["type"], "string");
    }
}
