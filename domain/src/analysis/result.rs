//! Analysis result value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Returned when a request carries no medications.
pub const NO_MEDICATIONS_MESSAGE: &str = "No medications provided for analysis.";

/// Returned for any failure while talking to the model.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred while analyzing interactions. Please try again later.";

/// Outcome of one interaction analysis.
///
/// Exactly one of summary/error is present. On the wire this is
/// `{"summary": string|null, "error": string|null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnalysisResultWire", into = "AnalysisResultWire")]
pub enum AnalysisResult {
    /// Free-text summary produced by the model.
    Summary(String),
    /// User-facing error message.
    Error(String),
}

impl AnalysisResult {
    pub fn success(summary: impl Into<String>) -> Self {
        AnalysisResult::Summary(summary.into())
    }

    pub fn failure(error: impl Into<String>) -> Self {
        AnalysisResult::Error(error.into())
    }

    /// Result for a request without medications.
    pub fn no_medications() -> Self {
        Self::failure(NO_MEDICATIONS_MESSAGE)
    }

    /// Result for any model fault.
    pub fn unexpected_error() -> Self {
        Self::failure(UNEXPECTED_ERROR_MESSAGE)
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            AnalysisResult::Summary(s) => Some(s),
            AnalysisResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Error(e) => Some(e),
            AnalysisResult::Summary(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Summary(_))
    }

    /// The text to display: the summary, or the error.
    pub fn text(&self) -> &str {
        match self {
            AnalysisResult::Summary(s) | AnalysisResult::Error(s) => s,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct AnalysisResultWire {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<AnalysisResultWire> for AnalysisResult {
    type Error = DomainError;

    fn try_from(wire: AnalysisResultWire) -> Result<Self, DomainError> {
        match (wire.summary, wire.error) {
            (Some(summary), None) => Ok(AnalysisResult::Summary(summary)),
            (None, Some(error)) => Ok(AnalysisResult::Error(error)),
            (None, None) => Err(DomainError::InvalidResult(
                "neither summary nor error is set".to_string(),
            )),
            (Some(_), Some(_)) => Err(DomainError::InvalidResult(
                "both summary and error are set".to_string(),
            )),
        }
    }
}

impl From<AnalysisResult> for AnalysisResultWire {
    fn from(result: AnalysisResult) -> Self {
        match result {
            AnalysisResult::Summary(summary) => Self {
                summary: Some(summary),
                error: None,
            },
            AnalysisResult::Error(error) => Self {
                summary: None,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_side_present() {
        let ok = AnalysisResult::success("No major interactions.");
        assert_eq!(ok.summary(), Some("No major interactions."));
        assert!(ok.error().is_none());

        let err = AnalysisResult::no_medications();
        assert!(err.summary().is_none());
        assert_eq!(err.error(), Some(NO_MEDICATIONS_MESSAGE));
    }

    #[test]
    fn test_serializes_both_keys() {
        let json = serde_json::to_value(AnalysisResult::unexpected_error()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"summary": null, "error": UNEXPECTED_ERROR_MESSAGE})
        );
    }

    #[test]
    fn test_deserialize_rejects_invalid_states() {
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"summary": null, "error": null}"#).is_err());
        assert!(serde_json::from_str::<AnalysisResult>("{}").is_err());
        assert!(
            serde_json::from_str::<AnalysisResult>(r#"{"summary": "a", "error": "b"}"#).is_err()
        );
    }

    #[test]
    fn test_deserialize_valid_state() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"summary": "Take with food.", "error": null}"#).unwrap();
        assert_eq!(result, AnalysisResult::success("Take with food."));
        assert!(result.is_success());
        assert_eq!(result.text(), "Take with food.");
    }
}
