//! The request/response contract of the interaction analysis.
//!
//! - [`request::AnalysisRequest`] — medications submitted for analysis
//! - [`result::AnalysisResult`] — summary or user-facing error, never both
//! - [`summary::InteractionSummary`] — output shape requested from the model

pub mod request;
pub mod result;
pub mod summary;

pub use request::AnalysisRequest;
pub use result::{AnalysisResult, NO_MEDICATIONS_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
pub use summary::{
    InteractionSummary, SUMMARY_DESCRIPTION, SummaryParseError, parse_summary_json,
    parse_summary_response,
};
