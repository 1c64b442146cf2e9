//! Domain layer for pillpal
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Medication**: a trimmed, non-empty (name, dosage) pair
//! - **AnalysisRequest / AnalysisResult**: the contract between the form
//!   and the interaction analysis service. A result carries a summary or
//!   an error, never both and never neither.
//! - **MedicationForm**: the editable rows a user fills in, with catalog
//!   autocomplete

pub mod analysis;
pub mod config;
pub mod core;
pub mod form;
pub mod medication;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    AnalysisRequest, AnalysisResult, InteractionSummary, NO_MEDICATIONS_MESSAGE,
    SummaryParseError, UNEXPECTED_ERROR_MESSAGE, parse_summary_json, parse_summary_response,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model};
pub use form::{MedicationForm, MedicationRow, RowField, RowId};
pub use medication::{Medication, MedicationCatalog, SUGGESTION_LIMIT};
pub use prompt::PromptTemplate;
