//! Form events emitted by FormController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer, which renders them (e.g., `FormPresenter` for the
//! interactive CLI form).

use pillpal_domain::{AnalysisResult, MedicationRow, RowId};

/// Title of the notice raised when no row is fully filled in.
pub const INPUT_REQUIRED_TITLE: &str = "Input Required";
/// Description of the notice raised when no row is fully filled in.
pub const INPUT_REQUIRED_DESCRIPTION: &str = "Please add at least one medication and dosage.";
/// Title of the notice raised when an analysis returns an error.
pub const ANALYSIS_FAILED_TITLE: &str = "Analysis Failed";

/// Kind of transient user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Input was rejected before any service call.
    Validation,
    /// The service returned an error result.
    Failure,
}

/// Transient user-facing notice (a "toast")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn input_required() -> Self {
        Self {
            kind: NoticeKind::Validation,
            title: INPUT_REQUIRED_TITLE.to_string(),
            description: INPUT_REQUIRED_DESCRIPTION.to_string(),
        }
    }

    pub fn analysis_failed(error: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: ANALYSIS_FAILED_TITLE.to_string(),
            description: error.into(),
        }
    }
}

/// Events emitted by FormController for the presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Row list changed (row added, removed or edited)
    RowsChanged(Vec<MedicationRow>),
    /// Autocomplete suggestions for the active row changed
    SuggestionsChanged {
        row: Option<RowId>,
        suggestions: Vec<String>,
    },
    /// Submission started or finished
    LoadingChanged(bool),
    /// A notice should be shown
    Notice(Notice),
    /// An analysis result is available
    ResultReady(AnalysisResult),
}
