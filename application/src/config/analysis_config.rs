//! Analysis parameters — use case control.
//!
//! [`AnalysisConfig`] groups the static parameters used by
//! [`AnalyzeInteractionsUseCase`](crate::use_cases::analyze_interactions::AnalyzeInteractionsUseCase)
//! and [`FormController`](crate::use_cases::form_controller::FormController).

use pillpal_domain::{Model, SUGGESTION_LIMIT};
use std::time::Duration;

/// Parameters controlling one analysis and the form around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Model the analysis is delegated to.
    pub model: Model,
    /// Maximum number of autocomplete suggestions.
    pub suggestion_limit: usize,
    /// Upper bound on a single model call. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            suggestion_limit: SUGGESTION_LIMIT,
            request_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl AnalysisConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
