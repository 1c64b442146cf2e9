//! Form Controller
//!
//! Owns the editable medication form and drives one analysis per
//! submission. Emits [`FormEvent`] messages to a channel for the
//! presentation layer to render.
//!
//! Submission is split in two so the model call can run outside the
//! controller (e.g. on a spawned task) while the form stays editable:
//! [`FormController::begin_submit`] validates and marks the form as
//! loading, [`FormController::finish_submit`] stores the result. While
//! loading, further submissions return [`SubmitAction::Busy`].

use crate::ports::form_event::{FormEvent, Notice};
use crate::use_cases::analyze_interactions::AnalyzeInteractionsUseCase;
use pillpal_domain::{AnalysisRequest, AnalysisResult, MedicationForm, RowField, RowId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// What the caller should do after [`FormController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// No fully filled row; a validation notice was emitted.
    Rejected,
    /// A submission is already in flight.
    Busy,
    /// Run the analysis for this request, then call `finish_submit`.
    Dispatch(AnalysisRequest),
}

/// Result of a complete [`FormController::submit`] cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Busy,
    Completed(AnalysisResult),
}

/// Form controller managing the medication rows and the submission lifecycle
pub struct FormController {
    form: MedicationForm,
    service: Arc<AnalyzeInteractionsUseCase>,
    /// Channel sender for form events
    tx: mpsc::UnboundedSender<FormEvent>,
}

impl FormController {
    pub fn new(
        form: MedicationForm,
        service: Arc<AnalyzeInteractionsUseCase>,
        tx: mpsc::UnboundedSender<FormEvent>,
    ) -> Self {
        Self { form, service, tx }
    }

    pub fn form(&self) -> &MedicationForm {
        &self.form
    }

    /// Service used for submissions, for callers that dispatch themselves.
    pub fn service(&self) -> Arc<AnalyzeInteractionsUseCase> {
        self.service.clone()
    }

    fn emit(&self, event: FormEvent) {
        // Receiver dropped means nobody is rendering; the state is still updated
        let _ = self.tx.send(event);
    }

    fn emit_rows(&self) {
        self.emit(FormEvent::RowsChanged(self.form.rows().to_vec()));
    }

    fn emit_suggestions(&self) {
        self.emit(FormEvent::SuggestionsChanged {
            row: self.form.active_row(),
            suggestions: self.form.visible_suggestions().to_vec(),
        });
    }

    // ==================== Row editing ====================

    pub fn add_row(&mut self) -> RowId {
        let id = self.form.add_row();
        self.emit_rows();
        id
    }

    /// Remove a row; no-op if absent.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let had_active = self.form.active_row();
        let removed = self.form.remove_row(id);
        if removed {
            self.emit_rows();
            if had_active == Some(id) {
                self.emit_suggestions();
            }
        }
        removed
    }

    pub fn edit_field(&mut self, id: RowId, field: RowField, value: impl Into<String>) -> bool {
        let changed = self.form.edit_field(id, field, value);
        if changed {
            self.emit_rows();
            if field == RowField::Name {
                self.emit_suggestions();
            }
        }
        changed
    }

    pub fn focus_row(&mut self, id: RowId) -> bool {
        let focused = self.form.focus_row(id);
        if focused {
            self.emit_suggestions();
        }
        focused
    }

    pub fn select_suggestion(&mut self, id: RowId, suggestion: &str) -> bool {
        let selected = self.form.select_suggestion(id, suggestion);
        if selected {
            self.emit_rows();
            self.emit_suggestions();
        }
        selected
    }

    pub fn blur(&mut self) {
        self.form.blur();
        self.emit_suggestions();
    }

    // ==================== Submission ====================

    /// Validate the rows and, if possible, enter the loading state.
    pub fn begin_submit(&mut self) -> SubmitAction {
        if self.form.is_loading() {
            debug!("Submission ignored: analysis already in flight");
            return SubmitAction::Busy;
        }

        let medications = self.form.filled_medications();
        if medications.is_empty() {
            self.emit(FormEvent::Notice(Notice::input_required()));
            return SubmitAction::Rejected;
        }

        info!("Submitting {} medications for analysis", medications.len());
        self.form.set_loading(true);
        self.form.set_last_result(None);
        self.emit(FormEvent::LoadingChanged(true));

        SubmitAction::Dispatch(AnalysisRequest::new(medications))
    }

    /// Store the result of a dispatched analysis and leave the loading state.
    pub fn finish_submit(&mut self, result: AnalysisResult) {
        if let Some(error) = result.error() {
            self.emit(FormEvent::Notice(Notice::analysis_failed(error)));
        }
        self.form.set_last_result(Some(result.clone()));
        self.form.set_loading(false);
        self.emit(FormEvent::ResultReady(result));
        self.emit(FormEvent::LoadingChanged(false));
    }

    /// Run a full submission cycle.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitAction::Rejected => SubmitOutcome::Rejected,
            SubmitAction::Busy => SubmitOutcome::Busy,
            SubmitAction::Dispatch(request) => {
                let result = self.service.analyze(&request).await;
                self.finish_submit(result.clone());
                SubmitOutcome::Completed(result)
            }
        }
    }
}
