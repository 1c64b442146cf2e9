//! Medication form state.
//!
//! Rows live in an ordered `Vec` keyed by [`RowId`]s drawn from a
//! monotonically increasing counter; ids are never reused within a form.

use super::entities::{MedicationRow, RowField, RowId};
use crate::analysis::AnalysisResult;
use crate::medication::{Medication, MedicationCatalog, SUGGESTION_LIMIT};

/// Editable list of medication rows plus autocomplete and submission state.
#[derive(Debug, Clone)]
pub struct MedicationForm {
    rows: Vec<MedicationRow>,
    next_id: u64,
    catalog: MedicationCatalog,
    suggestion_limit: usize,
    suggestions: Vec<String>,
    active_row: Option<RowId>,
    is_loading: bool,
    last_result: Option<AnalysisResult>,
}

impl MedicationForm {
    /// Create a form with a single empty row.
    pub fn new(catalog: MedicationCatalog) -> Self {
        let mut form = Self {
            rows: Vec::new(),
            next_id: 0,
            catalog,
            suggestion_limit: SUGGESTION_LIMIT,
            suggestions: Vec::new(),
            active_row: None,
            is_loading: false,
            last_result: None,
        };
        form.add_row();
        form
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    // ==================== Rows ====================

    /// Append an empty row with a fresh id.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(MedicationRow::empty(id));
        id
    }

    /// Remove a row. Returns `false` if no row has that id.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        if removed && self.active_row == Some(id) {
            self.active_row = None;
            self.suggestions.clear();
        }
        removed
    }

    /// Update one field of a row. Returns `false` if no row has that id.
    ///
    /// Editing a name recomputes suggestions and activates the row;
    /// clearing a name clears suggestions and deactivates it.
    pub fn edit_field(&mut self, id: RowId, field: RowField, value: impl Into<String>) -> bool {
        let value = value.into();
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            return false;
        };
        row.set_field(field, value.clone());

        if field == RowField::Name {
            if value.is_empty() {
                self.suggestions.clear();
                self.active_row = None;
            } else {
                self.suggestions = self.catalog.suggest(&value, self.suggestion_limit);
                self.active_row = Some(id);
            }
        }
        true
    }

    /// Activate a row, offering suggestions for its current name.
    pub fn focus_row(&mut self, id: RowId) -> bool {
        let Some(row) = self.row(id) else {
            return false;
        };
        let name = row.name.clone();
        self.active_row = Some(id);
        if !name.is_empty() {
            self.suggestions = self.catalog.suggest(&name, self.suggestion_limit);
        }
        true
    }

    /// Accept a suggestion as the row's name and close the suggestion list.
    pub fn select_suggestion(&mut self, id: RowId, suggestion: &str) -> bool {
        if !self.edit_field(id, RowField::Name, suggestion) {
            return false;
        }
        self.suggestions.clear();
        self.active_row = None;
        true
    }

    /// Deactivate whichever row is active.
    pub fn blur(&mut self) {
        self.active_row = None;
    }

    // ==================== Submission ====================

    /// Rows with both fields filled, trimmed, ids stripped.
    pub fn filled_medications(&self) -> Vec<Medication> {
        self.rows
            .iter()
            .filter_map(MedicationRow::to_medication)
            .collect()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_last_result(&mut self, result: Option<AnalysisResult>) {
        self.last_result = result;
    }

    // ==================== Accessors ====================

    pub fn rows(&self) -> &[MedicationRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&MedicationRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Suggestions to display: only while a row is active.
    pub fn visible_suggestions(&self) -> &[String] {
        if self.active_row.is_some() {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn active_row(&self) -> Option<RowId> {
        self.active_row
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn catalog(&self) -> &MedicationCatalog {
        &self.catalog
    }
}

impl Default for MedicationForm {
    fn default() -> Self {
        Self::new(MedicationCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MedicationForm {
        MedicationForm::new(MedicationCatalog::new([
            "Lisinopril",
            "Listerine",
            "Metformin",
        ]))
    }

    #[test]
    fn test_new_form_has_one_empty_row() {
        let form = form();
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0], MedicationRow::empty(RowId(0)));
        assert!(!form.is_loading());
        assert!(form.last_result().is_none());
    }

    #[test]
    fn test_add_row_assigns_monotonic_ids() {
        let mut form = form();
        let a = form.add_row();
        let b = form.add_row();
        assert_eq!((a, b), (RowId(1), RowId(2)));

        assert!(form.remove_row(b));
        let c = form.add_row();
        assert_eq!(c, RowId(3), "ids are not reused");
    }

    #[test]
    fn test_remove_missing_row_is_noop() {
        let mut form = form();
        assert!(!form.remove_row(RowId(42)));
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn test_edit_name_updates_suggestions() {
        let mut form = form();
        assert!(form.edit_field(RowId(0), RowField::Name, "Lis"));
        assert_eq!(form.suggestions(), ["Lisinopril", "Listerine"]);
        assert_eq!(form.active_row(), Some(RowId(0)));
        assert_eq!(form.visible_suggestions().len(), 2);
    }

    #[test]
    fn test_clearing_name_clears_suggestions() {
        let mut form = form();
        form.edit_field(RowId(0), RowField::Name, "Lis");
        form.edit_field(RowId(0), RowField::Name, "");
        assert!(form.suggestions().is_empty());
        assert!(form.active_row().is_none());
    }

    #[test]
    fn test_edit_dosage_keeps_suggestions() {
        let mut form = form();
        form.edit_field(RowId(0), RowField::Name, "Met");
        form.edit_field(RowId(0), RowField::Dosage, "500mg");
        assert_eq!(form.suggestions(), ["Metformin"]);
        assert_eq!(form.row(RowId(0)).unwrap().dosage, "500mg");
    }

    #[test]
    fn test_edit_unknown_row_changes_nothing() {
        let mut form = form();
        assert!(!form.edit_field(RowId(9), RowField::Name, "Lis"));
        assert!(form.suggestions().is_empty());
        assert!(form.active_row().is_none());
    }

    #[test]
    fn test_select_suggestion_sets_name_and_closes_list() {
        let mut form = form();
        form.edit_field(RowId(0), RowField::Name, "lis");
        assert!(form.select_suggestion(RowId(0), "Lisinopril"));
        assert_eq!(form.row(RowId(0)).unwrap().name, "Lisinopril");
        assert!(form.suggestions().is_empty());
        assert!(form.active_row().is_none());
    }

    #[test]
    fn test_focus_and_blur() {
        let mut form = form();
        form.edit_field(RowId(0), RowField::Name, "Met");
        form.blur();
        assert!(form.visible_suggestions().is_empty());

        let id = form.add_row();
        form.edit_field(id, RowField::Name, "Lis");
        assert!(form.focus_row(RowId(0)));
        assert_eq!(form.active_row(), Some(RowId(0)));
        assert_eq!(form.suggestions(), ["Metformin"]);
        assert!(!form.focus_row(RowId(99)));
    }

    #[test]
    fn test_removing_active_row_clears_suggestions() {
        let mut form = form();
        form.edit_field(RowId(0), RowField::Name, "Lis");
        form.remove_row(RowId(0));
        assert!(form.active_row().is_none());
        assert!(form.suggestions().is_empty());
    }

    #[test]
    fn test_filled_medications_filters_and_trims() {
        let mut form = form();
        let second = form.add_row();
        form.edit_field(second, RowField::Name, "Aspirin");
        form.edit_field(second, RowField::Dosage, " 81mg ");
        let third = form.add_row();
        form.edit_field(third, RowField::Name, "Ibuprofen");

        assert_eq!(
            form.filled_medications(),
            vec![Medication::try_new("Aspirin", "81mg").unwrap()]
        );
    }
}
