//! Medication form: editable rows, autocomplete and submission state.

pub mod entities;
pub mod state;

pub use entities::{MedicationRow, RowField, RowId};
pub use state::MedicationForm;
