//! Medications and the autocomplete catalog.

pub mod catalog;
pub mod entities;

pub use catalog::{MedicationCatalog, SUGGESTION_LIMIT};
pub use entities::Medication;
