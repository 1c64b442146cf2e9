//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Medication name cannot be empty")]
    EmptyMedicationName,

    #[error("Dosage cannot be empty")]
    EmptyDosage,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid analysis result: {0}")]
    InvalidResult(String),
}

impl DomainError {
    /// Check if this error comes from validating user-supplied medication input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyMedicationName | DomainError::EmptyDosage
        )
    }
}
