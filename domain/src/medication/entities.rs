//! Medication value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A medication and its dosage, as supplied for one analysis (Value Object)
///
/// Both fields are trimmed and guaranteed non-empty when built through
/// [`Medication::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Medication {
    /// The name of the medication.
    pub name: String,
    /// The dosage of the medication.
    pub dosage: String,
}

impl Medication {
    /// Create a medication, trimming both fields.
    pub fn try_new(name: impl AsRef<str>, dosage: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        let dosage = dosage.as_ref().trim();

        if name.is_empty() {
            return Err(DomainError::EmptyMedicationName);
        }
        if dosage.is_empty() {
            return Err(DomainError::EmptyDosage);
        }

        Ok(Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
        })
    }

    /// Whether both fields are non-empty after trimming.
    ///
    /// Deserialized values bypass [`Medication::try_new`], so this is
    /// the check used when a medication arrives from outside.
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && !self.dosage.trim().is_empty()
    }
}

impl std::fmt::Display for Medication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.dosage)
    }
}

impl std::str::FromStr for Medication {
    type Err = DomainError;

    /// Parse `name=dosage` (or `name:dosage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, dosage) = s
            .split_once('=')
            .or_else(|| s.split_once(':'))
            .unwrap_or((s, ""));
        Medication::try_new(name, dosage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_trims_fields() {
        let med = Medication::try_new("  Aspirin ", " 81mg ").unwrap();
        assert_eq!(med.name, "Aspirin");
        assert_eq!(med.dosage, "81mg");
    }

    #[test]
    fn test_try_new_rejects_blank_fields() {
        assert_eq!(
            Medication::try_new("   ", "10mg"),
            Err(DomainError::EmptyMedicationName)
        );
        assert_eq!(
            Medication::try_new("Lisinopril", "\t"),
            Err(DomainError::EmptyDosage)
        );
    }

    #[test]
    fn test_parse_name_dosage_pair() {
        let med: Medication = "Lisinopril=10mg".parse().unwrap();
        assert_eq!(med, Medication::try_new("Lisinopril", "10mg").unwrap());

        let med: Medication = "Warfarin: 5 mg".parse().unwrap();
        assert_eq!(med.dosage, "5 mg");

        assert!("Ibuprofen".parse::<Medication>().is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let med = Medication::try_new("Metformin", "500mg").unwrap();
        let json = serde_json::to_value(&med).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Metformin", "dosage": "500mg"})
        );
    }

    #[test]
    fn test_is_well_formed_on_deserialized_value() {
        let med: Medication = serde_json::from_str(r#"{"name": " ", "dosage": "5mg"}"#).unwrap();
        assert!(!med.is_well_formed());
    }
}
