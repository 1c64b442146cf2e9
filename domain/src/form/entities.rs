//! Editable medication rows

use crate::core::error::DomainError;
use crate::medication::Medication;
use serde::{Deserialize, Serialize};

/// Locally unique row identifier, assigned from a per-form counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RowId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RowId)
    }
}

/// Editable field of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Dosage,
}

impl std::str::FromStr for RowField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(RowField::Name),
            "dosage" | "dose" => Ok(RowField::Dosage),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

/// One row of the medication form, as typed by the user (untrimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationRow {
    pub id: RowId,
    pub name: String,
    pub dosage: String,
}

impl MedicationRow {
    pub fn empty(id: RowId) -> Self {
        Self {
            id,
            name: String::new(),
            dosage: String::new(),
        }
    }

    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Name => &self.name,
            RowField::Dosage => &self.dosage,
        }
    }

    pub fn set_field(&mut self, field: RowField, value: impl Into<String>) {
        match field {
            RowField::Name => self.name = value.into(),
            RowField::Dosage => self.dosage = value.into(),
        }
    }

    /// Both fields non-empty after trimming.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty() && !self.dosage.trim().is_empty()
    }

    /// The trimmed medication, if the row is filled.
    pub fn to_medication(&self) -> Option<Medication> {
        Medication::try_new(&self.name, &self.dosage).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_field_parse() {
        assert_eq!("name".parse::<RowField>().unwrap(), RowField::Name);
        assert_eq!("Dose".parse::<RowField>().unwrap(), RowField::Dosage);
        assert!("route".parse::<RowField>().is_err());
    }

    #[test]
    fn test_row_id_parse() {
        assert_eq!(" 3 ".parse::<RowId>().unwrap(), RowId(3));
        assert!("x".parse::<RowId>().is_err());
    }

    #[test]
    fn test_filled_row_converts_trimmed() {
        let mut row = MedicationRow::empty(RowId(0));
        assert!(!row.is_filled());
        assert!(row.to_medication().is_none());

        row.set_field(RowField::Name, "Aspirin");
        row.set_field(RowField::Dosage, " 81mg ");
        assert!(row.is_filled());
        assert_eq!(row.field(RowField::Dosage), " 81mg ");
        assert_eq!(
            row.to_medication(),
            Some(Medication::try_new("Aspirin", "81mg").unwrap())
        );
    }
}
