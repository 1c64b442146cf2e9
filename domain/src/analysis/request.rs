//! Analysis request value object

use crate::medication::Medication;
use serde::{Deserialize, Serialize};

/// The medications submitted for one interaction analysis.
///
/// May be empty here; the analysis service rejects empty requests before
/// any model call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// A list of medications and their dosages.
    pub medications: Vec<Medication>,
}

impl AnalysisRequest {
    pub fn new(medications: Vec<Medication>) -> Self {
        Self { medications }
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    /// Every entry has a non-empty trimmed name and dosage.
    pub fn is_well_formed(&self) -> bool {
        self.medications.iter().all(Medication::is_well_formed)
    }
}

impl FromIterator<Medication> for AnalysisRequest {
    fn from_iter<I: IntoIterator<Item = Medication>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request() {
        let request = AnalysisRequest::default();
        assert!(request.is_empty());
        assert!(request.is_well_formed());
    }

    #[test]
    fn test_wire_shape() {
        let request: AnalysisRequest = [Medication::try_new("Aspirin", "81mg").unwrap()]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"medications": [{"name": "Aspirin", "dosage": "81mg"}]})
        );
    }

    #[test]
    fn test_deserialized_blank_entry_is_not_well_formed() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"medications": [{"name": "Aspirin", "dosage": ""}]}"#)
                .unwrap();
        assert_eq!(request.len(), 1);
        assert!(!request.is_well_formed());
    }
}
