//! Static catalog of known medication names used for autocomplete.

/// Maximum number of suggestions offered for one prefix.
pub const SUGGESTION_LIMIT: usize = 5;

/// Commonly prescribed medications, in display order.
const COMMON_MEDICATIONS: &[&str] = &[
    "Acetaminophen",
    "Albuterol",
    "Alprazolam",
    "Amlodipine",
    "Amoxicillin",
    "Amitriptyline",
    "Aspirin",
    "Atenolol",
    "Atorvastatin",
    "Azithromycin",
    "Bupropion",
    "Buspirone",
    "Carvedilol",
    "Cetirizine",
    "Ciprofloxacin",
    "Citalopram",
    "Clonazepam",
    "Clopidogrel",
    "Cyclobenzaprine",
    "Diazepam",
    "Digoxin",
    "Diltiazem",
    "Doxycycline",
    "Duloxetine",
    "Escitalopram",
    "Esomeprazole",
    "Famotidine",
    "Fluconazole",
    "Fluoxetine",
    "Furosemide",
    "Gabapentin",
    "Glipizide",
    "Hydrochlorothiazide",
    "Hydrocodone",
    "Ibuprofen",
    "Insulin Glargine",
    "Levothyroxine",
    "Lisinopril",
    "Loratadine",
    "Lorazepam",
    "Losartan",
    "Meloxicam",
    "Metformin",
    "Methotrexate",
    "Methylprednisolone",
    "Metoprolol",
    "Montelukast",
    "Naproxen",
    "Omeprazole",
    "Ondansetron",
    "Oxycodone",
    "Pantoprazole",
    "Paroxetine",
    "Prednisone",
    "Pravastatin",
    "Propranolol",
    "Quetiapine",
    "Rosuvastatin",
    "Sertraline",
    "Simvastatin",
    "Spironolactone",
    "Tamsulosin",
    "Tramadol",
    "Trazodone",
    "Valacyclovir",
    "Venlafaxine",
    "Verapamil",
    "Warfarin",
    "Zolpidem",
];

/// Read-only, ordered list of medication names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationCatalog {
    names: Vec<String>,
}

impl MedicationCatalog {
    /// Build a catalog from an arbitrary ordered list of names.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::new(COMMON_MEDICATIONS.iter().copied())
    }

    /// Names whose lowercase form starts with the lowercase `prefix`.
    ///
    /// Results keep catalog order and are capped at `limit`. An empty
    /// prefix yields no suggestions.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for MedicationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
