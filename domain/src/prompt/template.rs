//! Prompt templates for the interaction analysis

use crate::analysis::AnalysisRequest;

/// Templates for the interaction analysis prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt establishing the model's role
    pub fn analysis_system() -> &'static str {
        "You are a clinical pharmacist expert."
    }

    /// User prompt enumerating every medication/dosage pair
    pub fn analysis_prompt(request: &AnalysisRequest) -> String {
        let mut prompt = String::from(
            r#"Analyze the following list of medications and dosages for potential drug interactions, side effects, and necessary precautions. Provide a concise summary of your analysis.

Respond with a single JSON object of the form {"summary": "<your analysis>"}. The `summary` field is required and must be a string.

Medications:
"#,
        );

        for medication in &request.medications {
            prompt.push_str(&format!(
                "- Name: {}, Dosage: {}\n",
                medication.name, medication.dosage
            ));
        }

        prompt
    }
}
