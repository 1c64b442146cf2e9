//! Console output formatter for analysis results

use colored::Colorize;
use pillpal_domain::{AnalysisResult, Medication, OutputFormat};

pub const RESULT_TITLE: &str = "AI Analysis Result";
pub const ERROR_TITLE: &str = "An Error Occurred";

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn render(result: &AnalysisResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format a result as a titled text block
    pub fn format(result: &AnalysisResult) -> String {
        let mut output = String::new();

        match result {
            AnalysisResult::Summary(summary) => {
                output.push_str(&Self::header(RESULT_TITLE, false));
                output.push_str("\n\n");
                output.push_str(summary.trim());
                output.push('\n');
            }
            AnalysisResult::Error(error) => {
                output.push_str(&Self::header(ERROR_TITLE, true));
                output.push_str("\n\n");
                output.push_str(&error.red().to_string());
                output.push('\n');
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON `{"summary": ..., "error": ...}`
    pub fn format_json(result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per medication, as echoed before an analysis
    pub fn format_medications(medications: &[Medication]) -> String {
        medications
            .iter()
            .map(|m| format!("  {} {}", "-".dimmed(), m))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str, is_error: bool) -> String {
        let line = "=".repeat(60);
        let (line, title) = if is_error {
            (line.red(), title.red().bold())
        } else {
            (line.cyan(), title.bold())
        };
        format!("{}\n{:^60}\n{}", line, title, line)
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_summary() {
        plain();
        let output = ConsoleFormatter::format(&AnalysisResult::success(
            "Lisinopril and ibuprofen may reduce kidney function.\n",
        ));
        assert!(output.contains(RESULT_TITLE));
        assert!(!output.contains(ERROR_TITLE));
        assert!(output.contains("Lisinopril and ibuprofen may reduce kidney function.\n"));
    }

    #[test]
    fn test_format_error() {
        plain();
        let output = ConsoleFormatter::format(&AnalysisResult::no_medications());
        assert!(output.contains(ERROR_TITLE));
        assert!(output.contains("No medications provided for analysis."));
    }

    #[test]
    fn test_format_json_has_both_keys() {
        let value: serde_json::Value = serde_json::from_str(&ConsoleFormatter::render(
            &AnalysisResult::success("ok"),
            OutputFormat::Json,
        ))
        .unwrap();
        assert_eq!(value, serde_json::json!({"summary": "ok", "error": null}));
    }

    #[test]
    fn test_format_medications() {
        plain();
        let meds = vec![
            Medication::try_new("Lisinopril", "10mg").unwrap(),
            Medication::try_new("Aspirin", "81mg").unwrap(),
        ];
        let output = ConsoleFormatter::format_medications(&meds);
        assert_eq!(output, "  - Lisinopril (10mg)\n  - Aspirin (81mg)");
    }
}
