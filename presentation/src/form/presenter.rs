//! Form Presenter - Renders FormEvents to the terminal
//!
//! All println!/colored output of the interactive form is concentrated
//! here; the form state and submission logic live in `FormController`.

use crate::ConsoleFormatter;
use colored::Colorize;
use pillpal_application::{FormEvent, Notice, NoticeKind};
use pillpal_domain::{MedicationRow, RowId};

/// Renders FormEvents to the terminal
#[derive(Default)]
pub struct FormPresenter;

impl FormPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render a single FormEvent to stdout
    pub fn render(&self, event: &FormEvent) {
        if let Some(text) = self.format_event(event) {
            println!("{}", text);
        }
    }

    /// Text for an event, or `None` for events with no visible output.
    ///
    /// Loading changes are shown by the spinner, not here.
    pub fn format_event(&self, event: &FormEvent) -> Option<String> {
        match event {
            FormEvent::RowsChanged(rows) => Some(Self::format_rows(rows)),
            FormEvent::SuggestionsChanged { row, suggestions } => {
                Self::format_suggestions(*row, suggestions)
            }
            FormEvent::LoadingChanged(_) => None,
            FormEvent::Notice(notice) => Some(Self::format_notice(notice)),
            FormEvent::ResultReady(result) => Some(ConsoleFormatter::format(result)),
        }
    }

    pub fn format_rows(rows: &[MedicationRow]) -> String {
        if rows.is_empty() {
            return format!("{}", "(no medications — use 'add')".dimmed());
        }

        rows.iter()
            .map(|row| {
                let mark = if row.is_filled() {
                    "✓".green()
                } else {
                    "·".dimmed()
                };
                format!(
                    "  {} {:>4}  {} {:<24} {} {}",
                    mark,
                    format!("#{}", row.id).bold(),
                    "name:".dimmed(),
                    Self::or_blank(&row.name),
                    "dosage:".dimmed(),
                    Self::or_blank(&row.dosage),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_suggestions(row: Option<RowId>, suggestions: &[String]) -> Option<String> {
        let row = row?;
        if suggestions.is_empty() {
            return None;
        }

        let items = suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{} {}", format!("{})", i + 1).cyan(), name))
            .collect::<Vec<_>>()
            .join("  ");
        Some(format!(
            "  {} {}  {}",
            format!("Suggestions for #{}:", row).dimmed(),
            items,
            format!("(pick {} <n>)", row).dimmed()
        ))
    }

    fn format_notice(notice: &Notice) -> String {
        let title = match notice.kind {
            NoticeKind::Validation => notice.title.yellow().bold(),
            NoticeKind::Failure => notice.title.red().bold(),
        };
        format!("{} {}", title, notice.description)
    }

    fn or_blank(value: &str) -> String {
        if value.trim().is_empty() {
            "—".dimmed().to_string()
        } else {
            value.to_string()
        }
    }

    pub fn render_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│     pillpal - Medication Interaction Form    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{}",
            "Results are informational only and are not medical advice.".dimmed()
        );
        println!();
        self.render_help();
    }

    pub fn render_help(&self) {
        println!("Commands:");
        println!("  add                  - Add an empty row");
        println!("  rm <id>              - Remove a row");
        println!("  name <id> <text>     - Set a row's medication name");
        println!("  dose <id> <text>     - Set a row's dosage");
        println!("  pick <id> <n>        - Use suggestion n as the row's name");
        println!("  list                 - Show all rows");
        println!("  check                - Analyze the filled rows");
        println!("  help                 - Show this help");
        println!("  quit                 - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillpal_application::ports::form_event::INPUT_REQUIRED_DESCRIPTION;
    use pillpal_domain::{AnalysisResult, RowField};

    fn presenter() -> FormPresenter {
        colored::control::set_override(false);
        FormPresenter::new()
    }

    fn row(id: u64, name: &str, dosage: &str) -> MedicationRow {
        let mut row = MedicationRow::empty(RowId(id));
        row.set_field(RowField::Name, name);
        row.set_field(RowField::Dosage, dosage);
        row
    }

    #[test]
    fn test_rows_show_fill_state() {
        let p = presenter();
        let text = p
            .format_event(&FormEvent::RowsChanged(vec![
                row(1, "Lisinopril", "10mg"),
                row(2, "Aspirin", ""),
            ]))
            .unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains('✓'));
        assert!(lines[0].contains("#1"));
        assert!(lines[0].contains("10mg"));
        assert!(lines[1].contains('·'));
        assert!(lines[1].contains('—'));
    }

    #[test]
    fn test_suggestions_numbered_from_one() {
        let p = presenter();
        let text = p
            .format_event(&FormEvent::SuggestionsChanged {
                row: Some(RowId(3)),
                suggestions: vec!["Lisinopril".to_string(), "Lipitor".to_string()],
            })
            .unwrap();
        assert!(text.contains("1) Lisinopril"));
        assert!(text.contains("2) Lipitor"));
        assert!(text.contains("pick 3 <n>"));
    }

    #[test]
    fn test_hidden_suggestions_render_nothing() {
        let p = presenter();
        assert!(
            p.format_event(&FormEvent::SuggestionsChanged {
                row: None,
                suggestions: vec![],
            })
            .is_none()
        );
        assert!(p.format_event(&FormEvent::LoadingChanged(true)).is_none());
    }

    #[test]
    fn test_notice_and_result() {
        let p = presenter();
        let text = p
            .format_event(&FormEvent::Notice(Notice::input_required()))
            .unwrap();
        assert!(text.contains(INPUT_REQUIRED_DESCRIPTION));

        let text = p
            .format_event(&FormEvent::ResultReady(AnalysisResult::success("Fine.")))
            .unwrap();
        assert!(text.contains("AI Analysis Result"));
        assert!(text.contains("Fine."));
    }
}
