//! REPL (Read-Eval-Print Loop) for the interactive medication form

use crate::form::presenter::FormPresenter;
use crate::progress::spinner::AnalysisSpinner;
use pillpal_application::{FormController, FormEvent, SubmitAction};
use pillpal_domain::{RowField, RowId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tokio::sync::mpsc;
use tracing::debug;

/// One parsed line of form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Add,
    Remove(RowId),
    Set {
        row: RowId,
        field: RowField,
        value: String,
    },
    Pick {
        row: RowId,
        index: usize,
    },
    List,
    Check,
    Help,
    Quit,
}

impl std::str::FromStr for FormCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "add" | "a" => Ok(FormCommand::Add),
            "rm" | "remove" => Ok(FormCommand::Remove(parse_row(rest)?)),
            "name" | "dose" | "dosage" => {
                let field: RowField = verb.parse().map_err(|e| format!("{}", e))?;
                let (id, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(FormCommand::Set {
                    row: parse_row(id)?,
                    field,
                    value: value.trim().to_string(),
                })
            }
            "pick" => {
                let (id, n) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "Usage: pick <id> <n>".to_string())?;
                let index = n
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| format!("Invalid suggestion number: {}", n.trim()))?;
                Ok(FormCommand::Pick {
                    row: parse_row(id)?,
                    index,
                })
            }
            "list" | "ls" => Ok(FormCommand::List),
            "check" | "submit" => Ok(FormCommand::Check),
            "help" | "h" | "?" => Ok(FormCommand::Help),
            "quit" | "exit" | "q" => Ok(FormCommand::Quit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

fn parse_row(s: &str) -> Result<RowId, String> {
    s.parse()
        .map_err(|_| format!("Invalid row id: '{}'", s.trim()))
}

/// Suggestion by its 1-based position as shown to the user.
fn suggestion_at(suggestions: &[String], index: usize) -> Option<&String> {
    index.checked_sub(1).and_then(|i| suggestions.get(i))
}

/// Interactive medication form
pub struct FormRepl {
    controller: FormController,
    rx: mpsc::UnboundedReceiver<FormEvent>,
    presenter: FormPresenter,
    show_progress: bool,
}

impl FormRepl {
    pub fn new(controller: FormController, rx: mpsc::UnboundedReceiver<FormEvent>) -> Self {
        Self {
            controller,
            rx,
            presenter: FormPresenter::new(),
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("pillpal").join("form_history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.presenter.render_welcome();
        println!("{}", FormPresenter::format_rows(self.controller.form().rows()));
        println!();

        loop {
            match rl.readline("form> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match line.parse::<FormCommand>() {
                        Ok(FormCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => self.execute(command).await,
                        Err(message) => {
                            println!("{}", message);
                            println!("Type 'help' for available commands");
                        }
                    }
                    self.drain_events();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Apply one command to the controller. Output arrives as events.
    pub async fn execute(&mut self, command: FormCommand) {
        debug!(?command, "Form command");
        match command {
            FormCommand::Add => {
                let id = self.controller.add_row();
                self.controller.focus_row(id);
            }
            FormCommand::Remove(id) => {
                if !self.controller.remove_row(id) {
                    println!("No row #{}", id);
                }
            }
            FormCommand::Set { row, field, value } => {
                if !self.controller.edit_field(row, field, value) {
                    println!("No row #{}", row);
                }
            }
            FormCommand::Pick { row, index } => self.pick(row, index),
            FormCommand::List => {
                println!("{}", FormPresenter::format_rows(self.controller.form().rows()));
            }
            FormCommand::Check => self.check().await,
            FormCommand::Help => self.presenter.render_help(),
            FormCommand::Quit => {}
        }
    }

    fn pick(&mut self, row: RowId, index: usize) {
        if self.controller.form().active_row() != Some(row) && !self.controller.focus_row(row) {
            println!("No row #{}", row);
            return;
        }

        let Some(choice) =
            suggestion_at(self.controller.form().visible_suggestions(), index).cloned()
        else {
            println!("No suggestion {} for row #{}", index, row);
            return;
        };
        self.controller.select_suggestion(row, &choice);
    }

    async fn check(&mut self) {
        let SubmitAction::Dispatch(request) = self.controller.begin_submit() else {
            return;
        };
        self.drain_events();

        let spinner = AnalysisSpinner::start(request.len(), self.show_progress);
        let result = self.controller.service().analyze(&request).await;
        spinner.finish();

        self.controller.finish_submit(result);
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.presenter.render(&event);
        }
    }
}
