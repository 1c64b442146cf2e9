//! Presentation layer for pillpal
//!
//! This crate contains CLI definitions, output formatters,
//! the analysis spinner, and the interactive medication form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormatArg};
pub use config::OutputConfig;
pub use form::{FormPresenter, FormRepl};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::AnalysisSpinner;
