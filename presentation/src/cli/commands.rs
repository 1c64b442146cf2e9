//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use pillpal_domain::{Medication, OutputFormat};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable text
    Text,
    /// JSON `{"summary": ..., "error": ...}`
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for pillpal
#[derive(Parser, Debug)]
#[command(name = "pillpal")]
#[command(author, version, about = "Check a medication list for drug interactions with an LLM")]
#[command(long_about = r#"
pillpal asks a language model, acting as a clinical pharmacist, to summarize
potential interactions between the medications you list.

The summary is informational only and is not medical advice.

Configuration files are loaded from (in priority order):
1. PILLPAL_* environment variables (e.g. PILLPAL_MODELS__ANALYSIS=gpt-5)
2. --config <path>     Explicit config file
3. ./pillpal.toml      Project-level config
4. ~/.config/pillpal/config.toml   Global config

Example:
  pillpal check -m "Lisinopril=10mg" -m "Aspirin=81mg"
  pillpal check -m "Warfarin=5mg" -m "Ibuprofen=400mg" --output json
  pillpal form
  pillpal suggest lis
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Model used for the analysis (overrides config)
    #[arg(long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Also write logs to daily-rolling files in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a list of medications once and print the result
    Check {
        /// Medication as NAME=DOSAGE (repeatable)
        #[arg(short = 'm', long = "medication", value_name = "NAME=DOSAGE")]
        medications: Vec<Medication>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormatArg>,
    },

    /// Fill in medications interactively, with autocomplete
    Form,

    /// Print catalog names starting with a prefix
    Suggest {
        prefix: String,

        /// Maximum number of suggestions (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show configuration sources and validation issues
    Config,
}
