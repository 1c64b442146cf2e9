//! CLI entrypoint for pillpal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use pillpal_application::{AnalysisConfig, AnalyzeInteractionsUseCase, FormController};
use pillpal_domain::{
    AnalysisRequest, ConfigIssue, Medication, MedicationCatalog, MedicationForm, Model,
    OutputFormat,
};
use pillpal_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, build_gateway, load_catalog_or_builtin,
};
use pillpal_presentation::{
    AnalysisSpinner, Cli, Command, ConsoleFormatter, FormRepl, OutputConfig,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.dir.clone());
    let _guard = init_tracing(cli.verbose, log_dir.as_deref());

    info!("Starting pillpal");

    if let Command::Config = cli.command {
        show_config(&cli, &config);
        return Ok(ExitCode::SUCCESS);
    }

    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    let output = OutputConfig {
        format: config.output.parse_format().0.unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply();

    match &cli.command {
        Command::Check {
            medications,
            output: format,
        } => {
            let format = format.map(OutputFormat::from).unwrap_or(output.format);
            let service = build_service(&cli, &config)?;
            run_check(&service, medications, format).await
        }
        Command::Form => {
            let catalog = load_catalog_or_builtin(config.catalog.path.as_deref())?;
            let service = build_service(&cli, &config)?;
            run_form(service, catalog, config.catalog.suggestion_limit).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Suggest { prefix, limit } => {
            let catalog = load_catalog_or_builtin(config.catalog.path.as_deref())?;
            let limit = limit.unwrap_or(config.catalog.suggestion_limit);
            for name in catalog.suggest(prefix, limit) {
                println!("{}", name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => Ok(ExitCode::SUCCESS),
    }
}

/// Install the stderr subscriber, plus a daily-rolling file when `log_dir`
/// is set. The returned guard flushes the file writer on drop.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pillpal.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

// === Dependency Injection ===
fn build_service(cli: &Cli, config: &FileConfig) -> Result<Arc<AnalyzeInteractionsUseCase>> {
    let model = cli
        .model
        .as_deref()
        .map(Model::from)
        .or(config.models.parse_analysis().0)
        .unwrap_or_default();

    let analysis_config = AnalysisConfig::default()
        .with_model(model)
        .with_suggestion_limit(config.catalog.suggestion_limit)
        .with_request_timeout(config.providers.request_timeout());

    let (gateway, issues) = build_gateway(&config.providers)?;
    for issue in &issues {
        warn!("{}", issue.message);
    }

    let mut service = AnalyzeInteractionsUseCase::new(Arc::new(gateway), &analysis_config);

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::open(path) {
            Ok(logger) => {
                info!("Analysis log: {}", logger.path().display());
                service = service.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!("Could not open analysis log {}: {}", path.display(), e),
        }
    }

    info!("Analysis model: {}", service.model());
    Ok(Arc::new(service))
}

async fn run_check(
    service: &AnalyzeInteractionsUseCase,
    medications: &[Medication],
    format: OutputFormat,
) -> Result<ExitCode> {
    let request = AnalysisRequest::new(medications.to_vec());
    let interactive = format == OutputFormat::Text;

    if interactive && !request.is_empty() {
        println!("Checking {} medications:", request.len());
        println!("{}", ConsoleFormatter::format_medications(medications));
        println!();
    }

    let spinner = AnalysisSpinner::start(request.len(), interactive);
    let result = service.analyze(&request).await;
    spinner.finish();

    println!("{}", ConsoleFormatter::render(&result, format));

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_form(
    service: Arc<AnalyzeInteractionsUseCase>,
    catalog: MedicationCatalog,
    suggestion_limit: usize,
) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let form = MedicationForm::new(catalog).with_suggestion_limit(suggestion_limit);
    let controller = FormController::new(form, service, tx);

    FormRepl::new(controller, rx).run().await?;
    Ok(())
}

fn show_config(cli: &Cli, config: &FileConfig) {
    ConfigLoader::print_config_sources(cli.config.as_ref());
    println!();

    if cli.no_config {
        println!("(--no-config: files are ignored, built-in defaults in use)");
        println!();
    }

    let model = config
        .models
        .parse_analysis()
        .0
        .unwrap_or_default();
    println!("Analysis model:  {}", model);
    println!(
        "Default provider: {}",
        config.providers.default.as_deref().unwrap_or("openai")
    );
    match config.providers.request_timeout() {
        Some(timeout) => println!("Request timeout: {}s", timeout.as_secs()),
        None => println!("Request timeout: none"),
    }
    match &config.catalog.path {
        Some(path) => println!("Catalog:         {}", path.display()),
        None => println!("Catalog:         built-in"),
    }
    println!();

    let issues: Vec<ConfigIssue> = config.validate();
    if issues.is_empty() {
        println!("No configuration issues.");
    } else {
        println!("Issues:");
        for issue in issues {
            let label = if issue.is_error() { "error" } else { "warning" };
            println!("  [{}] {}", label, issue.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_missing_catalog() -> FileConfig {
        let mut config = ConfigLoader::load_defaults();
        config.catalog.path = Some(PathBuf::from("/nonexistent/pillpal/catalog.txt"));
        config
    }

    #[tokio::test]
    async fn test_check_runs_without_reading_catalog() {
        let cli = Cli::parse_from(["pillpal", "--no-config", "check", "--output", "json"]);
        let Command::Check { medications, .. } = &cli.command else {
            panic!("expected check");
        };
        let config = config_with_missing_catalog();

        let service = build_service(&cli, &config).unwrap();
        // No medications: answered locally, no catalog or model involved
        let code = run_check(&service, medications, OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_missing_catalog_is_an_error_when_needed() {
        let config = config_with_missing_catalog();
        assert!(load_catalog_or_builtin(config.catalog.path.as_deref()).is_err());
    }
}
