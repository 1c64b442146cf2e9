//! Configuration file loading for pillpal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PILLPAL_` prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./pillpal.toml` or `./.pillpal.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pillpal/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileCatalogConfig, FileConfig,
    FileLoggingConfig, FileModelsConfig, FileOllamaConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig,
};
pub use loader::ConfigLoader;
