//! Application-level configuration.
//!
//! - [`AnalysisConfig`] — model selection, suggestion limit and call timeout

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
