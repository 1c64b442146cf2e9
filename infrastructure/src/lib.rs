//! Infrastructure layer for pillpal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: LLM providers, configuration file loading,
//! the medication catalog file and the JSONL analysis log.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use catalog::{CatalogError, load_catalog, load_catalog_or_builtin};
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{
    ProviderAdapter, ProviderKind, factory::build_gateway, routing::RoutingGateway,
};
