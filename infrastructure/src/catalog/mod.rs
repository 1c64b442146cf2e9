//! Medication catalog sources

mod file_catalog;

pub use file_catalog::{CatalogError, load_catalog, load_catalog_or_builtin, parse_catalog};
