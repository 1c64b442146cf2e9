//! Medication catalog loaded from a plain-text file
//!
//! The file holds one medication name per line. Blank lines and lines
//! starting with `#` are skipped; surrounding whitespace is trimmed.
//!
//! ```text
//! # Cardiovascular
//! Lisinopril
//! Amlodipine
//!
//! # Analgesics
//! Ibuprofen
//! ```

use pillpal_domain::MedicationCatalog;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog {0} contains no medication names")]
    Empty(PathBuf),
}

/// Parse catalog file contents into medication names.
pub fn parse_catalog(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<MedicationCatalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let names = parse_catalog(&content);
    if names.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }

    debug!("Loaded {} medication names from {}", names.len(), path.display());
    Ok(MedicationCatalog::new(names))
}

/// The configured catalog, or the built-in list when no path is set.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<MedicationCatalog, CatalogError> {
    match path {
        Some(path) => load_catalog(path),
        None => Ok(MedicationCatalog::builtin()),
    }
}
