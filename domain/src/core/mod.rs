//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — LLM models the analysis can be delegated to
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
