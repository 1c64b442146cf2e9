//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_interactions;
pub mod form_controller;

#[cfg(test)]
pub(crate) mod test_support;
