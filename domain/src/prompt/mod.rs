//! Prompt domain
//!
//! Templates for the interaction analysis prompt.

mod template;

pub use template::PromptTemplate;
