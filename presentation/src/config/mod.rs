//! Presentation-level configuration

use pillpal_domain::OutputFormat;

/// Resolved output settings for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
