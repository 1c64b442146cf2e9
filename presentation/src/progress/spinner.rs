//! Spinner shown while an analysis is in flight

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

pub struct AnalysisSpinner {
    bar: ProgressBar,
}

impl AnalysisSpinner {
    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start ticking on stderr. A hidden spinner draws nothing.
    pub fn start(medication_count: usize, visible: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if !visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(Self::style());
        bar.set_prefix("Analyzing");
        bar.set_message(format!(
            "{} medication{}...",
            medication_count,
            if medication_count == 1 { "" } else { "s" }
        ));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for AnalysisSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
