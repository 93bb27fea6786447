//! Coverage progress reporting for layout runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COVERAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Coverage: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent}}% {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays covered wall area against the run's required target
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an unstarted progress display
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Size the bar to the run's required covered area in pixels
    pub fn initialize(&mut self, required_area: i64) {
        let bar = ProgressBar::new(required_area.max(0) as u64);
        bar.set_style(COVERAGE_STYLE.clone());
        self.bar = bar;
    }

    /// Report the covered area and placed-frame count after a pass
    pub fn update(&self, covered_area: i64, frames_placed: usize) {
        self.bar.set_position(covered_area.max(0) as u64);
        self.bar.set_message(format!("{frames_placed} frames"));
    }

    /// Complete the display with the final frame count
    pub fn finish(&self, frames_placed: usize) {
        self.bar
            .finish_with_message(format!("{frames_placed} frames placed"));
    }
}
