//! Batch progress display for pattern generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of patterns
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Show a bar for `total` patterns
    pub fn initialize(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Patterns finished so far
    pub fn position(&self) -> usize {
        self.batch_bar
            .as_ref()
            .map_or(0, |bar| bar.position() as usize)
    }

    /// Advance the bar by one pattern, labelled with its file name
    pub fn complete_item(&self, name: &str) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Clear the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish_and_clear();
        }
    }
}
