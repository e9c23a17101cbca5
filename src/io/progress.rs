//! Progress display for thumbnail indexing and cell composition

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates the two progress bars of a mosaic run
///
/// The indexing bar tracks thumbnail files visited and the composition bar
/// tracks cells filled. A hidden manager keeps the same interface but draws
/// nothing.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    indexing_bar: Option<ProgressBar>,
    composing_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager drawing to standard error
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            indexing_bar: None,
            composing_bar: None,
        }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            indexing_bar: None,
            composing_bar: None,
        }
    }

    /// Start tracking thumbnail indexing
    pub fn start_indexing(&mut self) {
        self.indexing_bar = Some(self.add_bar("indexing"));
    }

    /// Report `visited` of `total` thumbnail files processed
    pub fn update_indexing(&self, visited: usize, total: usize) {
        if let Some(ref bar) = self.indexing_bar {
            bar.set_length(total as u64);
            bar.set_position(visited as u64);
        }
    }

    /// Mark indexing complete with the number of usable thumbnails
    pub fn finish_indexing(&self, usable: usize) {
        if let Some(ref bar) = self.indexing_bar {
            bar.finish_with_message(format!("{usable} usable"));
        }
    }

    /// Start tracking cell composition
    pub fn start_composing(&mut self) {
        self.composing_bar = Some(self.add_bar("composing"));
    }

    /// Report `done` of `total` cells filled
    pub fn update_composing(&self, done: usize, total: usize) {
        if let Some(ref bar) = self.composing_bar {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.composing_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    fn add_bar(&self, prefix: &'static str) -> ProgressBar {
        let bar = ProgressBar::new(0);
        bar.set_style(BAR_STYLE.clone());
        bar.set_prefix(prefix);
        self.multi_progress.add(bar)
    }
}
