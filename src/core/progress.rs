//! Progress bar for the status-collection phase

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::config::{PROGRESS_CHARS, PROGRESS_TEMPLATE};

/// Progress display fed by the scan's `(processed, total)` notifications
///
/// Draws on stderr; hidden entirely when disabled (JSON output, non-interactive use).
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    pub fn new(enabled: bool) -> Result<Self> {
        let bar = ProgressBar::with_draw_target(Some(0), draw_target(enabled));
        bar.set_style(create_progress_style()?);
        bar.set_prefix("🔍");
        bar.set_message("checking repositories...");
        Ok(Self { bar })
    }

    /// Applies one `(processed, total)` notification
    pub fn update(&self, processed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(processed as u64);
    }

    /// Removes the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

fn draw_target(enabled: bool) -> ProgressDrawTarget {
    if enabled {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    }
}

/// Creates a progress bar style configuration
/// Returns a ProgressStyle configured with the application's visual styling
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)?
        .progress_chars(PROGRESS_CHARS))
}
