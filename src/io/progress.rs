//! Reveal progress display for the purchase flow

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static REVEAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking tile reveals during an expansion
///
/// Disabled instances swallow every update, so the purchase flow can run
/// quietly without branching at each step.
pub struct RevealProgress {
    bar: Option<ProgressBar>,
}

impl RevealProgress {
    /// Create a progress display for the given number of scheduled reveals
    pub fn new(total_steps: usize, enabled: bool) -> Self {
        let bar = (enabled && total_steps > 0).then(|| {
            let bar = ProgressBar::new(total_steps as u64);
            bar.set_style(REVEAL_STYLE.clone());
            bar.set_message("Revealing");
            bar
        });
        Self { bar }
    }

    /// Report the number of tiles revealed so far
    pub fn update(&self, revealed: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(revealed as u64);
        }
    }

    /// Complete and clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("Island expanded");
        }
    }
}

impl std::fmt::Debug for RevealProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealProgress")
            .field("enabled", &self.bar.is_some())
            .finish()
    }
}
