//! Progress display backed by an indicatif bar, plus a stderr debug sink

use crate::mining::miner::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static MINING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {percent:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar for a mining run
///
/// Positions track the miner's percent estimate rather than its raw step
/// counter, so skipped sub-stages never make the bar jump backwards.
pub struct MiningProgress {
    bar: ProgressBar,
}

impl Default for MiningProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl MiningProgress {
    /// Create a progress bar scaled to 100 percent
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(MINING_STYLE.clone());
        Self { bar }
    }

    /// Clear the bar once mining is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for MiningProgress {
    fn report(&mut self, _current_step: usize, _total_steps: usize, message: &str, percent: f64) {
        self.bar.set_position(percent.clamp(0.0, 100.0).round() as u64);
        self.bar.set_message(message.to_string());
    }
}

/// Stderr sink used in debug mode instead of the bar
///
/// Prints every milestone on its own line so diagnostics survive in piped
/// or captured output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugSink;

impl ProgressSink for DebugSink {
    // Diagnostic output is the entire purpose of this sink
    #[allow(clippy::print_stderr)]
    fn report(&mut self, current_step: usize, total_steps: usize, message: &str, percent: f64) {
        eprintln!("[{current_step:>3}/{total_steps}] {message} ({percent:.0}%)");
    }
}
