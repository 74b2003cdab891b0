//! Progress display over the pipeline stages of each generation run

use crate::algorithm::executor::Stage;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed stages, restarting the bar when a run is retried
pub struct ProgressManager {
    bar: ProgressBar,
    run: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar sized to the working stages
    pub fn new() -> Self {
        let bar = ProgressBar::new(Stage::WORKING_STAGES as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix("run 1");
        Self { bar, run: 1 }
    }

    /// Create a bar that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(Stage::WORKING_STAGES as u64);
        Self { bar, run: 1 }
    }

    /// Record a completed stage of the given run
    pub fn stage_completed(&mut self, stage: Stage, run: usize) {
        if run != self.run {
            self.run = run;
            self.bar.reset();
            self.bar.set_prefix(format!("run {run}"));
        }
        self.bar.inc(1);
        self.bar.set_message(stage.label());
    }

    /// Run number of the most recent update
    pub const fn run(&self) -> usize {
        self.run
    }

    /// Number of stages completed in the current run
    pub fn completed_stages(&self) -> u64 {
        self.bar.position()
    }

    /// Finish with a closing message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
