//! Command-line interface for generating a single wallpaper

use crate::algorithm::executor::{Composition, GenerationConfig, Generator};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_OUTPUT_DIR, DEFAULT_RUN_ATTEMPTS, DEFAULT_TOLERANCE, DEFAULT_WIDTH,
    MAX_SPLIT_ATTEMPTS, OUTPUT_DIR_ENV, SPLIT_SPACING,
};
use crate::io::error::Result;
use crate::io::image::export_composition;
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::info;
use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Generate Mondrian-style grid wallpapers"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Search distance around the estimated cell size
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fixed number of interior splits (drawn per run when omitted)
    #[arg(long)]
    pub splits: Option<usize>,

    /// Minimum distance between parallel splits, in cells
    #[arg(long, default_value_t = SPLIT_SPACING)]
    pub spacing: usize,

    /// Full generation runs attempted before giving up
    #[arg(short, long, default_value_t = DEFAULT_RUN_ATTEMPTS)]
    pub attempts: usize,

    /// Directory the wallpaper is written to
    #[arg(short, long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation configuration described by the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            tolerance: self.tolerance,
            split_count: self.splits,
            split_spacing: self.spacing,
            max_split_attempts: MAX_SPLIT_ATTEMPTS,
        }
    }
}

/// Orchestrates generation, rendering and export for one wallpaper
pub struct WallpaperRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl WallpaperRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Seed used when none is given on the command line
    fn resolve_seed(&self) -> u64 {
        self.cli.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Generate the composition without writing anything
    ///
    /// # Errors
    ///
    /// Returns an error if every generation run fails or the parameters are
    /// incompatible with any run
    pub fn generate(&mut self) -> Result<Composition> {
        let seed = self.resolve_seed();
        info!(
            "Generating {}x{} wallpaper with seed {seed}",
            self.cli.width, self.cli.height
        );

        let mut generator = Generator::new(self.cli.generation_config(), seed);
        let progress = &mut self.progress_manager;
        let result = generator.generate_observed(self.cli.attempts, |stage, run| {
            progress.stage_completed(stage, run);
        });

        progress.finish(if result.is_ok() { "done" } else { "failed" });
        result
    }

    /// Generate, render and export the wallpaper
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the image cannot be written
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let composition = self.generate()?;
        let path = export_composition(&composition, &self.cli.output)?;

        info!(
            "Wrote {} in {:.2?}",
            path.display(),
            start_time.elapsed()
        );
        Ok(())
    }
}
