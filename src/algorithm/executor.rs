use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::coloring::{ColoringSummary, color_regions},
    algorithm::partition::{Partitioner, WallSegment},
    algorithm::regions::{Region, locate_regions},
    algorithm::sizing::{GridSize, size_grid},
    io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_TOLERANCE, DEFAULT_WIDTH, MAX_SPLIT_ATTEMPTS, MAX_SPLITS,
        MIN_SPLITS, SPLIT_SPACING,
    },
    io::error::{Result, computation_error, invalid_parameter},
    spatial::Grid,
};

/// Parameters controlling a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Search distance around the estimated cell size
    pub tolerance: usize,
    /// Fixed split count; drawn from `[MIN_SPLITS, MAX_SPLITS]` when `None`
    pub split_count: Option<usize>,
    /// Minimum distance between parallel splits, in cells
    pub split_spacing: usize,
    /// Rejected placements tolerated before a partition is abandoned
    pub max_split_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tolerance: DEFAULT_TOLERANCE,
            split_count: None,
            split_spacing: SPLIT_SPACING,
            max_split_attempts: MAX_SPLIT_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    /// Create a configuration for a canvas with all other values defaulted
    pub fn for_canvas(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check values that no run could recover from
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension or the attempt budget is zero
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be positive"));
        }
        if self.max_split_attempts == 0 {
            return Err(invalid_parameter(
                "max_split_attempts",
                &self.max_split_attempts,
                &"must allow at least one attempt",
            ));
        }
        Ok(())
    }
}

/// Pipeline stage awaiting execution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Choose the cell size and lay the perimeter
    Sizing,
    /// Place interior walls
    Partitioning,
    /// Mark enclosed regions
    Locating,
    /// Fill regions with final colors
    Coloring,
    /// Composition ready to be taken
    Complete,
}

impl Stage {
    /// Number of stages that perform work
    pub const WORKING_STAGES: usize = 4;

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sizing => "sizing",
            Self::Partitioning => "partitioning",
            Self::Locating => "locating regions",
            Self::Coloring => "coloring",
            Self::Complete => "complete",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Sizing => Self::Partitioning,
            Self::Partitioning => Self::Locating,
            Self::Locating => Self::Coloring,
            Self::Coloring | Self::Complete => Self::Complete,
        }
    }
}

/// Finished grid and the decisions that produced it
#[derive(Clone, Debug)]
pub struct Composition {
    /// Fully colored grid including the perimeter ring
    pub grid: Grid,
    /// Cell edge length in pixels
    pub cell_size: usize,
    /// Canvas `(width, height)` in pixels
    pub canvas: (usize, usize),
    /// Split count drawn for the run
    pub split_count: usize,
    /// Walls placed by the partitioner, in placement order
    pub segments: Vec<WallSegment>,
    /// Number of regions discovered
    pub region_count: usize,
    /// Accent/background split of the regions
    pub coloring: ColoringSummary,
}

/// State owned by one run, discarded wholesale on failure
#[derive(Debug)]
struct RunState {
    size: GridSize,
    grid: Grid,
    split_count: usize,
    segments: Vec<WallSegment>,
    regions: Vec<Region>,
    region_count: usize,
    coloring: Option<ColoringSummary>,
}

/// Staged generation pipeline with a seeded random stream
///
/// Stages consume the same stream in order, so identical seeds and
/// configurations reproduce identical grids.
pub struct Generator {
    config: GenerationConfig,
    seed: u64,
    rng: StdRng,
    stage: Stage,
    run: Option<RunState>,
}

impl Generator {
    /// Create a generator for a configuration and seed
    pub fn new(config: GenerationConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            stage: Stage::Sizing,
            run: None,
        }
    }

    /// Seed the random stream was created from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Stage the next call to [`Self::execute_stage`] will run
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Grid of the run in progress, if sizing has happened
    pub fn grid(&self) -> Option<&Grid> {
        self.run.as_ref().map(|run| &run.grid)
    }

    /// Walls placed so far in the run in progress
    pub fn segments(&self) -> &[WallSegment] {
        self.run
            .as_ref()
            .map(|run| run.segments.as_slice())
            .unwrap_or_default()
    }

    /// Regions awaiting color in the run in progress
    pub fn regions(&self) -> &[Region] {
        self.run
            .as_ref()
            .map(|run| run.regions.as_slice())
            .unwrap_or_default()
    }

    /// Discard the run in progress and return to sizing
    ///
    /// The random stream is not rewound, so the next run draws fresh values.
    pub fn reset(&mut self) {
        self.stage = Stage::Sizing;
        self.run = None;
    }

    /// Execute the pending stage
    ///
    /// Returns `false` once the run is complete. A failed stage discards the
    /// run so the next call starts over from sizing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No cell size fits the canvas
    /// - The partition exhausts its attempt budget
    /// - Too few regions exist to color
    pub fn execute_stage(&mut self) -> Result<bool> {
        if self.stage == Stage::Complete {
            return Ok(false);
        }

        match self.run_stage() {
            Ok(()) => {
                self.stage = self.stage.next();
                Ok(true)
            }
            Err(error) => {
                self.reset();
                Err(error)
            }
        }
    }

    fn run_stage(&mut self) -> Result<()> {
        let stage = self.stage;
        let Self {
            config, rng, run, ..
        } = self;

        match stage {
            Stage::Sizing => {
                let size = size_grid(config.width, config.height, config.tolerance)?;
                let split_count = config
                    .split_count
                    .unwrap_or_else(|| rng.random_range(MIN_SPLITS..=MAX_SPLITS));
                *run = Some(RunState {
                    size,
                    grid: Grid::walled(size.bounds.0, size.bounds.1),
                    split_count,
                    segments: Vec::new(),
                    regions: Vec::new(),
                    region_count: 0,
                    coloring: None,
                });
            }
            Stage::Partitioning => {
                let state = active_run(run)?;
                let partitioner = Partitioner::new(config.split_spacing, config.max_split_attempts);
                state.segments = partitioner.partition(&mut state.grid, state.split_count, rng)?;
            }
            Stage::Locating => {
                let state = active_run(run)?;
                state.regions = locate_regions(&mut state.grid);
                state.region_count = state.regions.len();
            }
            Stage::Coloring => {
                let state = active_run(run)?;
                let regions = std::mem::take(&mut state.regions);
                state.coloring = Some(color_regions(
                    &mut state.grid,
                    regions,
                    state.split_count,
                    rng,
                )?);
            }
            Stage::Complete => {}
        }

        Ok(())
    }

    /// Take the finished composition, leaving the generator ready for a new run
    pub fn take_composition(&mut self) -> Option<Composition> {
        if self.stage != Stage::Complete {
            return None;
        }
        let run = self.run.take()?;
        self.stage = Stage::Sizing;

        Some(Composition {
            coloring: run.coloring?,
            grid: run.grid,
            cell_size: run.size.cell_size,
            canvas: (self.config.width, self.config.height),
            split_count: run.split_count,
            segments: run.segments,
            region_count: run.region_count,
        })
    }

    /// Run every stage once
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure
    pub fn generate(&mut self) -> Result<Composition> {
        self.generate_observed(1, |_, _| {})
    }

    /// Run the pipeline, starting over on retryable failures
    ///
    /// # Errors
    ///
    /// Returns an error if `runs` is zero, the configuration is invalid, a
    /// non-retryable failure occurs, or every run fails
    pub fn generate_with_retries(&mut self, runs: usize) -> Result<Composition> {
        self.generate_observed(runs, |_, _| {})
    }

    /// Run the pipeline, reporting each completed stage with its run number
    ///
    /// # Errors
    ///
    /// Returns an error if `runs` is zero, the configuration is invalid, a
    /// non-retryable failure occurs, or every run fails
    pub fn generate_observed<F>(&mut self, runs: usize, mut observer: F) -> Result<Composition>
    where
        F: FnMut(Stage, usize),
    {
        if runs == 0 {
            return Err(invalid_parameter("runs", &runs, &"must be at least one"));
        }
        self.config.validate()?;
        self.reset();

        let mut run = 1;
        loop {
            match self.run_to_completion(run, &mut observer) {
                Ok(composition) => {
                    info!(
                        "Generated {} regions ({} accented) from {} splits on run {run}",
                        composition.region_count,
                        composition.coloring.accent_regions,
                        composition.split_count
                    );
                    trace!("Final grid:\n{}", composition.grid);
                    return Ok(composition);
                }
                Err(error) if error.is_retryable() && run < runs => {
                    warn!("Run {run}/{runs} failed, retrying: {error}");
                    run += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn run_to_completion<F>(&mut self, run: usize, observer: &mut F) -> Result<Composition>
    where
        F: FnMut(Stage, usize),
    {
        debug!("Starting run {run} with seed {}", self.seed);
        loop {
            let stage = self.stage;
            if !self.execute_stage()? {
                break;
            }
            observer(stage, run);
        }

        self.take_composition().ok_or_else(|| {
            computation_error("generate", &"pipeline completed without a composition")
        })
    }
}

fn active_run(run: &mut Option<RunState>) -> Result<&mut RunState> {
    run.as_mut()
        .ok_or_else(|| computation_error("execute_stage", &"stage executed before sizing"))
}
