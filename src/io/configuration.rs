//! Generation constants and runtime configuration defaults

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 1920;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 1200;

// Cell sizing
/// Default search distance around the estimated cell size
pub const DEFAULT_TOLERANCE: usize = 5;
/// Divisor applied to the longer canvas edge to estimate the cell size
pub const CELL_SIZE_ESTIMATE_DIVISOR: usize = 100;
/// Smallest cell edge length accepted, in pixels
pub const MIN_CELL_SIZE: usize = 2;

// Partitioning
/// Fewest interior splits drawn per run
pub const MIN_SPLITS: usize = 4;
/// Most interior splits drawn per run
pub const MAX_SPLITS: usize = 16;
/// Minimum distance between parallel split lines, in cells
pub const SPLIT_SPACING: usize = 4;

// Bounds the loop that would otherwise retry forever on a congested grid
/// Rejected placements tolerated before a partition is abandoned
pub const MAX_SPLIT_ATTEMPTS: usize = 10_000;

// Coloring
/// Fewest regions filled with an accent
pub const MIN_ACCENT_REGIONS: usize = 2;
/// Most regions filled with an accent
pub const MAX_ACCENT_REGIONS: usize = 6;

/// Full generation runs attempted before a retryable failure is reported
pub const DEFAULT_RUN_ATTEMPTS: usize = 3;

// Output settings
/// Directory used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Environment variable that may name the output directory
pub const OUTPUT_DIR_ENV: &str = "WALLPAPER_FOLDER";
/// File name of the rendered wallpaper (format follows the extension)
pub const OUTPUT_FILE_NAME: &str = "wallpaper.jpg";
