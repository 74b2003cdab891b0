/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster rendering and file export
pub mod image;
/// Mapping from cell tags to RGB colors
pub mod palette;
/// Stage progress display
pub mod progress;
