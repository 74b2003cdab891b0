/// Region coloring with bounded accent fills
pub mod coloring;
/// Staged pipeline driver and run configuration
pub mod executor;
/// 8-connected flood fill shared by region discovery and coloring
pub mod flood;
/// Interior wall placement anchored on existing walls
pub mod partition;
/// Discovery of enclosed regions
pub mod regions;
/// Cell size selection for a canvas
pub mod sizing;
