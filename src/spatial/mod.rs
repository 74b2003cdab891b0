//! Spatial data structures for the composition grid
//!
//! This module contains:
//! - Cell tags and the owned grid every stage mutates
//! - Wall axes and the record of occupied split lines

/// Cell tags, positions and the owned grid
pub mod grid;
/// Wall axes and split spacing bookkeeping
pub mod splits;

pub use grid::{Accent, Cell, Grid, Position, RegionId};
pub use splits::{Axis, SplitRecord};
