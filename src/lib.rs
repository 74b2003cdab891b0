//! Procedural Mondrian-style grid compositions
//!
//! A canvas is divided into square cells, partitioned by walls that always
//! anchor on existing perpendicular walls, segmented into regions by flood
//! fill, and colored with a bounded number of accent fills.

#![forbid(unsafe_code)]

/// Generation pipeline: sizing, partitioning, region discovery and coloring
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cell grid and wall bookkeeping
pub mod spatial;

pub use io::error::{MondrianError, Result};
