//! Wall placement by sample-and-reject
//!
//! Each attempt picks an axis and a line coordinate, rejects lines too close
//! to an existing parallel split, then lays a wall between two randomly chosen
//! cells on that line that already carry the perpendicular wall tag. Walls
//! therefore always start and end on existing walls, keeping the wall graph
//! connected to the perimeter.

use log::{debug, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::{MAX_SPLIT_ATTEMPTS, SPLIT_SPACING};
use crate::io::error::{MondrianError, Result};
use crate::spatial::{Axis, Grid, Position, SplitRecord};

/// A placed interior wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSegment {
    /// Orientation of the wall
    pub axis: Axis,
    /// Column (vertical) or row (horizontal) the wall occupies
    pub line: usize,
    /// First covered offset along the line (inclusive)
    pub start: usize,
    /// Last covered offset along the line (inclusive)
    pub end: usize,
}

impl WallSegment {
    /// Number of cells covered
    pub const fn cell_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Both end cells
    pub const fn endpoints(&self) -> [Position; 2] {
        [
            self.axis.position(self.line, self.start),
            self.axis.position(self.line, self.end),
        ]
    }

    /// Every covered cell from `start` to `end`
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let (axis, line) = (self.axis, self.line);
        (self.start..=self.end).map(move |offset| axis.position(line, offset))
    }
}

/// Places a target number of interior walls on a walled grid
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    spacing: usize,
    max_attempts: usize,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new(SPLIT_SPACING, MAX_SPLIT_ATTEMPTS)
    }
}

impl Partitioner {
    /// Create a partitioner with a parallel spacing and a rejection budget
    pub const fn new(spacing: usize, max_attempts: usize) -> Self {
        Self {
            spacing,
            max_attempts,
        }
    }

    /// Minimum distance kept between parallel splits
    pub const fn spacing(&self) -> usize {
        self.spacing
    }

    /// Add exactly `split_count` walls to the grid
    ///
    /// Starts from a record holding the four perimeter lines. Rejected attempts
    /// do not count toward the target.
    ///
    /// # Errors
    ///
    /// Returns `NonTerminatingPartition` once `max_attempts` attempts have been
    /// rejected without reaching the target
    pub fn partition<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        split_count: usize,
        rng: &mut R,
    ) -> Result<Vec<WallSegment>> {
        let mut record = SplitRecord::seeded(grid.bounds());
        let mut segments = Vec::with_capacity(split_count);
        let mut rejected = 0;

        while segments.len() < split_count {
            if let Some(segment) = self.try_split(grid, &mut record, rng) {
                trace!(
                    "Placed {:?} split at {} covering {}..={}",
                    segment.axis, segment.line, segment.start, segment.end
                );
                segments.push(segment);
            } else {
                rejected += 1;
                if rejected >= self.max_attempts {
                    return Err(MondrianError::NonTerminatingPartition {
                        attempts: rejected,
                        placed: segments.len(),
                        target: split_count,
                    });
                }
            }
        }

        debug!(
            "Placed {} splits after {rejected} rejected attempts",
            segments.len()
        );
        Ok(segments)
    }

    /// Make a single placement attempt
    ///
    /// Returns the placed wall, or `None` when the sampled line sits within
    /// the spacing of a parallel split or offers fewer than two anchors. A
    /// placed wall is recorded in `record`.
    pub fn try_split<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        record: &mut SplitRecord,
        rng: &mut R,
    ) -> Option<WallSegment> {
        let bounds = grid.bounds();
        let axis = *Axis::ALL.choose(rng)?;

        let extent = axis.extent(bounds);
        if extent == 0 {
            return None;
        }
        let line = rng.random_range(0..extent);

        if record.conflicts(axis, line, self.spacing) {
            return None;
        }

        let anchor = axis.perpendicular().wall();
        let anchors: Vec<usize> = (0..axis.span(bounds))
            .filter(|&offset| grid.get(axis.position(line, offset)) == Some(anchor))
            .collect();

        let mut picked = anchors.choose_multiple(rng, 2).copied();
        let (first, second) = (picked.next()?, picked.next()?);
        let segment = WallSegment {
            axis,
            line,
            start: first.min(second),
            end: first.max(second),
        };

        for position in segment.cells() {
            grid.set(position, axis.wall());
        }
        record.insert(axis, line);

        Some(segment)
    }
}
