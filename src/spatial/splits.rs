use bitvec::prelude::*;
use std::fmt;

use crate::spatial::grid::{Cell, Position};

/// Orientation of a wall line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Line at a fixed column, running top to bottom
    Vertical,
    /// Line at a fixed row, running left to right
    Horizontal,
}

impl Axis {
    /// Both axes, vertical first
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Wall tag laid by a split along this axis
    pub const fn wall(self) -> Cell {
        match self {
            Self::Vertical => Cell::VerticalWall,
            Self::Horizontal => Cell::HorizontalWall,
        }
    }

    /// The other axis
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Number of line coordinates available on this axis for `(width, height)`
    pub const fn extent(self, bounds: (usize, usize)) -> usize {
        match self {
            Self::Vertical => bounds.0,
            Self::Horizontal => bounds.1,
        }
    }

    /// Length of a line along this axis for `(width, height)`
    pub const fn span(self, bounds: (usize, usize)) -> usize {
        self.perpendicular().extent(bounds)
    }

    /// Cell at `offset` along the line at coordinate `line`
    pub const fn position(self, line: usize, offset: usize) -> Position {
        match self {
            Self::Vertical => Position::new(line, offset),
            Self::Horizontal => Position::new(offset, line),
        }
    }
}

/// Line coordinates already occupied by splits, one bitset per axis
///
/// Only consulted to keep new splits away from existing ones on the same axis.
#[derive(Clone, Debug)]
pub struct SplitRecord {
    vertical: BitVec,
    horizontal: BitVec,
}

impl SplitRecord {
    /// Create an empty record for a grid of `(width, height)` cells
    pub fn new(bounds: (usize, usize)) -> Self {
        Self {
            vertical: bitvec![0; bounds.0],
            horizontal: bitvec![0; bounds.1],
        }
    }

    /// Create a record holding the four perimeter lines
    pub fn seeded(bounds: (usize, usize)) -> Self {
        let mut record = Self::new(bounds);
        for axis in Axis::ALL {
            let extent = axis.extent(bounds);
            if extent > 0 {
                record.insert(axis, 0);
                record.insert(axis, extent - 1);
            }
        }
        record
    }

    const fn lines(&self, axis: Axis) -> &BitVec {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    /// Record a line; coordinates outside the grid are ignored
    pub fn insert(&mut self, axis: Axis, line: usize) {
        let lines = match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        };
        if line < lines.len() {
            lines.set(line, true);
        }
    }

    /// Test whether a line is recorded
    pub fn contains(&self, axis: Axis, line: usize) -> bool {
        self.lines(axis).get(line).as_deref() == Some(&true)
    }

    /// Test whether any recorded line on `axis` lies within `spacing` of `line`
    pub fn conflicts(&self, axis: Axis, line: usize, spacing: usize) -> bool {
        let lines = self.lines(axis);
        let start = line.saturating_sub(spacing).min(lines.len());
        let end = line.saturating_add(spacing).saturating_add(1).min(lines.len());
        lines.get(start..end).is_some_and(BitSlice::any)
    }

    /// Recorded coordinates on one axis in ascending order
    pub fn coordinates(&self, axis: Axis) -> Vec<usize> {
        self.lines(axis).iter_ones().collect()
    }

    /// Total number of recorded lines across both axes
    pub fn len(&self) -> usize {
        self.vertical.count_ones() + self.horizontal.count_ones()
    }

    /// Test if no lines are recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SplitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SplitRecord(vertical: {:?}, horizontal: {:?})",
            self.coordinates(Axis::Vertical),
            self.coordinates(Axis::Horizontal)
        )
    }
}
