use log::debug;

use crate::io::configuration::{CELL_SIZE_ESTIMATE_DIVISOR, MIN_CELL_SIZE};
use crate::io::error::{MondrianError, Result, invalid_parameter};

/// Cell edge length chosen for a canvas and the grid extent it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Cell edge length in pixels
    pub cell_size: usize,
    /// Grid extent `(width, height)` in cells, including the perimeter ring
    pub bounds: (usize, usize),
}

const fn divides_both(candidate: usize, width: usize, height: usize) -> bool {
    candidate >= MIN_CELL_SIZE && width % candidate == 0 && height % candidate == 0
}

/// Find a cell size dividing both canvas dimensions
///
/// Searches outward from `max(width, height) / 100`, alternating between a
/// shrinking and a growing candidate and preferring the shrinking one at each
/// step. The step grows by one each round until it exceeds `tolerance`.
///
/// # Errors
///
/// Returns an error if:
/// - Either dimension is zero
/// - No candidate within the tolerance divides both dimensions
pub fn find_divisor(width: usize, height: usize, tolerance: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"canvas dimensions must be positive",
        ));
    }

    let estimate = width.max(height) / CELL_SIZE_ESTIMATE_DIVISOR;
    let mut smaller_candidate = estimate;
    let mut greater_candidate = estimate;
    let mut delta = 1;

    while delta <= tolerance {
        if divides_both(smaller_candidate, width, height) {
            return Ok(smaller_candidate);
        }
        if divides_both(greater_candidate, width, height) {
            return Ok(greater_candidate);
        }

        greater_candidate += delta;
        smaller_candidate = smaller_candidate.saturating_sub(delta);
        delta += 1;
    }

    Err(MondrianError::NoCommonDivisor {
        width,
        height,
        tolerance,
    })
}

/// Choose the cell size for a canvas and derive the walled grid extent
///
/// # Errors
///
/// Propagates failures from [`find_divisor`]
pub fn size_grid(width: usize, height: usize, tolerance: usize) -> Result<GridSize> {
    let cell_size = find_divisor(width, height, tolerance)?;
    let bounds = (width / cell_size + 2, height / cell_size + 2);
    debug!(
        "Canvas {width}x{height} uses {cell_size}px cells ({}x{} grid)",
        bounds.0, bounds.1
    );

    Ok(GridSize { cell_size, bounds })
}
