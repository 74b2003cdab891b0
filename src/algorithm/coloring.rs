//! Final fill of discovered regions
//!
//! Regions are shuffled, a bounded number receive an accent hue and the rest
//! receive the background. Fills reuse the region flood fill, so each one is
//! confined to the marker component reachable from its seed.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::algorithm::flood::flood_fill;
use crate::algorithm::regions::Region;
use crate::io::configuration::{MAX_ACCENT_REGIONS, MIN_ACCENT_REGIONS};
use crate::io::error::{MondrianError, Result, computation_error};
use crate::spatial::{Accent, Cell, Grid};

/// Outcome of coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoringSummary {
    /// Regions filled with an accent hue
    pub accent_regions: usize,
    /// Regions filled with the background
    pub background_regions: usize,
}

/// Upper bound for the number of accent regions
///
/// The draw is capped by the split count, the palette repeat limit and the
/// number of regions actually available.
pub fn max_accent_regions(split_count: usize, region_count: usize) -> usize {
    split_count.min(MAX_ACCENT_REGIONS).min(region_count)
}

/// Fill every region with a final color
///
/// Draws the accent count uniformly from `[2, max_accent_regions]`, then pops
/// regions from the shuffled list: the first ones take a uniformly chosen
/// accent, the remainder take the background.
///
/// # Errors
///
/// Returns `InsufficientRegions` when the accent count bound is below two,
/// leaving the grid untouched
pub fn color_regions<R: Rng + ?Sized>(
    grid: &mut Grid,
    mut regions: Vec<Region>,
    split_count: usize,
    rng: &mut R,
) -> Result<ColoringSummary> {
    let upper = max_accent_regions(split_count, regions.len());
    if upper < MIN_ACCENT_REGIONS {
        return Err(MondrianError::InsufficientRegions {
            regions: regions.len(),
            split_count,
        });
    }

    regions.shuffle(rng);
    let fill_count = rng.random_range(MIN_ACCENT_REGIONS..=upper);

    for region in regions.split_off(regions.len() - fill_count) {
        let accent = *Accent::ALL
            .choose(rng)
            .ok_or_else(|| computation_error("color_regions", &"accent palette is empty"))?;
        flood_fill(grid, region.seed, Cell::Accent(accent));
    }

    let background_regions = regions.len();
    for region in regions {
        flood_fill(grid, region.seed, Cell::Background);
    }

    debug!("Colored {fill_count} accent and {background_regions} background regions");
    Ok(ColoringSummary {
        accent_regions: fill_count,
        background_regions,
    })
}
