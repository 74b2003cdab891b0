use log::debug;

use crate::algorithm::flood::flood_fill;
use crate::spatial::{Cell, Grid, Position, RegionId};

/// A discovered region, addressed through one of its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Identifier carried by the region's marker cells
    pub id: RegionId,
    /// One cell belonging to the region
    pub seed: Position,
    /// Number of cells in the region
    pub area: usize,
}

/// Mark every maximal 8-connected blank area as a region
///
/// Scans row-major; each `Empty` cell met starts a new region whose whole
/// component is retagged `RegionMarker(id)`. Ids are assigned in discovery
/// order starting from zero.
pub fn locate_regions(grid: &mut Grid) -> Vec<Region> {
    let mut regions = Vec::new();

    for position in grid.positions() {
        if grid.get(position) != Some(Cell::Empty) {
            continue;
        }

        let id = RegionId(regions.len() as u32);
        let area = flood_fill(grid, position, Cell::RegionMarker(id));
        regions.push(Region {
            id,
            seed: position,
            area,
        });
    }

    debug!("Located {} regions", regions.len());
    regions
}
