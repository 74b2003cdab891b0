use crate::spatial::{Cell, Grid, Position};

/// Retag the 8-connected component containing `seed`
///
/// Every cell reachable from `seed` through cells carrying the seed's current
/// tag (diagonal steps included) is overwritten with `replacement`. Returns the
/// number of cells retagged; zero when `seed` is outside the grid or already
/// carries `replacement`.
pub fn flood_fill(grid: &mut Grid, seed: Position, replacement: Cell) -> usize {
    let Some(target) = grid.get(seed) else {
        return 0;
    };
    if target == replacement {
        return 0;
    }

    let mut pending = vec![seed];
    let mut filled = 0;

    while let Some(position) = pending.pop() {
        if grid.get(position) != Some(target) {
            continue;
        }

        grid.set(position, replacement);
        filled += 1;

        // Includes the cell itself, which the tag check above discards
        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(neighbor) = position.offset(dx, dy) {
                    pending.push(neighbor);
                }
            }
        }
    }

    filled
}
