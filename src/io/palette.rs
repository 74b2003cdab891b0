//! Concrete colors for final cell tags

use crate::spatial::{Accent, Cell};

/// Background fill
pub const WHITE: [u8; 3] = [255, 255, 255];
/// Wall fill, shared by both axes
pub const BLACK: [u8; 3] = [0, 0, 0];
/// Red accent
pub const RED: [u8; 3] = [204, 0, 11];
/// Blue accent
pub const BLUE: [u8; 3] = [1, 102, 186];
/// Yellow accent
pub const YELLOW: [u8; 3] = [249, 213, 26];

/// RGB triple of an accent hue
pub const fn accent_rgb(accent: Accent) -> [u8; 3] {
    match accent {
        Accent::Red => RED,
        Accent::Blue => BLUE,
        Accent::Yellow => YELLOW,
    }
}

/// RGB triple for a cell, `None` for tags that are not yet resolved
pub const fn cell_rgb(cell: Cell) -> Option<[u8; 3]> {
    match cell {
        Cell::Background => Some(WHITE),
        Cell::VerticalWall | Cell::HorizontalWall => Some(BLACK),
        Cell::Accent(accent) => Some(accent_rgb(accent)),
        Cell::Empty | Cell::RegionMarker(_) => None,
    }
}
