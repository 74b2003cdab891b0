//! Owned cell grid shared by every pipeline stage
//!
//! Cells are stored row-major in an `ndarray::Array2` indexed `[row, col]`.
//! Positions exposed to callers use `x` for the column and `y` for the row.
//! A freshly walled grid carries the perimeter that every interior split
//! anchors on.

use ndarray::Array2;
use std::fmt;

/// Identifier assigned to a region when it is first discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

/// Accent hues available to the region colorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    /// First accent (red in the reference palette)
    Red,
    /// Second accent (blue in the reference palette)
    Blue,
    /// Third accent (yellow in the reference palette)
    Yellow,
}

impl Accent {
    /// Every accent in palette order
    pub const ALL: [Self; 3] = [Self::Red, Self::Blue, Self::Yellow];
}

/// Structural or color role of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unresolved interior
    #[default]
    Empty,
    /// Wall laid along a column
    VerticalWall,
    /// Wall laid along a row
    HorizontalWall,
    /// Discovered but not yet colored, bound to its region
    RegionMarker(RegionId),
    /// Final background fill
    Background,
    /// Final accent fill
    Accent(Accent),
}

impl Cell {
    /// Test whether the cell blocks flood fill
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::VerticalWall | Self::HorizontalWall)
    }

    /// Test whether the cell carries one of the terminal fill colors
    pub const fn is_final_color(self) -> bool {
        matches!(self, Self::Background | Self::Accent(_))
    }
}

/// Column/row coordinate into a [`Grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed step, `None` when the result would be negative
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// Rectangular grid of tagged cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of `Empty` cells with no perimeter
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Empty),
        }
    }

    /// Create a grid whose outermost ring is wall
    ///
    /// Left and right columns are vertical wall, top and bottom rows are
    /// horizontal wall. Corners end up horizontal since rows are laid last.
    pub fn walled(width: usize, height: usize) -> Self {
        let mut grid = Self::empty(width, height);

        for y in 0..height {
            grid.set(Position::new(0, y), Cell::VerticalWall);
            grid.set(Position::new(width.saturating_sub(1), y), Cell::VerticalWall);
        }
        for x in 0..width {
            grid.set(Position::new(x, 0), Cell::HorizontalWall);
            grid.set(Position::new(x, height.saturating_sub(1)), Cell::HorizontalWall);
        }

        grid
    }

    /// Grid extent as `(width, height)` in cells
    pub fn bounds(&self) -> (usize, usize) {
        let (rows, cols) = self.cells.dim();
        (cols, rows)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Read a cell, `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get([position.y, position.x]).copied()
    }

    /// Overwrite a cell, returning whether the position was inside the grid
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        if let Some(slot) = self.cells.get_mut([position.y, position.x]) {
            *slot = cell;
            true
        } else {
            false
        }
    }

    /// Test whether a position lies on the outermost ring
    pub fn is_perimeter(&self, position: Position) -> bool {
        let (width, height) = self.bounds();
        position.x == 0
            || position.y == 0
            || position.x + 1 == width
            || position.y + 1 == height
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = self.bounds();
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Count cells satisfying a predicate
    pub fn count_matching(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }

    /// Borrow the backing array (indexed `[row, col]`)
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::VerticalWall => '|',
                    Cell::HorizontalWall => '-',
                    Cell::RegionMarker(_) => '?',
                    Cell::Background => ' ',
                    Cell::Accent(Accent::Red) => 'R',
                    Cell::Accent(Accent::Blue) => 'B',
                    Cell::Accent(Accent::Yellow) => 'Y',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
