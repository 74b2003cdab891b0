//! Tests for the owned cell grid, positions and perimeter layout

#[cfg(test)]
mod tests {
    use mondrian::spatial::{Accent, Cell, Grid, Position, RegionId};

    // Tests left/right columns are vertical wall and top/bottom rows horizontal wall
    #[test]
    fn test_walled_grid_perimeter_tags() {
        let grid = Grid::walled(6, 4);

        assert_eq!(grid.bounds(), (6, 4));
        for y in 1..3 {
            assert_eq!(grid.get(Position::new(0, y)), Some(Cell::VerticalWall));
            assert_eq!(grid.get(Position::new(5, y)), Some(Cell::VerticalWall));
        }
        for x in 0..6 {
            assert_eq!(grid.get(Position::new(x, 0)), Some(Cell::HorizontalWall));
            assert_eq!(grid.get(Position::new(x, 3)), Some(Cell::HorizontalWall));
        }
        assert_eq!(grid.count_matching(|cell| cell == Cell::Empty), 4 * 2);
    }

    // Tests every perimeter position holds a wall and no interior position does
    #[test]
    fn test_walled_grid_interior_is_empty() {
        let grid = Grid::walled(7, 5);

        for position in grid.positions() {
            let cell = grid.get(position);
            if grid.is_perimeter(position) {
                assert!(cell.is_some_and(Cell::is_wall), "{position:?} should be wall");
            } else {
                assert_eq!(cell, Some(Cell::Empty), "{position:?} should be empty");
            }
        }
    }

    // Tests out-of-bounds reads and writes are rejected without panicking
    #[test]
    fn test_get_and_set_out_of_bounds() {
        let mut grid = Grid::walled(3, 3);

        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
        assert!(!grid.set(Position::new(5, 5), Cell::Background));
        assert!(grid.set(Position::new(1, 1), Cell::Background));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Cell::Background));
    }

    // Tests positions are produced row by row
    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::empty(3, 2);
        let positions: Vec<Position> = grid.positions().collect();

        assert_eq!(positions.len(), 6);
        assert_eq!(positions.first(), Some(&Position::new(0, 0)));
        assert_eq!(positions.get(1), Some(&Position::new(1, 0)));
        assert_eq!(positions.get(3), Some(&Position::new(0, 1)));
        assert_eq!(positions.last(), Some(&Position::new(2, 1)));
    }

    #[test]
    fn test_position_offset_rejects_negative() {
        let origin = Position::new(0, 2);

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(1, -1), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_cell_classification() {
        assert!(Cell::VerticalWall.is_wall());
        assert!(Cell::HorizontalWall.is_wall());
        assert!(!Cell::RegionMarker(RegionId(0)).is_wall());
        assert!(Cell::Background.is_final_color());
        assert!(Cell::Accent(Accent::Yellow).is_final_color());
        assert!(!Cell::Empty.is_final_color());
        assert!(!Cell::RegionMarker(RegionId(3)).is_final_color());
    }

    // Tests the text dump used in trace logging
    #[test]
    fn test_display_dump() {
        let mut grid = Grid::walled(4, 3);
        grid.set(Position::new(2, 1), Cell::Accent(Accent::Red));

        assert_eq!(grid.to_string(), "----\n|.R|\n----\n");
    }
}
