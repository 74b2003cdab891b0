//! Tests for generation constants and their relationships

#[cfg(test)]
mod tests {
    use mondrian::io::configuration::{
        CELL_SIZE_ESTIMATE_DIVISOR, DEFAULT_HEIGHT, DEFAULT_OUTPUT_DIR, DEFAULT_RUN_ATTEMPTS,
        DEFAULT_TOLERANCE, DEFAULT_WIDTH, MAX_ACCENT_REGIONS, MAX_SPLIT_ATTEMPTS, MAX_SPLITS,
        MIN_ACCENT_REGIONS, MIN_CELL_SIZE, MIN_SPLITS, OUTPUT_DIR_ENV, OUTPUT_FILE_NAME,
        SPLIT_SPACING,
    };

    #[test]
    fn test_canvas_defaults() {
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (1920, 1200));
        assert_eq!(DEFAULT_TOLERANCE, 5);
        assert_eq!(CELL_SIZE_ESTIMATE_DIVISOR, 100);
        assert_eq!(MIN_CELL_SIZE, 2);
    }

    #[test]
    fn test_split_range() {
        assert_eq!((MIN_SPLITS, MAX_SPLITS), (4, 16));
        assert_eq!(SPLIT_SPACING, 4);
        assert!(MAX_SPLIT_ATTEMPTS > MAX_SPLITS);
    }

    // Tests the smallest split draw still admits the minimum accent count
    #[test]
    fn test_accent_bounds_fit_split_range() {
        assert_eq!((MIN_ACCENT_REGIONS, MAX_ACCENT_REGIONS), (2, 6));
        assert!(MIN_SPLITS.min(MAX_ACCENT_REGIONS) >= MIN_ACCENT_REGIONS);
    }

    #[test]
    fn test_output_settings() {
        assert_eq!(DEFAULT_OUTPUT_DIR, ".");
        assert_eq!(OUTPUT_DIR_ENV, "WALLPAPER_FOLDER");
        assert_eq!(OUTPUT_FILE_NAME, "wallpaper.jpg");
        assert!(DEFAULT_RUN_ATTEMPTS >= 1);
    }
}
