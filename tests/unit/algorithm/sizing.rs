//! Tests for cell size selection and the grid extent it implies

#[cfg(test)]
mod tests {
    use mondrian::MondrianError;
    use mondrian::algorithm::sizing::{find_divisor, size_grid};
    use mondrian::io::configuration::DEFAULT_TOLERANCE;

    // Candidates in the order the search visits them
    fn visited_candidates(width: usize, height: usize, tolerance: usize) -> Vec<usize> {
        let estimate = width.max(height) / 100;
        let (mut smaller, mut greater) = (estimate, estimate);
        let mut visited = Vec::new();
        for delta in 1..=tolerance {
            visited.push(smaller);
            visited.push(greater);
            greater += delta;
            smaller = smaller.saturating_sub(delta);
        }
        visited
    }

    // Tests the reference canvas resolves to 20px cells
    #[test]
    fn test_reference_canvas() {
        let size = size_grid(1920, 1200, DEFAULT_TOLERANCE).expect("1920x1200 should size");

        assert_eq!(size.cell_size, 20);
        assert_eq!(size.bounds, (1920 / 20 + 2, 1200 / 20 + 2));
    }

    #[test]
    fn test_exact_estimate_is_preferred() {
        assert_eq!(find_divisor(1000, 1000, DEFAULT_TOLERANCE).ok(), Some(10));
        assert_eq!(find_divisor(4000, 3000, DEFAULT_TOLERANCE).ok(), Some(40));
    }

    // Tests two primes with no shared divisor above one fail
    #[test]
    fn test_coprime_dimensions_fail() {
        let result = find_divisor(97, 101, DEFAULT_TOLERANCE);

        match result {
            Err(MondrianError::NoCommonDivisor {
                width,
                height,
                tolerance,
            }) => {
                assert_eq!((width, height, tolerance), (97, 101, 5));
            }
            other => unreachable!("Expected NoCommonDivisor, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_tolerance_fails() {
        assert!(matches!(
            find_divisor(1920, 1200, 0),
            Err(MondrianError::NoCommonDivisor { .. })
        ));
    }

    #[test]
    fn test_zero_dimension_is_invalid() {
        assert!(matches!(
            find_divisor(0, 1200, DEFAULT_TOLERANCE),
            Err(MondrianError::InvalidParameter { .. })
        ));
    }

    // Tests the search agrees with a scan of every candidate it may visit
    #[test]
    fn test_divisor_matches_brute_force_scan() {
        for width in (100..=2600).step_by(37) {
            for height in (100..=2600).step_by(53) {
                let expected = visited_candidates(width, height, DEFAULT_TOLERANCE)
                    .into_iter()
                    .find(|&s| s >= 2 && width % s == 0 && height % s == 0);

                match find_divisor(width, height, DEFAULT_TOLERANCE) {
                    Ok(size) => {
                        assert_eq!(width % size, 0, "{width}x{height}");
                        assert_eq!(height % size, 0, "{width}x{height}");
                        assert_eq!(Some(size), expected, "{width}x{height}");
                    }
                    Err(MondrianError::NoCommonDivisor { .. }) => {
                        assert_eq!(expected, None, "{width}x{height}");
                    }
                    Err(other) => unreachable!("Unexpected error {other}"),
                }
            }
        }
    }
}
