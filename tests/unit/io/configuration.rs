//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use framepack::io::configuration::{
        CANDIDATES_PER_ANCHOR, DEFAULT_FRAME_CATALOG, DEFAULT_MARGIN_RANGE,
        DEFAULT_WALL_HEIGHT, DEFAULT_WALL_WIDTH, TARGET_COVERAGE_FRACTION,
    };

    // Tests the built-in catalog fits the default wall
    // Verified by growing one entry past the wall
    #[test]
    fn test_catalog_fits_default_wall() {
        for size in DEFAULT_FRAME_CATALOG {
            assert!(size.width < DEFAULT_WALL_WIDTH);
            assert!(size.height < DEFAULT_WALL_HEIGHT);
        }
    }

    // Tests the margin range and coverage target are well formed
    // Verified against the engine's validation bounds
    #[test]
    fn test_defaults_are_valid() {
        assert!(DEFAULT_MARGIN_RANGE[0] >= 0);
        assert!(DEFAULT_MARGIN_RANGE[0] < DEFAULT_MARGIN_RANGE[1]);
        assert!(TARGET_COVERAGE_FRACTION > 0.0);
        assert!(TARGET_COVERAGE_FRACTION <= 1.0);
        assert_eq!(CANDIDATES_PER_ANCHOR, 12);
        assert_eq!(DEFAULT_FRAME_CATALOG.len(), 6);
    }
}
