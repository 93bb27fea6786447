//! Tests for the growth-loop executor

use framepack::algorithm::engine::{FramePlacer, LayoutConfig};
use framepack::io::configuration::DEFAULT_FRAME_CATALOG;
use framepack::spatial::{FrameSize, Wall};

// Tests the placer seeds exactly one frame before the first pass
// Verified by checking the placed count at construction
#[test]
fn test_construction_places_only_the_seed() {
    let wall = Wall::new(230, 140).unwrap();
    let placer = FramePlacer::new(
        wall,
        DEFAULT_FRAME_CATALOG.to_vec(),
        LayoutConfig::default(),
        42,
    )
    .unwrap();

    assert_eq!(placer.placed().len(), 1);
    assert_eq!(placer.passes(), 0);
}

// Tests the required area follows the truncating product of area and target
// Verified against a hand-computed value
#[test]
fn test_required_area_truncates() {
    let wall = Wall::new(11, 16).unwrap();
    let catalog = vec![FrameSize {
        width: 10,
        height: 15,
    }];
    let config = LayoutConfig {
        target_fraction: 0.9,
        ..LayoutConfig::default()
    };
    let placer = FramePlacer::new(wall, catalog, config, 1).unwrap();

    // 11 * 16 * 0.9 = 158.4
    assert_eq!(placer.required_area(), 158);
}

// Tests passes keep executing until the coverage target is met
// Verified by lowering the target below the seed frame's area
#[test]
fn test_execute_pass_stops_at_target() {
    let wall = Wall::new(230, 140).unwrap();
    let config = LayoutConfig {
        target_fraction: 0.001,
        ..LayoutConfig::default()
    };
    let mut placer =
        FramePlacer::new(wall, DEFAULT_FRAME_CATALOG.to_vec(), config, 42).unwrap();

    // 10x15 seed already covers the 32-pixel requirement
    assert!(!placer.execute_pass().unwrap());
    assert_eq!(placer.placed().len(), 1);
}

// Tests coverage reports the covered fraction of the wall
// Verified against the seed frame's area
#[test]
fn test_coverage_tracks_placed_area() {
    let wall = Wall::new(100, 100).unwrap();
    let catalog = vec![FrameSize {
        width: 10,
        height: 15,
    }];
    let placer = FramePlacer::new(wall, catalog, LayoutConfig::default(), 3).unwrap();

    let expected = 150.0 / 10_000.0;
    assert!((placer.coverage() - expected).abs() < f64::EPSILON);
}
