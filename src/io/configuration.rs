//! Layout constants and runtime configuration defaults

use crate::spatial::FrameSize;

/// Default wall width in pixels
pub const DEFAULT_WALL_WIDTH: i32 = 230;
/// Default wall height in pixels
pub const DEFAULT_WALL_HEIGHT: i32 = 140;

/// Fraction of wall area that must be covered before placement stops
pub const TARGET_COVERAGE_FRACTION: f64 = 0.54;

/// Half-open `[min, max)` pixel range margins are drawn from
pub const DEFAULT_MARGIN_RANGE: [i32; 2] = [2, 5];

/// Built-in frame catalog used when no sizes are supplied
///
/// The first entry doubles as the seed frame, so reordering changes layouts.
pub const DEFAULT_FRAME_CATALOG: [FrameSize; 6] = [
    FrameSize {
        width: 10,
        height: 15,
    },
    FrameSize {
        width: 15,
        height: 10,
    },
    FrameSize {
        width: 13,
        height: 18,
    },
    FrameSize {
        width: 18,
        height: 13,
    },
    FrameSize {
        width: 16,
        height: 9,
    },
    FrameSize { width: 9, height: 9 },
];

/// Candidate positions generated around each anchor frame
pub const CANDIDATES_PER_ANCHOR: usize = 12;

// Keeps the hardened engine total; productive passes reset the counter
/// Consecutive unproductive passes tolerated before the engine gives up
pub const DEFAULT_MAX_STALLED_PASSES: usize = 64;

// Output settings
/// Default output path for the rendered wall
pub const DEFAULT_OUTPUT_PATH: &str = "wall_visualization.png";
/// RGBA background color of the rendered wall
pub const WALL_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// RGB channels of the frame color at placement index zero
pub const FRAME_COLOR_BASE: [usize; 3] = [100, 50, 150];
/// Per-index RGB channel increments (channels wrap modulo 256)
pub const FRAME_COLOR_STEP: [usize; 3] = [20, 15, 10];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Width of the coverage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
