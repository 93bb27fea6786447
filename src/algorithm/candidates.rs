//! Candidate position generation around anchor frames

use crate::io::configuration::CANDIDATES_PER_ANCHOR;
use crate::spatial::{FrameSize, PlacedFrame};

/// Generate the fixed ring of candidate positions for `size` around `anchor`
///
/// Twelve candidates per anchor: four edge-adjacent positions separated by
/// `margin`, four corner-adjacent positions with `margin` applied on one or
/// both axes, and four zero-margin diagonal contacts. The candidate's own
/// width and height drive all offset arithmetic; dimensions are never
/// swapped. Construction order is fixed, callers shuffle before probing.
pub const fn candidate_positions(
    size: FrameSize,
    anchor: &PlacedFrame,
    margin: i32,
) -> [PlacedFrame; CANDIDATES_PER_ANCHOR] {
    [
        // left
        PlacedFrame {
            size,
            x: anchor.x - size.width - margin,
            y: anchor.y,
        },
        // right
        PlacedFrame {
            size,
            x: anchor.x + anchor.size.width + margin,
            y: anchor.y,
        },
        // above
        PlacedFrame {
            size,
            x: anchor.x,
            y: anchor.y - size.height - margin,
        },
        // below
        PlacedFrame {
            size,
            x: anchor.x,
            y: anchor.y + anchor.size.height + margin,
        },
        // top-left
        PlacedFrame {
            size,
            x: anchor.x - size.width - margin,
            y: anchor.y - margin,
        },
        // top-right
        PlacedFrame {
            size,
            x: anchor.x + anchor.size.width + margin,
            y: anchor.y - margin,
        },
        // bottom-left
        PlacedFrame {
            size,
            x: anchor.x - size.width - margin,
            y: anchor.y + anchor.size.height + margin,
        },
        // bottom-right
        PlacedFrame {
            size,
            x: anchor.x + anchor.size.width + margin,
            y: anchor.y + anchor.size.height + margin,
        },
        // top-left diagonal contact
        PlacedFrame {
            size,
            x: anchor.x - size.width,
            y: anchor.y - size.height,
        },
        // top-right diagonal contact
        PlacedFrame {
            size,
            x: anchor.x + anchor.size.width,
            y: anchor.y - size.height,
        },
        // bottom-left diagonal contact
        PlacedFrame {
            size,
            x: anchor.x - size.width,
            y: anchor.y + anchor.size.height,
        },
        // bottom-right diagonal contact
        PlacedFrame {
            size,
            x: anchor.x + anchor.size.width,
            y: anchor.y + anchor.size.height,
        },
    ]
}
