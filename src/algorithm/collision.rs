//! Margin-inflated collision testing between placed frames

use crate::spatial::{PlacedFrame, PlacedSet};

/// True when `a` inflated by `margin` strictly intersects `b`
///
/// Strict inequalities on all four half-planes: rectangles whose inflated
/// extents merely touch count as intersecting. The expression is symmetric
/// in `a` and `b`.
pub const fn overlaps(a: &PlacedFrame, b: &PlacedFrame, margin: i32) -> bool {
    a.x < b.x + b.size.width + margin
        && a.x + a.size.width + margin > b.x
        && a.y < b.y + b.size.height + margin
        && a.y + a.size.height + margin > b.y
}

/// True when `candidate` collides with any member of `placed` under `margin`
///
/// Pure scan over the placement set in insertion order; no side effects.
pub fn collides(candidate: &PlacedFrame, placed: &PlacedSet, margin: i32) -> bool {
    placed
        .frames()
        .iter()
        .any(|frame| overlaps(candidate, frame, margin))
}
