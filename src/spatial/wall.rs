//! Wall surface bounds and containment testing

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::frames::PlacedFrame;

/// Immutable bounding rectangle frames are packed into
///
/// Dimensions are validated at construction and fixed for the duration of a
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    width: i32,
    height: i32,
}

impl Wall {
    /// Create a wall from pixel dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when either dimension is zero or negative
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 {
            return Err(invalid_parameter("wall_width", &width, &"must be positive"));
        }
        if height <= 0 {
            return Err(invalid_parameter(
                "wall_height",
                &height,
                &"must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Wall width in pixels
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Wall height in pixels
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Total wall area in pixels
    pub const fn area(self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// True when `frame` lies fully within `[0, width] x [0, height]`
    pub const fn contains(self, frame: &PlacedFrame) -> bool {
        frame.x >= 0
            && frame.y >= 0
            && frame.x + frame.size.width <= self.width
            && frame.y + frame.size.height <= self.height
    }
}
