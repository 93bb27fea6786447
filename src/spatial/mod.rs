//! Wall and frame geometry
//!
//! This module contains the geometry shared by the engine and renderer:
//! - Wall bounds and containment testing
//! - Frame catalog entries and placed-frame bookkeeping

/// Frame catalog entries, placed frames, and the placement set
pub mod frames;
/// Wall surface bounds and containment testing
pub mod wall;

pub use frames::{FrameSize, PlacedFrame, PlacedSet};
pub use wall::Wall;
