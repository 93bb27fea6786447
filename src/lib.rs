//! Randomized frame layout generation for rectangular wall surfaces
//!
//! The engine grows a cluster of non-overlapping frames outward from a random
//! seed placement, drawing candidate positions around already-placed frames,
//! until a target fraction of the wall area is covered. The renderer consumes
//! the resulting placement list and rasterizes it to an image.

#![forbid(unsafe_code)]

/// Core placement algorithm including candidate generation and collision testing
pub mod algorithm;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Wall and frame geometry primitives
pub mod spatial;

pub use io::error::{LayoutError, Result};
