/// Candidate position generation around anchor frames
pub mod candidates;
/// Margin-inflated collision testing
pub mod collision;
/// Growth-loop executor and layout configuration
pub mod engine;

pub use engine::{FramePlacer, LayoutConfig, place_frames};
