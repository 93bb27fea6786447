/// Command-line interface and run orchestration
pub mod cli;
/// Layout constants and runtime configuration defaults
pub mod configuration;
/// Error types for layout and export operations
pub mod error;
/// Wall rasterization and PNG export
pub mod image;
/// Coverage progress reporting
pub mod progress;
/// Animated GIF export of the placement sequence
pub mod visualization;
