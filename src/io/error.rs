//! Error types for layout and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// Layout parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A catalog frame is too large for the wall
    ///
    /// Every catalog entry must be strictly smaller than the wall on both
    /// axes, otherwise the seed placement range is empty.
    FrameExceedsWall {
        /// Width of the offending frame
        frame_width: i32,
        /// Height of the offending frame
        frame_height: i32,
        /// Wall width the frame was checked against
        wall_width: i32,
        /// Wall height the frame was checked against
        wall_height: i32,
    },

    /// The growth loop stalled before reaching the coverage target
    ///
    /// Raised after the configured number of consecutive passes place no
    /// frame. The counts report how far the layout got.
    LayoutIncomplete {
        /// Area covered when the run gave up
        covered_area: i64,
        /// Area the configuration demanded
        required_area: i64,
        /// Consecutive unproductive passes observed
        stalled_passes: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FrameExceedsWall {
                frame_width,
                frame_height,
                wall_width,
                wall_height,
            } => {
                write!(
                    f,
                    "Frame {frame_width}x{frame_height} does not fit a \
                     {wall_width}x{wall_height} wall: frames must be strictly \
                     smaller than the wall on both axes"
                )
            }
            Self::LayoutIncomplete {
                covered_area,
                required_area,
                stalled_passes,
            } => {
                write!(
                    f,
                    "Layout stalled after {stalled_passes} unproductive passes: \
                     covered {covered_area} of {required_area} required pixels"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
