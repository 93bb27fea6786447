//! Animated GIF export of the placement sequence

use crate::io::configuration::{VIEWER_MIN_FRAME_DELAY_MS, WALL_BACKGROUND};
use crate::io::error::{LayoutError, Result};
use crate::io::image::{frame_color, paint_frame};
use crate::spatial::{PlacedSet, Wall};
use image::{Delay, Frame, Rgba, RgbaImage};

/// Export the placement sequence as an animated GIF
///
/// Each animation frame shows the wall after one more placement, in
/// placement order, starting from the empty wall. When the requested delay
/// undercuts what viewers reliably support, intermediate placements are
/// skipped to preserve the apparent speed, and the final state is held
/// longer for visibility.
///
/// # Errors
///
/// Returns an error if:
/// - The placement set is empty
/// - File system operations fail
/// - GIF encoding fails
pub fn export_layout_gif(
    wall: Wall,
    placed: &PlacedSet,
    output_path: &str,
    frame_delay_ms: u32,
) -> Result<()> {
    if placed.is_empty() {
        return Err(LayoutError::InvalidParameter {
            parameter: "placed",
            value: "empty".to_string(),
            reason: "no placements to visualize".to_string(),
        });
    }

    let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
    } else {
        1
    };

    let mut canvas = RgbaImage::from_pixel(
        wall.width() as u32,
        wall.height() as u32,
        Rgba(WALL_BACKGROUND),
    );

    let mut frames = Vec::new();
    frames.push(gif_frame(&canvas, effective_delay_ms));

    for (index, placed_frame) in placed.frames().iter().enumerate() {
        paint_frame(&mut canvas, placed_frame, frame_color(index));

        if (index + 1) % skip_factor == 0 {
            frames.push(gif_frame(&canvas, effective_delay_ms));
        }
    }

    if placed.len() % skip_factor != 0 {
        frames.push(gif_frame(&canvas, effective_delay_ms));
    }

    // Final frame displays longer for better visibility
    let hold_delay_ms = effective_delay_ms * 25;
    frames.push(Frame::from_parts(
        canvas,
        0,
        0,
        Delay::from_numer_denom_ms(hold_delay_ms, 1),
    ));

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| LayoutError::FileSystem {
        path: output_path.into(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}

fn gif_frame(canvas: &RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(
        canvas.clone(),
        0,
        0,
        Delay::from_numer_denom_ms(delay_ms, 1),
    )
}
