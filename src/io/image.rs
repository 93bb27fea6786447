//! Wall rasterization and PNG export

use crate::io::configuration::{FRAME_COLOR_BASE, FRAME_COLOR_STEP, WALL_BACKGROUND};
use crate::io::error::{LayoutError, Result};
use crate::spatial::{PlacedFrame, PlacedSet, Wall};
use image::{Rgba, RgbaImage};

/// Opaque fill color for the frame at placement `index`
///
/// Channels grow linearly with the placement index and wrap modulo 256, so
/// every frame gets a distinct color derived from its insertion order.
pub const fn frame_color(index: usize) -> Rgba<u8> {
    Rgba([
        (FRAME_COLOR_BASE[0] + index * FRAME_COLOR_STEP[0]) as u8,
        (FRAME_COLOR_BASE[1] + index * FRAME_COLOR_STEP[1]) as u8,
        (FRAME_COLOR_BASE[2] + index * FRAME_COLOR_STEP[2]) as u8,
        255,
    ])
}

// Callers guarantee the frame lies inside the image bounds.
pub(crate) fn paint_frame(img: &mut RgbaImage, frame: &PlacedFrame, color: Rgba<u8>) {
    for x in frame.x..frame.x + frame.size.width {
        for y in frame.y..frame.y + frame.size.height {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Rasterize a layout to a pixel buffer
///
/// White background, each placed frame drawn as an opaque filled rectangle
/// colored by its insertion index.
pub fn render_layout(wall: Wall, placed: &PlacedSet) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(
        wall.width() as u32,
        wall.height() as u32,
        Rgba(WALL_BACKGROUND),
    );

    for (index, frame) in placed.frames().iter().enumerate() {
        paint_frame(&mut img, frame, frame_color(index));
    }

    img
}

/// Render the layout and save it as a PNG
///
/// The layout itself is unaffected by export failures and remains valid for
/// reuse.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_png(wall: Wall, placed: &PlacedSet, output_path: &str) -> Result<()> {
    let img = render_layout(wall, placed);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| LayoutError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
