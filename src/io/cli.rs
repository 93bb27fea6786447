//! Command-line interface for generating and rendering wall layouts

use crate::algorithm::engine::{FramePlacer, LayoutConfig};
use crate::io::configuration::{
    DEFAULT_MARGIN_RANGE, DEFAULT_MAX_STALLED_PASSES, DEFAULT_OUTPUT_PATH, DEFAULT_WALL_HEIGHT,
    DEFAULT_WALL_WIDTH, GIF_FRAME_DELAY_MS, TARGET_COVERAGE_FRACTION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_layout_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_layout_gif;
use crate::spatial::{FrameSize, Wall};
use clap::Parser;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "framepack")]
#[command(
    author,
    version,
    about = "Pack non-overlapping frames onto a wall and render the result"
)]
/// Command-line arguments for the wall layout tool
pub struct Cli {
    /// Output PNG path for the rendered wall
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Random seed for reproducible layouts (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Wall width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WALL_WIDTH)]
    pub width: i32,

    /// Wall height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_WALL_HEIGHT)]
    pub height: i32,

    /// Fraction of wall area to cover before stopping
    #[arg(short, long, default_value_t = TARGET_COVERAGE_FRACTION)]
    pub coverage: f64,

    /// Smallest margin drawn between frames
    #[arg(long, default_value_t = DEFAULT_MARGIN_RANGE[0])]
    pub margin_min: i32,

    /// Upper bound (exclusive) for drawn margins
    #[arg(long, default_value_t = DEFAULT_MARGIN_RANGE[1])]
    pub margin_max: i32,

    /// Frame size given as width by height, e.g. 10x15 (repeatable; built-in
    /// catalog when omitted)
    #[arg(short, long, value_name = "WxH", value_parser = parse_frame_size)]
    pub frame: Vec<FrameSize>,

    /// Consecutive unproductive passes tolerated before giving up
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_STALLED_PASSES)]
    pub max_stalled_passes: usize,

    /// Also export an animated GIF of the placement order
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `WIDTHxHEIGHT` frame size argument
///
/// # Errors
///
/// Returns a description of the expected format when parsing fails
pub fn parse_frame_size(value: &str) -> std::result::Result<FrameSize, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("'{value}' is not of the form WIDTHxHEIGHT"))?;
    let width: i32 = width
        .trim()
        .parse()
        .map_err(|error| format!("'{value}': invalid width: {error}"))?;
    let height: i32 = height
        .trim()
        .parse()
        .map_err(|error| format!("'{value}': invalid height: {error}"))?;

    if width <= 0 || height <= 0 {
        return Err(format!("'{value}': dimensions must be positive"));
    }

    Ok(FrameSize { width, height })
}

/// Orchestrates a layout run from CLI arguments through file export
pub struct LayoutRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LayoutRunner {
    /// Create a runner honoring the quiet flag
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the layout and export the requested artifacts
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, placement, or export
    /// fails
    pub fn run(&mut self) -> Result<()> {
        let wall = Wall::new(self.cli.width, self.cli.height)?;
        let catalog = self.catalog();
        let config = LayoutConfig {
            margin_range: [self.cli.margin_min, self.cli.margin_max],
            target_fraction: self.cli.coverage,
            max_stalled_passes: self.cli.max_stalled_passes,
        };
        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());

        let mut placer = FramePlacer::new(wall, catalog, config, seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(placer.required_area());
        }

        loop {
            if let Some(ref pm) = self.progress_manager {
                pm.update(placer.placed().total_area(), placer.placed().len());
            }

            if !placer.execute_pass()? {
                break;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.update(placer.placed().total_area(), placer.placed().len());
            pm.finish(placer.placed().len());
        }

        let layout = placer.into_layout();

        let output_path = self.cli.output.to_str().ok_or_else(|| {
            invalid_parameter(
                "output",
                &self.cli.output.display(),
                &"path is not valid UTF-8",
            )
        })?;
        export_layout_png(wall, &layout, output_path)?;

        if self.cli.visualize {
            let viz_path = get_sequence_path(&self.cli.output);
            let viz_path = viz_path.to_str().ok_or_else(|| {
                invalid_parameter(
                    "output",
                    &self.cli.output.display(),
                    &"derived GIF path is not valid UTF-8",
                )
            })?;
            export_layout_gif(wall, &layout, viz_path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    fn catalog(&self) -> Vec<FrameSize> {
        if self.cli.frame.is_empty() {
            crate::io::configuration::DEFAULT_FRAME_CATALOG.to_vec()
        } else {
            self.cli.frame.clone()
        }
    }
}

fn get_sequence_path(output_path: &Path) -> PathBuf {
    let stem = output_path.file_stem().unwrap_or_default();
    let sequence_name = format!("{}_sequence.gif", stem.to_string_lossy());

    if let Some(parent) = output_path.parent() {
        parent.join(sequence_name)
    } else {
        PathBuf::from(sequence_name)
    }
}
