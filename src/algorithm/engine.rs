//! Growth-loop executor placing frames around previously placed anchors

use crate::algorithm::candidates::candidate_positions;
use crate::algorithm::collision::collides;
use crate::io::configuration::{
    DEFAULT_MARGIN_RANGE, DEFAULT_MAX_STALLED_PASSES, TARGET_COVERAGE_FRACTION,
};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::spatial::{FrameSize, PlacedFrame, PlacedSet, Wall};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Knobs controlling a layout run
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig {
    /// Half-open `[min, max)` pixel range margins are drawn from per
    /// placement attempt
    pub margin_range: [i32; 2],
    /// Fraction of wall area that must be covered before the run stops
    pub target_fraction: f64,
    /// Consecutive unproductive passes tolerated before reporting failure
    pub max_stalled_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_range: DEFAULT_MARGIN_RANGE,
            target_fraction: TARGET_COVERAGE_FRACTION,
            max_stalled_passes: DEFAULT_MAX_STALLED_PASSES,
        }
    }
}

/// Stateful layout executor
///
/// Owns the random source and the growing placement set, the only mutable
/// state of a run. Construction validates the configuration and performs
/// the seed placement; callers then drive [`Self::execute_pass`] until it
/// reports completion.
///
/// Randomness is consumed in a fixed order relative to control flow: two
/// draws for the seed position, then per pass one catalog shuffle, per
/// catalog entry one margin draw, and per anchor attempted one shuffle of
/// its twelve candidates. An identical seed and configuration therefore
/// reproduce the placement sequence exactly.
pub struct FramePlacer {
    wall: Wall,
    catalog: Vec<FrameSize>,
    config: LayoutConfig,
    rng: StdRng,
    placed: PlacedSet,
    required_area: i64,
    stalled_passes: usize,
    passes: usize,
}

impl FramePlacer {
    /// Create a placer and perform the seed placement
    ///
    /// The seed frame is the first catalog entry (a fixed choice) at a
    /// uniformly random position fully inside the wall.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` or `FrameExceedsWall` when the
    /// configuration cannot produce a valid layout.
    pub fn new(
        wall: Wall,
        catalog: Vec<FrameSize>,
        config: LayoutConfig,
        seed: u64,
    ) -> Result<Self> {
        validate(wall, &catalog, &config)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let seed_size = catalog.first().copied().ok_or_else(|| {
            invalid_parameter("catalog", &"[]", &"at least one frame size is required")
        })?;
        let x = rng.random_range(0..wall.width() - seed_size.width);
        let y = rng.random_range(0..wall.height() - seed_size.height);

        let mut placed = PlacedSet::new();
        placed.push(
            PlacedFrame {
                size: seed_size,
                x,
                y,
            },
            0,
        );

        let required_area = (wall.area() as f64 * config.target_fraction) as i64;

        Ok(Self {
            wall,
            catalog,
            config,
            rng,
            placed,
            required_area,
            stalled_passes: 0,
            passes: 0,
        })
    }

    /// Run one growth pass over the re-shuffled catalog
    ///
    /// Returns `Ok(true)` while further passes are needed and `Ok(false)`
    /// once the covered area has reached the target. A catalog entry that
    /// finds no valid position against any anchor is skipped for the pass
    /// and retried on the next one.
    ///
    /// # Errors
    ///
    /// Returns `LayoutIncomplete` once the configured number of consecutive
    /// passes place nothing.
    pub fn execute_pass(&mut self) -> Result<bool> {
        if self.placed.total_area() >= self.required_area {
            return Ok(false);
        }

        self.passes += 1;
        self.catalog.shuffle(&mut self.rng);

        let mut placed_this_pass = 0usize;
        for index in 0..self.catalog.len() {
            if self.placed.total_area() >= self.required_area {
                break;
            }
            let Some(size) = self.catalog.get(index).copied() else {
                break;
            };
            let [min, max] = self.config.margin_range;
            let margin = self.rng.random_range(min..max);
            if self.try_place(size, margin) {
                placed_this_pass += 1;
            }
        }

        if self.placed.total_area() >= self.required_area {
            return Ok(false);
        }

        if placed_this_pass == 0 {
            self.stalled_passes += 1;
            if self.stalled_passes >= self.config.max_stalled_passes {
                return Err(LayoutError::LayoutIncomplete {
                    covered_area: self.placed.total_area(),
                    required_area: self.required_area,
                    stalled_passes: self.stalled_passes,
                });
            }
        } else {
            self.stalled_passes = 0;
        }

        Ok(true)
    }

    // First accepted candidate wins; anchors are scanned in insertion order.
    fn try_place(&mut self, size: FrameSize, margin: i32) -> bool {
        for anchor_index in 0..self.placed.len() {
            let Some(anchor) = self.placed.frames().get(anchor_index).copied() else {
                break;
            };
            let mut candidates = candidate_positions(size, &anchor, margin);
            candidates.shuffle(&mut self.rng);
            for candidate in candidates {
                if self.wall.contains(&candidate) && !collides(&candidate, &self.placed, margin) {
                    self.placed.push(candidate, margin);
                    return true;
                }
            }
        }
        false
    }

    /// Wall being packed
    pub const fn wall(&self) -> Wall {
        self.wall
    }

    /// Frames placed so far, in placement order
    pub const fn placed(&self) -> &PlacedSet {
        &self.placed
    }

    /// Covered area in pixels at which the run stops
    pub const fn required_area(&self) -> i64 {
        self.required_area
    }

    /// Fraction of the wall covered so far
    pub const fn coverage(&self) -> f64 {
        self.placed.total_area() as f64 / self.wall.area() as f64
    }

    /// Number of growth passes executed
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Consume the placer and return the accumulated layout
    pub fn into_layout(self) -> PlacedSet {
        self.placed
    }
}

/// Place frames on `wall` until the configured coverage target is reached
///
/// Convenience wrapper driving a [`FramePlacer`] to completion with a fixed
/// seed.
///
/// # Errors
///
/// Returns a configuration error before any placement occurs, or
/// `LayoutIncomplete` when the growth loop stalls.
pub fn place_frames(
    wall: Wall,
    catalog: &[FrameSize],
    config: LayoutConfig,
    seed: u64,
) -> Result<PlacedSet> {
    let mut placer = FramePlacer::new(wall, catalog.to_vec(), config, seed)?;
    while placer.execute_pass()? {}
    Ok(placer.into_layout())
}

// Fail fast on configuration that would make the random ranges invalid or
// the target unreachable by construction.
fn validate(wall: Wall, catalog: &[FrameSize], config: &LayoutConfig) -> Result<()> {
    if catalog.is_empty() {
        return Err(invalid_parameter(
            "catalog",
            &"[]",
            &"at least one frame size is required",
        ));
    }
    for size in catalog {
        if size.width <= 0 || size.height <= 0 {
            return Err(invalid_parameter(
                "catalog",
                &format!("{}x{}", size.width, size.height),
                &"frame dimensions must be positive",
            ));
        }
        if size.width >= wall.width() || size.height >= wall.height() {
            return Err(LayoutError::FrameExceedsWall {
                frame_width: size.width,
                frame_height: size.height,
                wall_width: wall.width(),
                wall_height: wall.height(),
            });
        }
    }

    let [min, max] = config.margin_range;
    if min < 0 {
        return Err(invalid_parameter(
            "margin_range",
            &min,
            &"minimum margin must be non-negative",
        ));
    }
    if min >= max {
        return Err(invalid_parameter(
            "margin_range",
            &format!("[{min}, {max})"),
            &"minimum must be below maximum",
        ));
    }

    if config.target_fraction <= 0.0 {
        return Err(invalid_parameter(
            "target_fraction",
            &config.target_fraction,
            &"must be positive",
        ));
    }
    if config.target_fraction > 1.0 {
        return Err(invalid_parameter(
            "target_fraction",
            &config.target_fraction,
            &"cannot exceed the whole wall",
        ));
    }

    if config.max_stalled_passes == 0 {
        return Err(invalid_parameter(
            "max_stalled_passes",
            &config.max_stalled_passes,
            &"at least one pass must be allowed",
        ));
    }

    Ok(())
}
