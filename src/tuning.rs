//! Data-driven game balance
//!
//! Every world and physics constant lives here so tests can reshape the
//! playfield without touching simulation code. Values are validated once at
//! game-state construction; a gap that cannot fit the sky is a configuration
//! bug, not something to clamp at spawn time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tuning configurations
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("playfield {width}x{height} with ground {ground} leaves no sky")]
    NoSky { width: f32, height: f32, ground: f32 },
    #[error(
        "gap of {gap} cannot fit a {sky} sky with {min_top} margin above and below"
    )]
    GapDoesNotFit { gap: f32, sky: f32, min_top: f32 },
    #[error("obstacle width must be positive, got {0}")]
    BadObstacleWidth(f32),
    #[error("spawn interval must be positive, got {0} ms")]
    BadSpawnInterval(f32),
}

/// World and physics constants for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width in pixels
    pub playfield_width: f32,
    /// Playfield height in pixels, ground included
    pub playfield_height: f32,
    /// Height of the ground strip at the bottom
    pub ground_height: f32,
    /// Downward acceleration per step
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub flap_impulse: f32,
    /// Vertical size of the passable gap
    pub gap_height: f32,
    /// Leftward obstacle speed per reference frame
    pub obstacle_speed: f32,
    /// Horizontal size of every obstacle
    pub obstacle_width: f32,
    /// Real time between spawns
    pub spawn_interval_ms: f32,
    /// Minimum distance from the sky edges to the gap
    pub min_gap_top: f32,
    /// How far past the right edge obstacles spawn
    pub spawn_lead: f32,
    /// How far past the left edge obstacles are retired
    pub retire_margin: f32,
    /// Fixed horizontal craft position
    pub craft_x: f32,
    /// Craft collision radius
    pub craft_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: 480.0,
            playfield_height: 640.0,
            ground_height: 60.0,
            gravity: 0.5,
            flap_impulse: -8.5,
            gap_height: 140.0,
            obstacle_speed: 2.6,
            obstacle_width: 60.0,
            spawn_interval_ms: 1500.0,
            min_gap_top: 60.0,
            spawn_lead: 40.0,
            retire_margin: 10.0,
            craft_x: 100.0,
            craft_radius: 16.0,
        }
    }
}

impl Tuning {
    /// Height of the playable sky (playfield minus ground strip)
    pub fn sky_height(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Largest legal `gap_top` for a spawned obstacle
    pub fn max_gap_top(&self) -> f32 {
        self.sky_height() - self.gap_height - self.min_gap_top
    }

    /// Check the spawn-range contract and basic dimensions.
    ///
    /// `sky - gap - 2 * min_top` must be non-negative or the uniform
    /// `gap_top` range is degenerate.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.sky_height() <= 0.0 {
            return Err(TuningError::NoSky {
                width: self.playfield_width,
                height: self.playfield_height,
                ground: self.ground_height,
            });
        }
        if self.obstacle_width <= 0.0 {
            return Err(TuningError::BadObstacleWidth(self.obstacle_width));
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(TuningError::BadSpawnInterval(self.spawn_interval_ms));
        }
        if self.max_gap_top() < self.min_gap_top {
            return Err(TuningError::GapDoesNotFit {
                gap: self.gap_height,
                sky: self.sky_height(),
                min_top: self.min_gap_top,
            });
        }
        Ok(())
    }
}
