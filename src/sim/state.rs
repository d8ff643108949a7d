//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    Ready,
    /// Active gameplay
    Running,
    /// Run ended; everything frozen until a reset
    GameOver,
}

/// Abstract input commands routed through the state machine.
///
/// The shell maps raw device events to these; anything it does not
/// recognize never reaches the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start from Ready, flap while Running, reset from GameOver
    Activate,
    /// Unconditional reset to Ready
    Restart,
    /// Ask the host loop to stop
    Quit,
}

/// The controllable craft. Horizontal position and radius are fixed tuning
/// values; only the vertical axis is simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    pub y: f32,
    pub vy: f32,
}

/// A scrolling obstacle: two building slabs separated by a passable gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    /// Distance from the playfield top to the gap start
    pub gap_top: f32,
    /// Vertical size of the gap; identical for every obstacle in a run
    pub gap_height: f32,
    /// Set once the craft has passed this obstacle's center
    pub scored: bool,
}

impl Obstacle {
    /// Slab from the playfield top down to the gap
    pub fn upper_rect(&self, width: f32) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            w: width,
            h: self.gap_top,
        }
    }

    /// Slab from the gap down to the ground line
    pub fn lower_rect(&self, width: f32, sky_height: f32) -> Rect {
        let top = self.gap_top + self.gap_height;
        Rect {
            x: self.x,
            y: top,
            w: width,
            h: sky_height - top,
        }
    }

    /// Horizontal center; crossing the craft's x scores the obstacle
    pub fn center_x(&self, width: f32) -> f32 {
        self.x + width / 2.0
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// World constants, validated at construction
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player craft
    pub craft: Craft,
    /// Live obstacles in spawn order; identical speed keeps them x-ordered
    /// for their whole lifetime
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed this run
    pub score: u32,
    /// Best score this session; never reset
    pub best: u32,
    /// Real-time accumulator driving the spawn interval
    pub(crate) spawn_clock_ms: f32,
    /// Gap randomness
    pub(crate) rng: Pcg32,
    /// Raised by [`Command::Quit`]; the shell stops its loop on it
    pub quit_requested: bool,
}

impl GameState {
    /// Create a fresh Ready-phase state with the given seed.
    ///
    /// Rejects tuning whose spawn range is degenerate rather than letting a
    /// bad range reach the spawn path.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let craft = Craft {
            y: tuning.sky_height() / 2.0,
            vy: 0.0,
        };
        Ok(Self {
            tuning,
            seed,
            phase: GamePhase::Ready,
            craft,
            obstacles: Vec::new(),
            score: 0,
            best: 0,
            spawn_clock_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            quit_requested: false,
        })
    }

    /// Route an abstract command to the state machine.
    ///
    /// Activate is context-sensitive: it starts a run from Ready, flaps
    /// while Running, and behaves as a restart from GameOver.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Activate => match self.phase {
                GamePhase::Ready => self.start(),
                GamePhase::Running => self.craft.vy = self.tuning.flap_impulse,
                GamePhase::GameOver => self.reset(),
            },
            Command::Restart => self.reset(),
            Command::Quit => self.quit_requested = true,
        }
    }

    /// Begin a run: fresh craft, empty field, score cleared. `best` survives.
    fn start(&mut self) {
        self.clear_run();
        self.phase = GamePhase::Running;
    }

    /// Return to the title screen. `best` survives.
    pub fn reset(&mut self) {
        self.clear_run();
        self.phase = GamePhase::Ready;
    }

    fn clear_run(&mut self) {
        self.score = 0;
        self.craft = Craft {
            y: self.tuning.sky_height() / 2.0,
            vy: 0.0,
        };
        self.obstacles.clear();
        self.spawn_clock_ms = 0.0;
    }
}
