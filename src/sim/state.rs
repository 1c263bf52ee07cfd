//! Simulation state and core types
//!
//! Everything a tick reads or writes lives in [`SimState`]; the host owns
//! one instance per session and passes it to [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Rendering-surface size in pixels, supplied by the host every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Point at the given fractions of width and height
    pub fn anchor(&self, fractions: [f32; 2]) -> Vec2 {
        Vec2::new(self.width * fractions[0], self.height * fractions[1])
    }
}

/// The player-controlled astronaut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Astronaut {
    /// Center position (pixels, y grows downward)
    pub pos: Vec2,
    /// Velocity (pixels per tick)
    pub vel: Vec2,
    /// Diameter, used both for drawing and as the clamp extent
    pub size: f32,
    /// Velocity added per tick per held direction
    pub thrust: f32,
    /// Per-tick velocity multiplier
    pub drag: f32,
}

impl Astronaut {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: tuning.astronaut_size,
            thrust: tuning.thrust,
            drag: tuning.drag,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

/// The component box the astronaut must hold still against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Edge length of the box
    pub size: f32,
    /// Consecutive qualifying ticks so far
    pub stability_timer: u32,
    /// Ticks needed to complete the task
    pub required_stability: u32,
    /// Set once, never cleared within a session
    pub complete: bool,
}

impl Target {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.target_size,
            stability_timer: 0,
            required_stability: tuning.required_stability_ticks,
            complete: false,
        }
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// Attachment progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.required_stability == 0 {
            return 1.0;
        }
        (self.stability_timer as f32 / self.required_stability as f32).min(1.0)
    }
}

/// One-shot notifications produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// The astronaut held position at the target long enough
    TaskComplete { tick: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub astronaut: Astronaut,
    pub target: Target,
    /// Both velocity axes must stay strictly below this to count as stable
    pub stability_threshold: f32,
    /// Ticks advanced so far (frozen once the task is complete)
    pub time_ticks: u64,
}

impl SimState {
    /// Start a session laid out for the given bounds
    pub fn new(tuning: &Tuning, bounds: Bounds) -> Self {
        let (astronaut_pos, target_pos) = super::layout::initial_positions(tuning, bounds);
        Self {
            astronaut: Astronaut::new(astronaut_pos, tuning),
            target: Target::new(target_pos, tuning),
            stability_threshold: tuning.stability_threshold,
            time_ticks: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.target.complete
    }
}
