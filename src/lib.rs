//! NBL Microgravity Simulator - cupola parallax view and station-keeping mini-game
//!
//! Core modules:
//! - `sim`: Pure simulation (thrust, drag, clamping, task completion)
//! - `tuning`: Data-driven simulator constants
//! - `input`: Held-key tracking and direction mapping
//! - `hud`: Task label and completion message lifecycle
//! - `parallax`: Pointer-driven video transform for the cupola view
//! - `renderer`: WebGPU rendering pipeline

pub mod hud;
pub mod input;
pub mod parallax;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::StatusBanner;
pub use input::HeldKeys;
pub use tuning::{Tuning, TuningError};

/// Host loop configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Fixed-timestep accumulator: turns variable frame deltas into whole ticks
#[derive(Debug, Clone, Default)]
pub struct TickClock {
    accumulator: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        use consts::*;

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        ticks
    }
}
