//! Placement of the astronaut and the target inside the canvas
//!
//! Both positions are fractions of the current bounds, so a resize moves
//! them with the canvas.

use glam::Vec2;

use super::proximity::clamp_to_bounds;
use super::state::{Bounds, SimState};
use crate::tuning::Tuning;

/// Astronaut start and target positions for the given bounds.
///
/// The astronaut is clamped inside the bounds like every tick does, so the
/// default right-edge anchor lands one half-size in from the edge.
pub fn initial_positions(tuning: &Tuning, bounds: Bounds) -> (Vec2, Vec2) {
    (
        clamp_to_bounds(
            bounds.anchor(tuning.astronaut_anchor),
            tuning.astronaut_size / 2.0,
            bounds,
        ),
        bounds.anchor(tuning.target_anchor),
    )
}

impl SimState {
    /// Re-place astronaut and target after the canvas changed size.
    ///
    /// Velocity, stability timer and completion are kept.
    pub fn relayout(&mut self, tuning: &Tuning, bounds: Bounds) {
        let (astronaut_pos, target_pos) = initial_positions(tuning, bounds);
        self.astronaut.pos = astronaut_pos;
        self.target.pos = target_pos;
        log::debug!(
            "Relayout {}x{}: astronaut {:?}, target {:?}",
            bounds.width,
            bounds.height,
            astronaut_pos,
            target_pos
        );
    }
}
