//! Scene composition
//!
//! Turns a [`SimState`] into one triangle list, back to front.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Bounds, SimState};

/// Stroke width of the component box outline
pub const TARGET_OUTLINE_WIDTH: f32 = 3.0;
/// Segments used for the astronaut disc
const ASTRONAUT_SEGMENTS: u32 = 48;
/// Most vertices a frame can hold: backdrop, box, progress bar, outline, disc
pub const MAX_VERTICES: usize = 6 + 6 + 6 + 24 + ASTRONAUT_SEGMENTS as usize * 3;

/// Build the full frame: backdrop, component box with progress, astronaut
pub fn build(state: &SimState, bounds: Bounds) -> Vec<Vertex> {
    let mut vertices = shapes::rect(
        Vec2::ZERO,
        Vec2::new(bounds.width, bounds.height),
        colors::BACKGROUND,
    );

    let target = &state.target;
    let half = Vec2::splat(target.half_size());
    let box_min = target.pos - half;
    let box_max = target.pos + half;

    let fill = if target.complete {
        colors::TARGET_COMPLETE
    } else {
        colors::TARGET
    };
    vertices.extend(shapes::rect(box_min, box_max, fill));

    // Progress fills the box from the bottom up
    if target.stability_timer > 0 && !target.complete {
        let height = target.progress() * target.size;
        vertices.extend(shapes::rect(
            Vec2::new(box_min.x, box_max.y - height),
            box_max,
            colors::PROGRESS,
        ));
    }

    vertices.extend(shapes::rect_outline(
        box_min,
        box_max,
        TARGET_OUTLINE_WIDTH,
        colors::TARGET_OUTLINE,
    ));

    let astronaut = &state.astronaut;
    vertices.extend(shapes::circle(
        astronaut.pos,
        astronaut.half_size(),
        colors::ASTRONAUT,
        ASTRONAUT_SEGMENTS,
    ));

    vertices
}
