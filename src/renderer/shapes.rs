//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in canvas pixel space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle outline of the given line width,
/// centered on the rectangle edge like a canvas stroke
pub fn rect_outline(min: Vec2, max: Vec2, line_width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let h = line_width / 2.0;
    let mut vertices = Vec::with_capacity(24);

    // Top and bottom span the full width including corners
    vertices.extend(rect(
        Vec2::new(min.x - h, min.y - h),
        Vec2::new(max.x + h, min.y + h),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(min.x - h, max.y - h),
        Vec2::new(max.x + h, max.y + h),
        color,
    ));
    // Left and right fill between them
    vertices.extend(rect(
        Vec2::new(min.x - h, min.y + h),
        Vec2::new(min.x + h, max.y - h),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(max.x - h, min.y + h),
        Vec2::new(max.x + h, max.y - h),
        color,
    ));

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
