//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements (sRGB, straight alpha)
pub mod colors {
    /// Pool backdrop when no background image is drawn (#00204a)
    pub const BACKGROUND: [f32; 4] = [0.0, 0.125, 0.29, 1.0];
    /// Component box before the task is done (#CC0000)
    pub const TARGET: [f32; 4] = [0.8, 0.0, 0.0, 1.0];
    pub const TARGET_COMPLETE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const TARGET_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Attachment progress fill (#ffeb3b)
    pub const PROGRESS: [f32; 4] = [1.0, 0.92, 0.23, 1.0];
    /// Astronaut fallback disc
    pub const ASTRONAUT: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
}
