//! WebGPU rendering module
//!
//! The scene is flattened to a colored triangle list in canvas pixels and
//! drawn by a single pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
