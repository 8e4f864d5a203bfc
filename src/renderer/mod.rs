//! Rendering seam
//!
//! The simulation never draws. `draw_frame` walks a world snapshot and emits
//! flat primitives into any `RenderSink`; `VertexBatch` is a sink that turns
//! them into triangles for a GPU backend.

pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::palette::Color;

pub use scene::draw_frame;
pub use shapes::VertexBatch;
pub use vertex::Vertex;

/// Drawing backend the scene renders into
pub trait RenderSink {
    /// Axis-aligned filled rectangle
    fn fill_rect(&mut self, center: Vec2, half_extents: Vec2, color: Color);
    /// One-pixel line segment
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Single pixel
    fn point(&mut self, pos: Vec2, color: Color);
}
