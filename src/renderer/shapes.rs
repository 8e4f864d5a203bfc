//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::RenderSink;
use super::vertex::Vertex;
use crate::palette::Color;

/// Thickness of tessellated lines, in logical pixels
pub const LINE_WIDTH: f32 = 1.0;

/// Triangle list built up over a frame
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Two triangles covering the quad a-b-c-d (in winding order)
    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
        self.vertices.push(Vertex::new(a.x, a.y, color));
        self.vertices.push(Vertex::new(b.x, b.y, color));
        self.vertices.push(Vertex::new(c.x, c.y, color));

        self.vertices.push(Vertex::new(c.x, c.y, color));
        self.vertices.push(Vertex::new(d.x, d.y, color));
        self.vertices.push(Vertex::new(a.x, a.y, color));
    }
}

impl RenderSink for VertexBatch {
    fn fill_rect(&mut self, center: Vec2, half_extents: Vec2, color: Color) {
        let min = center - half_extents;
        let max = center + half_extents;
        self.quad(
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
            color,
        );
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            self.point(from, color);
            return;
        }
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * (LINE_WIDTH / 2.0);
        self.quad(from + perp, to + perp, to - perp, from - perp, color);
    }

    fn point(&mut self, pos: Vec2, color: Color) {
        self.fill_rect(pos, Vec2::splat(0.5), color);
    }
}

/// Closed polygon outline approximating a circle
pub fn ring_outline<S: RenderSink + ?Sized>(
    sink: &mut S,
    center: Vec2,
    radius: f32,
    color: Color,
    segments: u32,
) {
    let segments = segments.max(3);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        sink.line(
            center + Vec2::new(theta1.cos(), theta1.sin()) * radius,
            center + Vec2::new(theta2.cos(), theta2.sin()) * radius,
            color,
        );
    }
}

/// Outline through `points`, closing back to the first
pub fn polygon_outline<S: RenderSink + ?Sized>(sink: &mut S, points: &[Vec2], color: Color) {
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        sink.line(*p, next, color);
    }
}
