//! Triangle-mesh surface for GPU hosts
//!
//! Shapes are tessellated into a flat vertex list the host uploads once per
//! frame. Text is not rasterized here; runs are collected for an overlay HUD.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Color, Surface, TextStyle};
use crate::sim::Offset;

/// Text queued for the HUD overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct MeshSurface {
    /// Background fill from the last `clear`
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextRun>,
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshSurface {
    pub fn new() -> Self {
        Self {
            clear_color: Color::BLACK,
            vertices: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Vertex data ready for a buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, fill: Color) {
        self.clear_color = fill;
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: Offset, fill: Color) {
        self.vertices.extend(shapes::rect(rect, fill.to_array()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, fill.to_array(), segments));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}
