//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Offset;

/// Fewest segments used for any circle
pub const MIN_CIRCLE_SEGMENTS: u32 = 12;

/// Segment count giving roughly 4px edges for a circle of this radius
pub fn circle_segments(radius: f32) -> u32 {
    ((2.0 * PI * radius / 4.0).ceil() as u32).max(MIN_CIRCLE_SEGMENTS)
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(rect: Offset, color: [f32; 4]) -> Vec<Vertex> {
    let Offset {
        left,
        right,
        top,
        bottom,
    } = rect;

    vec![
        Vertex::new(left, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, bottom, color),
        Vertex::new(left, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, bottom, color),
    ]
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
