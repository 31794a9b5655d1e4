//! Draw surfaces
//!
//! The playfield issues primitive draw calls every tick; what a surface does
//! with them (canvas, GPU mesh, a recording for tests) is up to the host.

pub mod color;
pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use color::{Color, ColorParseError};
pub use mesh::MeshSurface;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::Offset;

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Style for a text run
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub fill: Color,
    /// CSS font shorthand, e.g. `"20px sans-serif"`
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Primitive 2D drawing target
pub trait Surface {
    /// Wipe the whole surface with the background fill
    fn clear(&mut self, fill: Color);

    fn fill_rect(&mut self, rect: Offset, fill: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color);

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { rect: Offset, fill: Color },
    Circle { center: Vec2, radius: f32, fill: Color },
    Text { text: String, pos: Vec2, style: TextStyle },
}

/// Surface that keeps every call of the current frame, for replay by a host
/// or inspection in tests. `clear` starts a new frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text runs drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of rectangles drawn this frame
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, fill: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(fill));
    }

    fn fill_rect(&mut self, rect: Offset, fill: Color) {
        self.commands.push(DrawCommand::Rect { rect, fill });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: style.clone(),
        });
    }
}
