//! Axis-aligned bounding boxes
//!
//! Every movable entity carries an [`Offset`] derived from its anchor point
//! and size. Boxes are recomputed on every move; nothing ever reads a box
//! that lags behind its position.

use glam::Vec2;

/// Which point of an entity its position refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the center; size is the half extent (the ball's radius)
    Center,
    /// Position is the top-left corner; size is the full extent
    TopLeft,
}

/// Axis-aligned box in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Offset {
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            left: center.x - half_extent.x,
            right: center.x + half_extent.x,
            top: center.y - half_extent.y,
            bottom: center.y + half_extent.y,
        }
    }

    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            left: pos.x,
            right: pos.x + size.x,
            top: pos.y,
            bottom: pos.y + size.y,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Horizontal span test, bounds excluded
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x > self.left && x < self.right
    }

    /// Vertical span test, bounds excluded
    #[inline]
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.top && y < self.bottom
    }
}

/// Box of an entity anchored at `position` with the given `size`
pub fn compute_box(anchor: Anchor, position: Vec2, size: Vec2) -> Offset {
    match anchor {
        Anchor::Center => Offset::from_center(position, size),
        Anchor::TopLeft => Offset::from_top_left(position, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_box() {
        let b = compute_box(Anchor::Center, Vec2::new(100.0, 50.0), Vec2::splat(10.0));
        assert_eq!(
            b,
            Offset {
                left: 90.0,
                right: 110.0,
                top: 40.0,
                bottom: 60.0
            }
        );
        assert_eq!(b.width(), 20.0);
    }

    #[test]
    fn test_top_left_box() {
        let b = compute_box(Anchor::TopLeft, Vec2::new(325.0, 565.0), Vec2::new(150.0, 15.0));
        assert_eq!(b.left, 325.0);
        assert_eq!(b.right, 475.0);
        assert_eq!(b.bottom, 580.0);
        assert_eq!(b.height(), 15.0);
    }

    #[test]
    fn test_span_excludes_edges() {
        let b = Offset::from_top_left(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(b.spans_x(5.0));
        assert!(!b.spans_x(0.0));
        assert!(!b.spans_x(10.0));
        assert!(!b.spans_y(10.0));
    }
}
