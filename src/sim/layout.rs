//! Brick grid layout
//!
//! The grid is a pure function of the playfield size and brick size: fixed
//! margins on the left, right and top, a fixed gap between bricks, and as many
//! rows as fit in the upper part of the field.

use std::sync::Arc;

use glam::Vec2;

use super::state::Brick;
use crate::config::GameConfig;
use crate::consts::*;
use crate::renderer::Color;

/// Rows and columns of bricks for a playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickGrid {
    pub rows: usize,
    pub cols: usize,
    pub brick_size: Vec2,
}

impl BrickGrid {
    pub fn new(field: Vec2, brick_size: Vec2) -> Self {
        let rows = (field.y * BRICK_AREA_HEIGHT_FACTOR / (brick_size.y + BRICK_GAP)).round();
        let cols = ((field.x - BRICK_OFFSET_X * 2.0) / (brick_size.x + BRICK_GAP)).round();

        Self {
            rows: rows.max(0.0) as usize,
            cols: cols.max(0.0) as usize,
            brick_size,
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(
            Vec2::new(config.screen.width, config.screen.height),
            Vec2::new(config.brick.width, config.brick.height),
        )
    }

    /// Brick count, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Brick count, `None` if it does not fit in a `usize`
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left corner of the brick at `row`, `col`
    pub fn brick_position(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            BRICK_OFFSET_X + col as f32 * (self.brick_size.x + BRICK_GAP),
            BRICK_OFFSET_Y + row as f32 * (self.brick_size.y + BRICK_GAP),
        )
    }

    /// Lowest y covered by a brick
    pub fn bottom(&self) -> f32 {
        match self.rows {
            0 => BRICK_OFFSET_Y,
            rows => self.brick_position(rows - 1, 0).y + self.brick_size.y,
        }
    }

    /// Fresh bricks in row-major order, each at full life
    pub fn build(&self, tiers: &Arc<[Color]>) -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                bricks.push(Brick::new(
                    self.brick_position(row, col),
                    self.brick_size,
                    Arc::clone(tiers),
                ));
            }
        }
        bricks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Entity;

    #[test]
    fn test_default_grid_dimensions() {
        let grid = BrickGrid::new(Vec2::new(800.0, 600.0), Vec2::new(60.0, 20.0));
        // round(210 / 40) and round(600 / 80)
        assert_eq!((grid.rows, grid.cols), (5, 8));
        assert_eq!(grid.bottom(), 250.0);
    }

    #[test]
    fn test_single_brick_grid() {
        let grid = BrickGrid::new(Vec2::new(400.0, 600.0), Vec2::new(180.0, 190.0));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.brick_position(0, 0), Vec2::new(100.0, 70.0));
    }

    #[test]
    fn test_narrow_field_has_no_columns() {
        let grid = BrickGrid::new(Vec2::new(150.0, 600.0), Vec2::new(60.0, 20.0));
        assert_eq!(grid.cols, 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_huge_field_does_not_overflow() {
        let grid = BrickGrid::new(Vec2::splat(1e30), Vec2::new(60.0, 20.0));
        assert_eq!(grid.checked_len(), None);
        assert_eq!(grid.len(), usize::MAX);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_build_is_row_major_and_deterministic() {
        let tiers: Arc<[Color]> = vec![Color::WHITE, Color::BLACK].into();
        let grid = BrickGrid::new(Vec2::new(800.0, 600.0), Vec2::new(60.0, 20.0));

        let a = grid.build(&tiers);
        let b = grid.build(&tiers);
        assert_eq!(a.len(), 40);
        assert_eq!(a[1].position(), Vec2::new(180.0, 70.0));
        assert_eq!(a[8].position(), Vec2::new(100.0, 110.0));
        assert!(a.iter().all(|brick| brick.life() == 2));

        let pos_a: Vec<_> = a.iter().map(|brick| brick.position()).collect();
        let pos_b: Vec<_> = b.iter().map(|brick| brick.position()).collect();
        assert_eq!(pos_a, pos_b);
    }
}
