//! Game entities and status types
//!
//! Each entity embeds its own [`Offset`] and keeps it in sync with its
//! position through its move methods; positions are never written directly.

use std::sync::Arc;

use glam::Vec2;

use super::geometry::{Anchor, Offset, compute_box};
use crate::consts::*;
use crate::renderer::{Color, Surface, TextAlign, TextBaseline, TextStyle};

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Game in progress
    #[default]
    Play,
    /// Every brick destroyed
    Win,
    /// Last life lost
    Loss,
}

impl GameStatus {
    /// Win and Loss end the game; the scheduler should stop ticking
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Play)
    }
}

/// A positioned, boxed object on the playfield
pub trait Entity {
    /// Anchor point (center for the ball, top-left otherwise)
    fn position(&self) -> Vec2;

    /// Current bounding box
    fn offset(&self) -> Offset;
}

/// Anything that reports itself to a draw surface each tick
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pos: Vec2,
    radius: f32,
    /// Per-tick displacement; only its signs ever change
    step: Vec2,
    /// Glued to the paddle, excluded from motion and collisions
    captured: bool,
    offset: Offset,
    fill: Color,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, step: Vec2, fill: Color) -> Self {
        Self {
            pos: center,
            radius,
            step,
            captured: false,
            offset: compute_box(Anchor::Center, center, Vec2::splat(radius)),
            fill,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn step(&self) -> Vec2 {
        self.step
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn move_to(&mut self, center: Vec2) {
        self.pos = center;
        self.offset = compute_box(Anchor::Center, center, Vec2::splat(self.radius));
    }

    pub fn move_x(&mut self, x: f32) {
        self.move_to(Vec2::new(x, self.pos.y));
    }

    pub fn move_y(&mut self, y: f32) {
        self.move_to(Vec2::new(self.pos.x, y));
    }

    /// Advance one tick along the current step
    pub fn advance(&mut self) {
        self.move_to(self.pos + self.step);
    }

    /// Reverse horizontal direction
    pub fn reflect_x(&mut self) {
        self.step.x = -self.step.x;
    }

    /// Reverse vertical direction
    pub fn reflect_y(&mut self) {
        self.step.y = -self.step.y;
    }

    pub fn capture(&mut self) {
        self.captured = true;
    }

    /// Free a captured ball. It is lifted slightly so the paddle check on the
    /// next tick does not fire while it still rests on the paddle.
    pub fn release(&mut self) {
        if self.captured {
            self.move_y(self.pos.y - RELEASE_NUDGE);
        }
        self.captured = false;
    }

    /// Rest the ball on top of the paddle, centered
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.move_to(Vec2::new(
            paddle.x() + paddle.width() / 2.0,
            paddle.y() - self.radius,
        ));
    }
}

impl Entity for Ball {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn offset(&self) -> Offset {
        self.offset
    }
}

impl Draw for Ball {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.pos, self.radius, self.fill);
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pos: Vec2,
    size: Vec2,
    offset: Offset,
    fill: Color,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, fill: Color) -> Self {
        Self {
            pos,
            size,
            offset: compute_box(Anchor::TopLeft, pos, size),
            fill,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move horizontally to `x` rounded to a whole pixel, then clamped to
    /// `[0, field_width - width]`
    pub fn move_x(&mut self, x: f32, field_width: f32) {
        let max_x = (field_width - self.size.x).max(0.0);
        self.pos.x = x.round().clamp(0.0, max_x);
        self.offset = compute_box(Anchor::TopLeft, self.pos, self.size);
    }
}

impl Entity for Paddle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn offset(&self) -> Offset {
        self.offset
    }
}

impl Draw for Paddle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.offset, self.fill);
    }
}

/// A brick with one life per fill tier
#[derive(Debug, Clone)]
pub struct Brick {
    /// Top-left corner
    pos: Vec2,
    life: u32,
    tiers: Arc<[Color]>,
    offset: Offset,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2, tiers: Arc<[Color]>) -> Self {
        Self {
            pos,
            life: tiers.len() as u32,
            tiers,
            offset: compute_box(Anchor::TopLeft, pos, size),
        }
    }

    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.life > 0
    }

    /// Remove one tier. Dead bricks stay dead.
    pub fn decrease_life(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    /// Fill for the current tier
    pub fn fill(&self) -> Option<Color> {
        let tier = self.life.checked_sub(1)?;
        self.tiers.get(tier as usize).copied()
    }
}

impl Entity for Brick {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn offset(&self) -> Offset {
        self.offset
    }
}

impl Draw for Brick {
    fn draw(&self, surface: &mut dyn Surface) {
        if let Some(fill) = self.fill() {
            surface.fill_rect(self.offset, fill);
        }
    }
}

/// Score and remaining lives, drawn as the HUD
#[derive(Debug, Clone)]
pub struct Status {
    score: u64,
    life: u32,
    style: TextStyle,
    /// Needed to right-align the life counter
    field_width: f32,
}

impl Status {
    pub fn new(fill: Color, font: impl Into<String>, field_width: f32) -> Self {
        Self {
            score: 0,
            life: STARTING_LIVES,
            style: TextStyle {
                fill,
                font: font.into(),
                align: TextAlign::Left,
                baseline: TextBaseline::Top,
            },
            field_width,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.life = STARTING_LIVES;
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn increase_score(&mut self) {
        self.score += SCORE_PER_HIT;
    }

    pub fn decrease_life(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    /// More than the final life left: losing the ball now only costs a serve
    pub fn alive(&self) -> bool {
        self.life > 1
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}

impl Draw for Status {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_text(
            &format!("Score: {}", self.score),
            Vec2::splat(STATUS_MARGIN),
            &self.style,
        );

        let right = TextStyle {
            align: TextAlign::Right,
            ..self.style.clone()
        };
        surface.fill_text(
            &format!("Life: {}", self.life),
            Vec2::new(self.field_width - STATUS_MARGIN, STATUS_MARGIN),
            &right,
        );
    }
}
