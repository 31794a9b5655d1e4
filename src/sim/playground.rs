//! The playfield
//!
//! Owns every entity and drives the fixed per-tick sequence. The host's
//! scheduler calls [`Playground::tick`] at [`TICKS_PER_SECOND`]; input
//! commands may be called at any time between ticks and take effect at once.
//!
//! [`TICKS_PER_SECOND`]: crate::consts::TICKS_PER_SECOND

use std::sync::Arc;

use glam::Vec2;

use super::collision::{Bounds, Collision, resolve_collisions};
use super::layout::BrickGrid;
use super::observer::{GameEvent, GameObserver, NoopObserver};
use super::state::{Ball, Brick, Draw, GameStatus, Paddle, Status};
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;
use crate::renderer::{Color, Surface, TextAlign, TextBaseline, TextStyle};

/// Direction of a discrete paddle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

pub struct Playground<O: GameObserver = NoopObserver> {
    config: GameConfig,
    bounds: Bounds,
    status: GameStatus,
    paddle: Paddle,
    /// Distance covered by one step command
    paddle_step: f32,
    ball: Ball,
    bricks: Vec<Brick>,
    tiers: Arc<[Color]>,
    hud: Status,
    observer: O,
}

impl Playground {
    /// Build a playfield and start the first game
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: GameObserver> Playground<O> {
    /// Build a playfield reporting to `observer` and start the first game
    pub fn with_observer(config: GameConfig, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        for warning in config.warnings() {
            log::warn!("config: {}", warning);
        }

        let bounds = Bounds {
            width: config.screen.width,
            height: config.screen.height,
        };
        let paddle = Paddle::new(
            Vec2::new(0.0, config.paddle_y()),
            Vec2::new(config.paddle.width, config.paddle.height),
            config.paddle.fill,
        );
        let hud = Status::new(config.status.fill, config.status.font.clone(), bounds.width);

        let mut playground = Self {
            paddle_step: PADDLE_STEP_FACTOR * bounds.width,
            ball: Self::serve_ball(&config),
            tiers: config.brick.fill.iter().copied().collect(),
            bricks: Vec::new(),
            status: GameStatus::Play,
            config,
            bounds,
            paddle,
            hud,
            observer,
        };
        playground.new_game();
        Ok(playground)
    }

    /// Ball at rest heading up and to the right
    fn serve_ball(config: &GameConfig) -> Ball {
        let step = config.ball_step();
        Ball::new(
            Vec2::ZERO,
            config.ball.radius,
            Vec2::new(step, -step),
            config.ball.fill,
        )
    }

    /// Reset score and lives, lay out a fresh grid and serve from the center
    pub fn new_game(&mut self) {
        self.status = GameStatus::Play;
        self.hud.reset();
        self.bricks = BrickGrid::for_config(&self.config).build(&self.tiers);

        self.move_paddle_to_center();
        self.ball = Self::serve_ball(&self.config);
        self.move_ball_to_paddle_center();
        self.capture_ball(Some(true));
        if self.config.auto_play {
            self.capture_ball(Some(false));
        }

        self.observer.on_event(&GameEvent::NewGame {
            bricks: self.bricks.len(),
        });
    }

    /// Run one frame and report everything to `surface`
    pub fn tick(&mut self, surface: &mut dyn Surface) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        surface.clear(self.config.bg.fill);

        if self.config.auto_play && self.ball.is_captured() {
            self.capture_ball(Some(false));
        }
        self.process_collision();

        self.update_paddle(surface);
        self.update_ball(surface);
        self.update_bricks(surface);
        self.hud.draw(surface);

        if self.status.is_terminal() {
            self.draw_game_end(surface);
            self.observer.on_event(&GameEvent::GameOver {
                status: self.status,
                score: self.hud.score(),
            });
        }

        self.status
    }

    fn process_collision(&mut self) {
        let Some(collision) = resolve_collisions(
            &mut self.ball,
            &self.paddle,
            &mut self.bricks,
            &mut self.hud,
            self.bounds,
        ) else {
            return;
        };

        self.observer.on_event(&GameEvent::Collision(collision));

        if let Collision::BallLost { game_over } = collision {
            self.observer.on_event(&GameEvent::LifeLost {
                remaining: self.hud.life(),
            });
            if game_over {
                self.status = GameStatus::Loss;
            }
        }
    }

    fn update_paddle(&mut self, surface: &mut dyn Surface) {
        if self.config.auto_play {
            self.place_paddle(self.ball.x() - self.paddle.width() / 2.0);
        }
        self.paddle.draw(surface);
    }

    fn update_ball(&mut self, surface: &mut dyn Surface) {
        if self.ball.is_captured() {
            self.move_ball_to_paddle_center();
        } else {
            self.ball.advance();
        }
        self.ball.draw(surface);
    }

    fn update_bricks(&mut self, surface: &mut dyn Surface) {
        let mut active = false;
        for brick in self.bricks.iter().filter(|b| b.alive()) {
            brick.draw(surface);
            active = true;
        }

        if !active && self.status == GameStatus::Play {
            self.status = GameStatus::Win;
        }
    }

    fn draw_game_end(&self, surface: &mut dyn Surface) {
        let Bounds { width, height } = self.bounds;
        let text = match self.status {
            GameStatus::Win => "Congratulation. You win!",
            _ => "You lose",
        };

        surface.fill_rect(
            super::Offset::from_top_left(Vec2::ZERO, Vec2::new(width, height)),
            Color::WHITE.with_alpha(END_COVER_ALPHA),
        );
        surface.fill_text(
            text,
            Vec2::new((width / 2.0).round(), (height / 2.0).round()),
            &TextStyle {
                fill: self.config.status.fill,
                font: END_FONT.to_string(),
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
            },
        );
    }

    fn place_paddle(&mut self, x: f32) {
        self.paddle.move_x(x, self.bounds.width);
    }

    /// Move the paddle's left edge to `x`, clamped to the playfield.
    /// Ignored while the game plays itself.
    pub fn move_paddle_to(&mut self, x: f32) {
        if self.config.auto_play {
            return;
        }
        self.place_paddle(x);
    }

    /// Center the paddle under a pointer at `pointer_x`
    pub fn move_paddle_by_pointer(&mut self, pointer_x: f32) {
        self.move_paddle_to(pointer_x - self.paddle.width() / 2.0);
    }

    /// Move the paddle one fixed step. Ignored while the game plays itself.
    pub fn step_paddle(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Left => -self.paddle_step,
            Direction::Right => self.paddle_step,
        };
        self.move_paddle_to(self.paddle.x() + delta);
    }

    pub fn move_paddle_to_center(&mut self) {
        self.place_paddle(self.bounds.width / 2.0 - self.paddle.width() / 2.0);
    }

    /// Capture (`Some(true)`), release (`Some(false)`) or toggle (`None`)
    /// the ball
    pub fn capture_ball(&mut self, force: Option<bool>) {
        let capture = force.unwrap_or(!self.ball.is_captured());
        if capture {
            self.ball.capture();
        } else {
            self.ball.release();
        }
    }

    pub fn move_ball_to_paddle_center(&mut self) {
        self.ball.rest_on(&self.paddle);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct access for hosts and tests that place the ball themselves
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_step(&self) -> f32 {
        self.paddle_step
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Score and lives
    pub fn hud(&self) -> &Status {
        &self.hud
    }

    pub fn score(&self) -> u64 {
        self.hud.score()
    }

    pub fn life(&self) -> u32 {
        self.hud.life()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
