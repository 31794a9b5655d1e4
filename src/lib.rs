//! Brick Breaker - a fixed-tick Breakout engine
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, game state, playfield)
//! - `renderer`: Draw surfaces the playfield reports to
//! - `config`: Explicit, validated game configuration
//! - `game`: Input-driven shell around the playfield

pub mod config;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, InputEvent, Key};
pub use renderer::{Color, Surface};
pub use sim::{GameStatus, Playground};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed update rate driven by the external scheduler
    pub const TICKS_PER_SECOND: u32 = 50;
    /// Interval between two ticks
    pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

    /// Lives at the start of a game
    pub const STARTING_LIVES: u32 = 3;
    /// Points per brick hit
    pub const SCORE_PER_HIT: u64 = 10;

    /// Paddle step per left/right command, as a fraction of playfield width
    pub const PADDLE_STEP_FACTOR: f32 = 0.02;
    /// Ball speed per axis, as a fraction of playfield height
    pub const BALL_STEP_FACTOR: f32 = 0.013;
    /// Upward nudge applied when a captured ball is released
    pub const RELEASE_NUDGE: f32 = 1.0;

    /// Brick grid layout
    pub const BRICK_OFFSET_X: f32 = 100.0;
    pub const BRICK_OFFSET_Y: f32 = 70.0;
    pub const BRICK_GAP: f32 = 20.0;
    /// Share of the playfield height the grid may occupy
    pub const BRICK_AREA_HEIGHT_FACTOR: f32 = 0.35;
    /// Largest brick grid a configuration may lay out
    pub const MAX_BRICKS: usize = 10_000;

    /// HUD text inset from the playfield edges
    pub const STATUS_MARGIN: f32 = 30.0;
    /// End-of-game overlay
    pub const END_COVER_ALPHA: f32 = 0.7;
    pub const END_FONT: &str = "30px sans-serif";
}
