//! Game configuration
//!
//! One explicit structure covering every tunable of a game. Each section is
//! `#[serde(default)]`, so a partial JSON document only overrides what it
//! names. Hard errors are rejected by [`GameConfig::validate`] when the
//! playfield is built; suspicious but playable values only produce warnings.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BALL_STEP_FACTOR, MAX_BRICKS};
use crate::renderer::Color;
use crate::sim::BrickGrid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub fill: Color,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Gap between the paddle's bottom edge and the bottom of the playfield
    pub offset_bottom: f32,
    pub fill: Color,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 15.0,
            offset_bottom: 20.0,
            fill: Color::rgb(0x34, 0x49, 0x5e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub fill: Color,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            fill: Color::rgb(0xe7, 0x4c, 0x3c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub width: f32,
    pub height: f32,
    /// One fill per tier; a brick starts with as many lives as there are
    /// tiers and is drawn with `fill[life - 1]`
    pub fill: Vec<Color>,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 20.0,
            fill: vec![
                Color::rgb(0x95, 0xa5, 0xa6),
                Color::rgb(0x34, 0x98, 0xdb),
                Color::rgb(0x8e, 0x44, 0xad),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub fill: Color,
    /// CSS font shorthand
    pub font: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0x2c, 0x3e, 0x50),
            font: "20px sans-serif".into(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub bg: BackgroundConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub brick: BrickConfig,
    pub status: StatusConfig,
    /// Paddle follows the ball by itself; human paddle input is ignored
    pub auto_play: bool,
}

/// Reasons a configuration cannot produce a playable field
#[derive(Debug)]
pub enum ConfigError {
    /// A size that must be strictly positive is zero, negative or NaN
    NonPositive { field: &'static str, value: f32 },
    /// Infinite or NaN where a finite number is required
    NotFinite { field: &'static str, value: f32 },
    /// Paddle does not fit horizontally
    PaddleTooWide { paddle: f32, screen: f32 },
    /// Paddle would sit above the top of the playfield
    PaddleOffscreen { y: f32 },
    /// Bricks need at least one tier color
    NoBrickTiers,
    /// Layout leaves no room for a single brick
    EmptyBrickGrid { rows: usize, cols: usize },
    /// Layout would create more than [`MAX_BRICKS`] bricks
    TooManyBricks { rows: usize, cols: usize },
    /// Config document is not valid JSON for [`GameConfig`]
    Parse(serde_json::Error),
    /// Config file could not be read
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be > 0 (got {value})")
            }
            ConfigError::NotFinite { field, value } => {
                write!(f, "{field} must be finite (got {value})")
            }
            ConfigError::PaddleTooWide { paddle, screen } => {
                write!(f, "paddle.width {paddle} exceeds screen.width {screen}")
            }
            ConfigError::PaddleOffscreen { y } => {
                write!(f, "paddle would be placed above the playfield (y = {y})")
            }
            ConfigError::NoBrickTiers => write!(f, "brick.fill needs at least one color"),
            ConfigError::EmptyBrickGrid { rows, cols } => {
                write!(f, "brick layout is empty ({rows} rows x {cols} cols)")
            }
            ConfigError::TooManyBricks { rows, cols } => {
                write!(
                    f,
                    "brick layout is too large ({rows} rows x {cols} cols, max {MAX_BRICKS} bricks)"
                )
            }
            ConfigError::Parse(e) => write!(f, "parse config: {e}"),
            ConfigError::Io(e) => write!(f, "read config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

fn require_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this comparison too
    if value > 0.0 {
        require_finite(field, value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document. Does not validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> String {
        // Every field serializes to plain JSON values
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Top edge of the paddle, in whole pixels
    pub fn paddle_y(&self) -> f32 {
        (self.screen.height - self.paddle.offset_bottom - self.paddle.height).round()
    }

    /// Ball speed per axis for this playfield
    pub fn ball_step(&self) -> f32 {
        (BALL_STEP_FACTOR * self.screen.height).round()
    }

    /// Reject configurations that cannot produce a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("screen.width", self.screen.width)?;
        require_positive("screen.height", self.screen.height)?;
        require_positive("paddle.width", self.paddle.width)?;
        require_positive("paddle.height", self.paddle.height)?;
        require_positive("ball.radius", self.ball.radius)?;
        require_positive("brick.width", self.brick.width)?;
        require_positive("brick.height", self.brick.height)?;
        require_finite("paddle.offsetBottom", self.paddle.offset_bottom)?;

        if self.paddle.width > self.screen.width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle.width,
                screen: self.screen.width,
            });
        }
        let y = self.paddle_y();
        if y < 0.0 {
            return Err(ConfigError::PaddleOffscreen { y });
        }
        if self.brick.fill.is_empty() {
            return Err(ConfigError::NoBrickTiers);
        }

        let grid = BrickGrid::for_config(self);
        let (rows, cols) = (grid.rows, grid.cols);
        match grid.checked_len() {
            Some(0) => Err(ConfigError::EmptyBrickGrid { rows, cols }),
            Some(n) if n <= MAX_BRICKS => Ok(()),
            _ => Err(ConfigError::TooManyBricks { rows, cols }),
        }
    }

    /// Human-readable notes about playable but suspicious values.
    /// Logged with `warn!` when a playfield is built.
    pub fn warnings(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.ball_step() == 0.0 {
            w.push(format!(
                "screen.height {} too small; ball speed rounds to 0",
                self.screen.height
            ));
        }
        if self.ball.radius * 2.0 >= self.paddle.width {
            w.push(format!(
                "ball diameter {} not smaller than paddle.width {}",
                self.ball.radius * 2.0,
                self.paddle.width
            ));
        }
        let grid = BrickGrid::for_config(self);
        if grid.bottom() >= self.paddle_y() {
            w.push(format!(
                "brick grid reaches y = {} at or below the paddle (y = {})",
                grid.bottom(),
                self.paddle_y()
            ));
        }
        if self.paddle.offset_bottom < 0.0 {
            w.push(format!(
                "paddle.offsetBottom {} negative; paddle overlaps the bottom border",
                self.paddle.offset_bottom
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Playground;

    #[test]
    fn test_default_is_valid_without_warnings() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.warnings().is_empty(), "{:?}", cfg.warnings());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(
            r##"{
                "screen": { "width": 1024 },
                "paddle": { "offsetBottom": 40, "fill": "#0f0" },
                "brick": { "fill": ["red", "#00ff00"] },
                "autoPlay": true
            }"##,
        )
        .unwrap();

        assert_eq!(cfg.screen.width, 1024.0);
        assert_eq!(cfg.screen.height, 600.0);
        assert_eq!(cfg.paddle.offset_bottom, 40.0);
        assert_eq!(cfg.paddle.width, 150.0);
        assert_eq!(cfg.paddle.fill, Color::rgb(0, 255, 0));
        assert_eq!(cfg.brick.fill.len(), 2);
        assert!(cfg.auto_play);
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = GameConfig::from_json(r##"{ "ball": { "fill": "#zzz" } }"##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("#zzz"));
    }

    #[test]
    fn test_validate_rejects_non_positive_sizes() {
        let mut cfg = GameConfig::default();
        cfg.screen.width = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "screen.width",
                ..
            })
        ));

        let mut cfg = GameConfig::default();
        cfg.ball.radius = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "ball.radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_layout_problems() {
        let mut cfg = GameConfig::default();
        cfg.paddle.width = 900.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));

        let mut cfg = GameConfig::default();
        cfg.paddle.offset_bottom = 700.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::PaddleOffscreen { .. })
        ));

        let mut cfg = GameConfig::default();
        cfg.brick.fill.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoBrickTiers)));

        let mut cfg = GameConfig::default();
        cfg.screen.width = 150.0;
        cfg.paddle.width = 100.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptyBrickGrid { cols: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut cfg = GameConfig::default();
        cfg.screen.width = f32::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "screen.width",
                ..
            })
        ));

        let mut cfg = GameConfig::default();
        cfg.paddle.offset_bottom = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "paddle.offsetBottom",
                ..
            })
        ));
        assert!(Playground::new(cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_huge_playfield() {
        let mut cfg = GameConfig::default();
        cfg.screen.height = 1e30;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooManyBricks { .. })
        ));

        let mut cfg = GameConfig::default();
        cfg.screen.width = 1e30;
        cfg.screen.height = 1e30;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::TooManyBricks { .. }));
        assert!(err.to_string().contains("too large"));
        assert!(Playground::new(cfg).is_err());
    }

    #[test]
    fn test_warnings_flag_tiny_playfield() {
        let mut cfg = GameConfig::default();
        cfg.screen.height = 30.0;
        cfg.paddle.offset_bottom = 0.0;
        cfg.paddle.height = 5.0;
        let warnings = cfg.warnings();
        assert!(warnings.iter().any(|w| w.contains("ball speed rounds to 0")));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = GameConfig::load_from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = GameConfig::default();
        let back = GameConfig::from_json(&cfg.to_json()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_derived_values() {
        let cfg = GameConfig::default();
        // 600 - 20 - 15
        assert_eq!(cfg.paddle_y(), 565.0);
        // round(0.013 * 600) = round(7.8)
        assert_eq!(cfg.ball_step(), 8.0);
    }
}
