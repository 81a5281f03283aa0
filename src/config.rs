//! Runtime configuration
//!
//! Loaded once at startup from an optional JSON file. Every field has a
//! default, so a file only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration loading failures (fatal at startup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Playfield and timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Simulation updates per second
    pub tick_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            tick_rate: TICK_RATE,
        }
    }
}

/// Brick wall layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub cols: usize,
    pub rows: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub top_margin: f32,
    /// Requested explosive bricks; clamped to the grid size at generation
    pub special_count: usize,
    pub flash_interval_ms: u64,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            cols: BRICK_COLS,
            rows: BRICK_ROWS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            top_margin: BRICK_TOP_MARGIN,
            special_count: SPECIAL_BRICK_COUNT,
            flash_interval_ms: SPECIAL_FLASH_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    /// Initial width as a multiple of the brick width
    pub width_multiplier: f32,
    pub height: f32,
    pub y_offset: f32,
    pub shrink_amount: f32,
    pub min_width: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width_multiplier: PADDLE_WIDTH_MULTIPLIER,
            height: PADDLE_HEIGHT,
            y_offset: PADDLE_Y_OFFSET,
            shrink_amount: PADDLE_SHRINK_AMOUNT,
            min_width: PADDLE_MIN_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Serve velocity, pixels per tick
    pub speed_x: f32,
    pub speed_y: f32,
    pub follow_distance: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed_x: BALL_SPEED_X,
            speed_y: BALL_SPEED_Y,
            follow_distance: BALL_FOLLOW_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_per_brick: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_brick: SCORE_PER_BRICK,
        }
    }
}

/// Font families tried in order for labels and HUD text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub candidates: Vec<String>,
    pub score_size: u32,
    pub info_size: u32,
    pub banner_size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: [
                "Microsoft JhengHei",
                "Microsoft JhengHei UI",
                "Noto Sans CJK TC",
                "PingFang TC",
                "Arial Unicode MS",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            score_size: 28,
            info_size: 16,
            banner_size: 48,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub bricks: BrickConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
    pub scoring: ScoringConfig,
    pub fonts: FontConfig,
}

impl Config {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config.sanitize())
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Initial paddle width derived from the brick width
    pub fn paddle_initial_width(&self) -> f32 {
        self.bricks.width * self.paddle.width_multiplier
    }

    /// Duration of one simulation tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.window.tick_rate as f32
    }

    /// Replace out-of-range values instead of failing.
    ///
    /// `special_count` is left alone: wall generation clamps it to the
    /// number of bricks.
    pub fn sanitize(mut self) -> Self {
        let defaults = Config::default();

        fn positive(value: &mut f32, fallback: f32, name: &str) {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("config: {name} = {value} is not positive, using {fallback}");
                *value = fallback;
            }
        }

        positive(&mut self.window.width, defaults.window.width, "window.width");
        positive(&mut self.window.height, defaults.window.height, "window.height");
        positive(&mut self.bricks.width, defaults.bricks.width, "bricks.width");
        positive(&mut self.bricks.height, defaults.bricks.height, "bricks.height");
        positive(
            &mut self.paddle.width_multiplier,
            defaults.paddle.width_multiplier,
            "paddle.width_multiplier",
        );
        positive(&mut self.paddle.height, defaults.paddle.height, "paddle.height");
        positive(&mut self.paddle.min_width, defaults.paddle.min_width, "paddle.min_width");
        positive(&mut self.ball.radius, defaults.ball.radius, "ball.radius");

        if self.window.tick_rate == 0 {
            log::warn!("config: window.tick_rate = 0, using {}", defaults.window.tick_rate);
            self.window.tick_rate = defaults.window.tick_rate;
        }
        if self.bricks.flash_interval_ms == 0 {
            log::warn!(
                "config: bricks.flash_interval_ms = 0, using {}",
                defaults.bricks.flash_interval_ms
            );
            self.bricks.flash_interval_ms = defaults.bricks.flash_interval_ms;
        }
        if self.paddle.shrink_amount < 0.0 {
            log::warn!("config: paddle.shrink_amount is negative, using 0");
            self.paddle.shrink_amount = 0.0;
        }

        let initial = self.paddle_initial_width().min(self.window.width);
        if self.paddle.min_width > initial {
            log::warn!(
                "config: paddle.min_width {} exceeds initial width {initial}, clamping",
                self.paddle.min_width
            );
            self.paddle.min_width = initial;
        }
        if self.paddle_initial_width() > self.window.width {
            log::warn!("config: paddle wider than the playfield, clamping multiplier");
            self.paddle.width_multiplier = self.window.width / self.bricks.width;
        }

        self
    }
}
