//! Blast Breakout - a single-wall Breakout game with explosive bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Render collaborator contract and a headless mesh renderer
//! - `platform`: Fixed-step timing and input sources
//! - `config`: Tunables loaded once at startup
//! - `palette`: Brick and UI colors

pub mod config;
pub mod palette;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};

/// Game configuration constants (defaults for [`Config`])
pub mod consts {
    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Simulation rate (updates per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Brick wall layout
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 6.0;
    pub const BRICK_TOP_MARGIN: f32 = 50.0;
    /// Number of explosive bricks per wall
    pub const SPECIAL_BRICK_COUNT: usize = 7;
    /// Outline flash period for explosive bricks
    pub const SPECIAL_FLASH_INTERVAL_MS: u64 = 300;

    /// Paddle defaults - initial width is BRICK_WIDTH * multiplier
    pub const PADDLE_WIDTH_MULTIPLIER: f32 = 2.5;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from the bottom edge to the paddle's top
    pub const PADDLE_Y_OFFSET: f32 = 40.0;
    /// Width lost per destroyed brick
    pub const PADDLE_SHRINK_AMOUNT: f32 = 5.0;
    pub const PADDLE_MIN_WIDTH: f32 = 40.0;

    /// Ball defaults (pixels per tick)
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_X: f32 = 7.0;
    pub const BALL_SPEED_Y: f32 = -7.0;
    /// Gap between a docked ball and the paddle top
    pub const BALL_FOLLOW_DISTANCE: f32 = 5.0;

    pub const SCORE_PER_BRICK: u64 = 10;
}
