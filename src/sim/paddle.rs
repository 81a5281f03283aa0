//! The player's paddle
//!
//! Tracks the pointer horizontally and loses width for every destroyed brick.

use super::rect::Rect;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Width at match start (upper bound for `rect.width`)
    pub initial_width: f32,
    pub min_width: f32,
    pub shrink_amount: f32,
    /// Playfield width used for horizontal clamping
    screen_width: f32,
}

impl Paddle {
    /// Create a paddle centered horizontally, `y_offset` above the bottom edge
    pub fn new(config: &Config) -> Self {
        let width = config.paddle_initial_width();
        let screen_width = config.window.width;
        let x = ((screen_width - width) / 2.0).floor();
        let y = config.window.height - config.paddle.y_offset;
        Self {
            rect: Rect::new(x, y, width, config.paddle.height),
            initial_width: width,
            min_width: config.paddle.min_width.min(width),
            shrink_amount: config.paddle.shrink_amount,
            screen_width,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.rect.center_x()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    /// Center the paddle on the pointer, then keep it inside the playfield
    pub fn update(&mut self, pointer_x: f32) {
        self.rect.x = pointer_x - self.rect.width / 2.0;
        self.clamp_to_screen();
    }

    /// Lose `shrink_amount` of width, keeping the center, never below `min_width`.
    ///
    /// Returns whether the width changed.
    pub fn shrink(&mut self) -> bool {
        let new_width = (self.rect.width - self.shrink_amount).max(self.min_width);
        if new_width == self.rect.width {
            return false;
        }
        let center_x = self.rect.center_x();
        self.rect.width = new_width;
        self.rect.x = center_x - new_width / 2.0;
        self.clamp_to_screen();
        true
    }

    /// Normalized contact offset: -1 at the left edge, 0 at center, +1 at the right edge
    pub fn hit_factor(&self, ball_x: f32) -> f32 {
        (ball_x - self.rect.center_x()) / (self.rect.width / 2.0)
    }

    fn clamp_to_screen(&mut self) {
        let max_x = (self.screen_width - self.rect.width).max(0.0);
        self.rect.x = self.rect.x.clamp(0.0, max_x);
    }
}
