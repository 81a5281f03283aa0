//! Per-tick frame snapshot handed to renderers
//!
//! Captures everything a renderer needs so that drawing never touches the
//! simulation state directly.

use glam::Vec2;

use crate::palette::{self, Rgb};
use crate::sim::{GamePhase, GameState, Rect};

/// Label drawn on explosive bricks
pub const SPECIAL_LABEL: &str = "爆";

/// Gap between HUD text and the playfield edges
const TEXT_PADDING: f32 = 10.0;

/// Which 300 ms (or `interval_ms`) window of the outline flash we are in: 0 or 1
pub fn special_flash_phase(elapsed_ms: u64, interval_ms: u64) -> usize {
    ((elapsed_ms / interval_ms.max(1)) % 2) as usize
}

/// Where a text item's position sits relative to its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopRight,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub size: u32,
    pub color: Rgb,
}

/// An intact brick as the renderer sees it
#[derive(Debug, Clone, PartialEq)]
pub struct BrickView {
    pub rect: Rect,
    pub color: Rgb,
    pub special: bool,
    /// Flashing outline color (explosive bricks only)
    pub outline: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub width: f32,
    pub height: f32,
    pub paddle: Rect,
    pub paddle_color: Rgb,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub ball_color: Rgb,
    pub bricks: Vec<BrickView>,
    pub flash_phase: usize,
    pub score: u64,
    pub phase: GamePhase,
    pub texts: Vec<TextItem>,
}

impl FrameView {
    /// Snapshot the state, timing the flash from simulated time
    pub fn capture(state: &GameState) -> Self {
        Self::capture_at(state, state.elapsed_ms())
    }

    /// Snapshot the state with an explicit clock for the flash
    pub fn capture_at(state: &GameState, elapsed_ms: u64) -> Self {
        let config = &state.config;
        let flash_phase = special_flash_phase(elapsed_ms, config.bricks.flash_interval_ms);
        let outline = palette::SPECIAL_OUTLINE_COLORS[flash_phase];

        let bricks = state
            .wall
            .remaining()
            .map(|b| BrickView {
                rect: b.rect,
                color: b.color,
                special: b.special,
                outline: b.special.then_some(outline),
            })
            .collect();

        Self {
            width: config.window.width,
            height: config.window.height,
            paddle: state.paddle.rect,
            paddle_color: palette::PADDLE,
            ball_center: state.ball.pos,
            ball_radius: state.ball.radius,
            ball_color: palette::BALL,
            bricks,
            flash_phase,
            score: state.score(),
            phase: state.phase(),
            texts: hud_texts(state),
        }
    }
}

fn hud_texts(state: &GameState) -> Vec<TextItem> {
    let config = &state.config;
    let fonts = &config.fonts;
    let (w, h) = (config.window.width, config.window.height);

    let mut texts = vec![TextItem {
        text: format!("Score: {}", state.score()),
        pos: Vec2::new(w - TEXT_PADDING, TEXT_PADDING),
        anchor: Anchor::TopRight,
        size: fonts.score_size,
        color: palette::TEXT,
    }];
    let below_score = TEXT_PADDING + fonts.score_size as f32 + 6.0;

    match state.phase() {
        GamePhase::WaitingToStart => texts.push(TextItem {
            text: "Click or press Space to serve".to_string(),
            pos: Vec2::new(w - TEXT_PADDING, below_score),
            anchor: Anchor::TopRight,
            size: fonts.info_size,
            color: palette::INFO_TEXT,
        }),
        GamePhase::Win => {
            texts.push(TextItem {
                text: "You win!".to_string(),
                pos: Vec2::new(w / 2.0, h / 2.0 - 20.0),
                anchor: Anchor::Center,
                size: fonts.banner_size,
                color: palette::TEXT,
            });
            texts.push(TextItem {
                text: "Press E for the next round".to_string(),
                pos: Vec2::new(w / 2.0, h / 2.0 + 30.0),
                anchor: Anchor::Center,
                size: fonts.info_size,
                color: palette::INFO_TEXT,
            });
        }
        GamePhase::Paused { .. } => texts.push(TextItem {
            text: "Paused".to_string(),
            pos: Vec2::new(w / 2.0, h / 2.0),
            anchor: Anchor::Center,
            size: fonts.banner_size,
            color: palette::TEXT,
        }),
        GamePhase::Playing => {}
    }

    texts
}
