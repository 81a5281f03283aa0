//! Headless mesh renderer
//!
//! Turns a [`FrameView`] into a triangle list in normalized device
//! coordinates plus placed text runs, ready for any GPU backend to upload.

use glam::Vec2;

use super::font::FontChoice;
use super::frame::{Anchor, FrameView, SPECIAL_LABEL, TextItem};
use super::vertex::Vertex;
use super::{RenderError, Renderer, shapes};
use crate::palette;

/// Segments used to tessellate the ball
const BALL_SEGMENTS: u32 = 24;
/// Stroke width of the explosive-brick outline
const OUTLINE_THICKNESS: f32 = 3.0;

/// A text run ready for a glyph backend
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub item: TextItem,
    pub font: FontChoice,
}

#[derive(Debug)]
pub struct MeshRenderer {
    font: FontChoice,
    vertices: Vec<Vertex>,
    texts: Vec<PlacedText>,
    frames: u64,
    warned_glyphs: bool,
}

impl MeshRenderer {
    pub fn new(font: FontChoice) -> Self {
        Self {
            font,
            vertices: Vec::new(),
            texts: Vec::new(),
            frames: 0,
            warned_glyphs: false,
        }
    }

    /// Vertices of the last frame, in NDC
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn texts(&self) -> &[PlacedText] {
        &self.texts
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queue text, dropping it if the font cannot draw it
    fn push_text(&mut self, item: TextItem) {
        match self.font.supports(&item.text) {
            Ok(()) => self.texts.push(PlacedText {
                item,
                font: self.font.clone(),
            }),
            Err(e) => {
                if !self.warned_glyphs {
                    log::warn!("Skipping text: {e}");
                    self.warned_glyphs = true;
                }
            }
        }
    }
}

/// Playfield pixels (y down) to NDC (-1..1, y up)
pub fn screen_to_ndc(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(pos.x / width * 2.0 - 1.0, 1.0 - pos.y / height * 2.0)
}

impl Renderer for MeshRenderer {
    fn draw(&mut self, frame: &FrameView) -> Result<(), RenderError> {
        if frame.width <= 0.0 || frame.height <= 0.0 {
            return Err(RenderError::SurfaceLost);
        }

        self.vertices.clear();
        self.texts.clear();

        for brick in &frame.bricks {
            self.vertices
                .extend(shapes::rect(&brick.rect, brick.color.to_rgba(1.0)));
            if let Some(outline) = brick.outline {
                self.vertices.extend(shapes::rect_outline(
                    &brick.rect,
                    OUTLINE_THICKNESS,
                    outline.to_rgba(1.0),
                ));
            }
            if brick.special {
                let size = (brick.rect.height * 0.9).clamp(12.0, 24.0) as u32;
                // Label failures keep the outline as the only marker
                self.push_text(TextItem {
                    text: SPECIAL_LABEL.to_string(),
                    pos: brick.rect.center(),
                    anchor: Anchor::Center,
                    size,
                    color: palette::text_color_for_background(brick.color),
                });
            }
        }

        self.vertices
            .extend(shapes::rect(&frame.paddle, frame.paddle_color.to_rgba(1.0)));
        self.vertices.extend(shapes::circle(
            frame.ball_center,
            frame.ball_radius,
            frame.ball_color.to_rgba(1.0),
            BALL_SEGMENTS,
        ));

        for item in &frame.texts {
            self.push_text(item.clone());
        }

        for v in &mut self.vertices {
            let ndc = screen_to_ndc(Vec2::from(v.position), frame.width, frame.height);
            v.position = ndc.to_array();
        }

        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::GameState;

    #[test]
    fn test_screen_to_ndc_corners() {
        assert_eq!(screen_to_ndc(Vec2::ZERO, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(
            screen_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            screen_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_draw_builds_full_frame() {
        let state = GameState::new(Config::default(), 11);
        let frame = FrameView::capture(&state);
        let mut renderer = MeshRenderer::new(FontChoice::Family("Noto Sans CJK TC".into()));
        renderer.draw(&frame).unwrap();

        let specials = state.wall.special_count();
        let expected = 50 * 6 + specials * 24 + 6 + BALL_SEGMENTS as usize * 3;
        assert_eq!(renderer.vertices().len(), expected);
        assert_eq!(renderer.vertex_bytes().len(), expected * Vertex::STRIDE);
        assert!(
            renderer
                .vertices()
                .iter()
                .all(|v| v.position.iter().all(|c| (-1.0..=1.0).contains(c)))
        );
        // Labels plus score and serve hint
        assert_eq!(renderer.texts().len(), specials + 2);
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn test_default_font_drops_labels_but_keeps_drawing() {
        let state = GameState::new(Config::default(), 11);
        let frame = FrameView::capture(&state);
        let mut renderer = MeshRenderer::new(FontChoice::Default);
        assert!(renderer.draw(&frame).is_ok());
        assert!(renderer.texts().iter().all(|t| t.item.text != SPECIAL_LABEL));
        assert_eq!(renderer.texts().len(), 2);
        assert!(!renderer.vertices().is_empty());
    }

    #[test]
    fn test_degenerate_surface_is_an_error() {
        let state = GameState::new(Config::default(), 11);
        let mut frame = FrameView::capture(&state);
        frame.width = 0.0;
        let mut renderer = MeshRenderer::new(FontChoice::Default);
        assert!(matches!(renderer.draw(&frame), Err(RenderError::SurfaceLost)));
    }
}
