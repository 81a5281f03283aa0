//! Rendering
//!
//! The game loop hands a [`FrameView`] to a [`Renderer`] once per frame.
//! Render failures are cosmetic: the loop logs and carries on.

pub mod font;
pub mod frame;
pub mod mesh;
pub mod shapes;
pub mod vertex;

use thiserror::Error;

pub use font::{FontChoice, resolve_font};
pub use frame::{FrameView, special_flash_phase};
pub use mesh::MeshRenderer;
pub use vertex::Vertex;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font cannot draw {0:?}")]
    MissingGlyphs(String),
    #[error("render surface lost")]
    SurfaceLost,
}

/// Consumes one frame snapshot per tick
pub trait Renderer {
    fn draw(&mut self, frame: &FrameView) -> Result<(), RenderError>;
}
