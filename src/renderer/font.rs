//! Font selection with silent fallback
//!
//! Missing fonts only degrade text rendering; they never reach the game loop.

use super::RenderError;

/// The font a renderer ended up with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    /// A named family from the candidate list
    Family(String),
    /// The backend's built-in font (ASCII only)
    Default,
}

impl FontChoice {
    /// Check that this font can draw `text`
    pub fn supports(&self, text: &str) -> Result<(), RenderError> {
        match self {
            FontChoice::Family(_) => Ok(()),
            FontChoice::Default if text.is_ascii() => Ok(()),
            FontChoice::Default => Err(RenderError::MissingGlyphs(text.to_string())),
        }
    }
}

/// Pick the first candidate the backend has, falling back to the default font
pub fn resolve_font<S: AsRef<str>>(
    candidates: &[S],
    is_available: impl Fn(&str) -> bool,
) -> FontChoice {
    match candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|name| is_available(name))
    {
        Some(name) => {
            log::debug!("Using font family {name}");
            FontChoice::Family(name.to_string())
        }
        None => {
            log::debug!("No candidate font available, using the default font");
            FontChoice::Default
        }
    }
}
