//! Color constants and helpers

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            alpha,
        ]
    }

    /// Mean channel brightness (0-255)
    pub fn brightness(self) -> f32 {
        (self.0 as f32 + self.1 as f32 + self.2 as f32) / 3.0
    }
}

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const LIGHT_GRAY: Rgb = Rgb(200, 200, 200);
pub const PALE_GRAY: Rgb = Rgb(220, 220, 220);

pub const BACKGROUND: Rgb = BLACK;
pub const TEXT: Rgb = WHITE;
pub const INFO_TEXT: Rgb = LIGHT_GRAY;
pub const PADDLE: Rgb = PALE_GRAY;
pub const BALL: Rgb = WHITE;

/// Brick fill colors, picked by column
pub const BRICK_COLORS: [Rgb; 10] = [
    Rgb(255, 99, 71),   // tomato
    Rgb(255, 165, 0),   // orange
    Rgb(255, 215, 0),   // gold
    Rgb(144, 238, 144), // light green
    Rgb(135, 206, 250), // sky blue
    Rgb(216, 191, 216), // thistle
    Rgb(173, 216, 230), // light blue
    Rgb(240, 128, 128), // light coral
    Rgb(255, 182, 193), // light pink
    Rgb(152, 251, 152), // pale green
];

/// Explosive brick outline, alternated by flash phase
pub const SPECIAL_OUTLINE_COLORS: [Rgb; 2] = [Rgb(255, 69, 0), Rgb(255, 215, 0)];

/// Fill color for a brick in the given column
#[inline]
pub fn brick_color(col: usize) -> Rgb {
    BRICK_COLORS[col % BRICK_COLORS.len()]
}

/// Readable label color over `background`: white on dark, black on light
pub fn text_color_for_background(background: Rgb) -> Rgb {
    if background.brightness() < 140.0 {
        WHITE
    } else {
        BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_color_cycles_by_column() {
        assert_eq!(brick_color(0), BRICK_COLORS[0]);
        assert_eq!(brick_color(10), BRICK_COLORS[0]);
        assert_eq!(brick_color(13), BRICK_COLORS[3]);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in BRICK_COLORS.iter().enumerate() {
            for b in &BRICK_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_text_color_contrast() {
        assert_eq!(text_color_for_background(Rgb(20, 20, 20)), WHITE);
        assert_eq!(text_color_for_background(Rgb(255, 215, 0)), BLACK);
        // tomato: (255 + 99 + 71) / 3 = 141.67
        assert_eq!(text_color_for_background(Rgb(255, 99, 71)), BLACK);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(WHITE.to_rgba(0.5), [1.0, 1.0, 1.0, 0.5]);
    }
}
