//! Ordered color palette that bleeding cells advance through.

use super::color::{BLUE, Color, GREEN, ORANGE, RED, VIOLET, YELLOW};
use thiserror::Error;

/// Smallest palette that still has a non-terminal stage.
pub const MIN_PALETTE_LEN: usize = 2;

/// Errors raised when building a palette.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette needs at least 2 colors, got {0}")]
    TooShort(usize),
}

/// Fixed, ordered sequence of colors.
///
/// The last entry is the terminal stage: a cell that reaches it stays there
/// at full opacity. Indices past the end are clamped, never wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Builds a palette, rejecting sequences too short to cycle through.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.len() < MIN_PALETTE_LEN {
            return Err(PaletteError::TooShort(colors.len()));
        }
        Ok(Self { colors })
    }

    /// Number of colors (K).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the terminal color (K - 1).
    pub fn last_index(&self) -> usize {
        self.colors.len() - 1
    }

    /// Returns true when `index` is the terminal stage.
    pub fn is_terminal(&self, index: usize) -> bool {
        index >= self.last_index()
    }

    /// Looks up a color, clamping out-of-range indices to the terminal color.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index.min(self.last_index())]
    }

    /// First color; new cells start here.
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    /// Index following `index`, clamped to the terminal stage.
    pub fn advance(&self, index: usize) -> usize {
        (index + 1).min(self.last_index())
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    /// Rainbow palette: red, orange, yellow, green, blue, violet.
    fn default() -> Self {
        Self {
            colors: vec![RED, ORANGE, YELLOW, GREEN, BLUE, VIOLET],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_six_stages() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.last_index(), 5);
        assert_eq!(palette.color(5), VIOLET);
    }

    #[test]
    fn advance_clamps_at_terminal() {
        let palette = Palette::default();
        assert_eq!(palette.advance(0), 1);
        assert_eq!(palette.advance(4), 5);
        assert_eq!(palette.advance(5), 5);
        assert_eq!(palette.color(99), VIOLET);
    }

    #[test]
    fn rejects_single_color() {
        assert_eq!(Palette::new(vec![RED]), Err(PaletteError::TooShort(1)));
        assert!(Palette::new(vec![RED, BLUE]).is_ok());
    }
}
