//! RGB color type and predefined color constants.

use serde::Serialize;
use std::fmt;

/// Represents a 24-bit RGB bead color.
///
/// Opacity is tracked per cell rather than per color, so colors carry no alpha.
///
/// # Examples
///
/// ```
/// use inkbleed::draw::Color;
/// let red = Color { r: 255, g: 0, b: 0 };
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_rgb24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (0xFF0000)
pub const RED: Color = Color::from_rgb24(0xFF0000);

/// Predefined orange color (0xFF8000)
pub const ORANGE: Color = Color::from_rgb24(0xFF8000);

/// Predefined yellow color (0xFFFF00)
pub const YELLOW: Color = Color::from_rgb24(0xFFFF00);

/// Predefined green color (0x00FF00)
pub const GREEN: Color = Color::from_rgb24(0x00FF00);

/// Predefined blue color (0x0000FF)
pub const BLUE: Color = Color::from_rgb24(0x0000FF);

/// Predefined violet color (0x8000FF)
pub const VIOLET: Color = Color::from_rgb24(0x8000FF);

/// Predefined white color (0xFFFFFF)
pub const WHITE: Color = Color::from_rgb24(0xFFFFFF);

/// Predefined black color (0x000000)
pub const BLACK: Color = Color::from_rgb24(0x000000);

/// Predefined gray color (0x808080)
pub const GRAY: Color = Color::from_rgb24(0x808080);

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
/// Names are case-insensitive; "purple" is accepted as an alias for violet.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "violet" | "purple" => Some(VIOLET),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_values_unpack_per_channel() {
        assert_eq!(ORANGE, Color::new(255, 128, 0));
        assert_eq!(VIOLET.to_hex(), "#8000ff");
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_color("Violet"), Some(VIOLET));
        assert_eq!(name_to_color("PURPLE"), Some(VIOLET));
        assert_eq!(name_to_color("teal"), None);
    }
}
