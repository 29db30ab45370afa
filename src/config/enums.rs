//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// grid_color = "white"
///
/// # Custom RGB color (0-255 per component)
/// grid_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, orange, yellow, green, blue, violet, white, black, gray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    pub fn named(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }

    /// Resolves the name, or `None` for an unknown name.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => name_to_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::new(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown color names resolve to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback);
            fallback
        })
    }
}
