//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grid layout settings.
///
/// Applied once when the painter starts up.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Grid width and height in beads (valid range: 1 - 32)
    #[serde(default = "default_dimension")]
    pub dimension: u32,

    /// Background color shown behind the beads
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorSpec,

    /// Width of the frame around the grid perimeter in pixels (valid range: 0 - 10)
    #[serde(default = "default_border_width")]
    pub border_width: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            grid_color: default_grid_color(),
            border_width: default_border_width(),
        }
    }
}

/// Palette settings.
///
/// Bleeding beads advance through these colors in order and stop at the last
/// one. At least two colors are required.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Ordered colors, each a name or an RGB array
    #[serde(default = "default_palette_colors")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
        }
    }
}

/// Paint accumulation settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaintConfig {
    /// Opacity added to the bead under the pointer (valid range: 1 - 255)
    #[serde(default = "default_main_step")]
    pub main_step: u8,

    /// Opacity bled into each neighbouring bead (valid range: 1 - 255)
    #[serde(default = "default_bleed_step")]
    pub bleed_step: u8,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            main_step: default_main_step(),
            bleed_step: default_bleed_step(),
        }
    }
}

/// Status line settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusConfig {
    /// Text shown above the grid
    #[serde(default = "default_status_text")]
    pub text: String,

    /// Status text color
    #[serde(default = "default_status_color")]
    pub color: ColorSpec,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            text: default_status_text(),
            color: default_status_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_dimension() -> u32 {
    10
}

fn default_grid_color() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_border_width() -> u8 {
    1
}

pub(super) fn default_palette_colors() -> Vec<ColorSpec> {
    ["red", "orange", "yellow", "green", "blue", "violet"]
        .into_iter()
        .map(ColorSpec::named)
        .collect()
}

fn default_main_step() -> u8 {
    crate::paint::DEFAULT_MAIN_STEP
}

fn default_bleed_step() -> u8 {
    crate::paint::DEFAULT_BLEED_STEP
}

fn default_status_text() -> String {
    "Click and Drag to Draw".to_string()
}

fn default_status_color() -> ColorSpec {
    ColorSpec::named("violet")
}
