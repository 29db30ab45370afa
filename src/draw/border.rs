//! Bead border decoration.

use serde::Serialize;

/// Per-edge border widths for a single bead, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Border {
    pub top: u8,
    pub left: u8,
    pub right: u8,
    pub bottom: u8,
}

impl Border {
    /// No border on any edge.
    pub const NONE: Border = Border {
        top: 0,
        left: 0,
        right: 0,
        bottom: 0,
    };

    /// Border that outlines the grid perimeter.
    ///
    /// Only the edges of `(x, y)` that lie on the outside of a `dimension`-wide
    /// grid get `width`; inner edges stay at zero so the grid reads as one
    /// framed sheet.
    pub fn perimeter(x: u32, y: u32, dimension: u32, width: u8) -> Self {
        let last = dimension.saturating_sub(1);
        let edge = |on_edge: bool| if on_edge { width } else { 0 };
        Self {
            top: edge(y == 0),
            left: edge(x == 0),
            right: edge(x == last),
            bottom: edge(y == last),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
