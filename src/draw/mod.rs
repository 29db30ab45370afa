//! Bead appearance primitives.
//!
//! This module defines the visual vocabulary shared by the grid and the painter:
//! - [`Color`]: 24-bit RGB color with predefined constants
//! - [`Palette`]: ordered colors a bleeding cell advances through
//! - [`Border`]: per-edge bead border widths
//! - [`DirtyTracker`]: cells awaiting repaint

pub mod border;
pub mod color;
pub mod dirty;
pub mod palette;

// Re-export commonly used types at module level
pub use border::Border;
pub use color::Color;
pub use dirty::DirtyTracker;
pub use palette::{Palette, PaletteError};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, RED, VIOLET, WHITE, YELLOW};
