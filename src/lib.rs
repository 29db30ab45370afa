//! Ink-bleed painting on a bead grid.
//!
//! Dragging across the grid fills the bead under the pointer and bleeds paint
//! into its neighbours, which cycle through a palette as they saturate. The
//! painter talks to its host only through [`grid::GridHost`]; [`session::Session`]
//! and [`grid::Grid`] provide an in-memory host for replaying pointer events.

pub mod config;
pub mod draw;
pub mod grid;
pub mod input;
pub mod paint;
pub mod session;

pub use config::Config;
pub use session::Session;
