//! Grid host contract and the in-memory bead grid.
//!
//! [`GridHost`] is the accessor surface a painting handler writes through. The
//! host owns the cells; handlers only ever read and write attributes of
//! individual beads. [`Grid`] is the bundled implementation used by
//! [`Session`](crate::session::Session), tests and the CLI.

mod memory;
mod snapshot;

pub use memory::{Cell, Grid, MAX_DIMENSION};
pub use snapshot::{CellSnapshot, GridSnapshot};

use crate::draw::{Border, Color};
use serde::Serialize;

/// Auxiliary per-bead data: the resolved palette color plus its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellData {
    pub color: Color,
    pub index: usize,
}

impl CellData {
    pub fn new(color: Color, index: usize) -> Self {
        Self { color, index }
    }
}

/// Accessors a grid host exposes to its event handler.
///
/// Coordinates passed to setters are expected to lie within
/// `[0, dimension())`; implementations ignore writes outside that range and
/// return `None` from getters.
pub trait GridHost {
    /// Width and height of the square grid.
    fn dimension(&self) -> u32;

    /// Resizes the grid. Every bead reverts to the host defaults.
    fn set_dimension(&mut self, dimension: u32);

    fn opacity(&self, x: u32, y: u32) -> Option<u8>;
    fn set_opacity(&mut self, x: u32, y: u32, opacity: u8);

    fn data(&self, x: u32, y: u32) -> Option<CellData>;
    fn set_data(&mut self, x: u32, y: u32, data: CellData);

    fn set_color(&mut self, x: u32, y: u32, color: Color);
    fn set_border(&mut self, x: u32, y: u32, border: Border);

    fn set_grid_color(&mut self, color: Color);
    fn set_status_color(&mut self, color: Color);
    fn set_status_text(&mut self, text: &str);

    /// Maps signed coordinates onto the grid, strictly within `[0, D)`.
    fn cell_at(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let dimension = self.dimension();
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < dimension && y < dimension).then_some((x, y))
    }

    /// Row-major list of every bead coordinate.
    fn all_cells(&self) -> Vec<(u32, u32)> {
        let dimension = self.dimension();
        (0..dimension)
            .flat_map(|y| (0..dimension).map(move |x| (x, y)))
            .collect()
    }
}
