use super::{CellData, GridHost};
use crate::draw::{Border, Color, DirtyTracker, color::*};
use log::trace;

/// Largest grid edge the host accepts.
pub const MAX_DIMENSION: u32 = 32;

/// Default grid edge before startup configures one.
const DEFAULT_DIMENSION: u32 = 8;

/// Attributes stored for one bead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Visible bead color
    pub color: Color,
    /// Color overlay opacity (0 = transparent, 255 = opaque)
    pub opacity: u8,
    /// Auxiliary data attached by the handler
    pub data: CellData,
    /// Edge decoration
    pub border: Border,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            color: WHITE,
            opacity: 255,
            data: CellData::new(WHITE, 0),
            border: Border {
                top: 1,
                left: 1,
                right: 1,
                bottom: 1,
            },
        }
    }
}

/// In-memory bead grid.
///
/// Stores attributes only. Every write is recorded in a [`DirtyTracker`] so a
/// renderer can repaint just the beads that changed.
#[derive(Debug)]
pub struct Grid {
    dimension: u32,
    cells: Vec<Cell>,
    grid_color: Color,
    status_color: Color,
    status_text: String,
    dirty: DirtyTracker,
}

impl Grid {
    /// Creates a grid of `dimension`×`dimension` default beads.
    ///
    /// The dimension is clamped to `1..=MAX_DIMENSION`.
    pub fn new(dimension: u32) -> Self {
        let mut grid = Self {
            dimension: 0,
            cells: Vec::new(),
            grid_color: WHITE,
            status_color: BLACK,
            status_text: String::new(),
            dirty: DirtyTracker::new(),
        };
        grid.set_dimension(dimension);
        grid
    }

    /// Returns the stored attributes of a bead.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    pub fn status_color(&self) -> Color {
        self.status_color
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Drains the beads modified since the last call, in row-major order.
    pub fn take_dirty(&mut self) -> Vec<(u32, u32)> {
        self.dirty.take_cells(self.dimension)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.dimension && y < self.dimension)
            .then(|| (y * self.dimension + x) as usize)
    }

    fn update(&mut self, x: u32, y: u32, apply: impl FnOnce(&mut Cell)) {
        match self.index(x, y) {
            Some(i) => {
                apply(&mut self.cells[i]);
                self.dirty.mark_cell(x, y);
            }
            None => trace!("Ignoring write to ({}, {}) outside grid", x, y),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl GridHost for Grid {
    fn dimension(&self) -> u32 {
        self.dimension
    }

    fn set_dimension(&mut self, dimension: u32) {
        let dimension = dimension.clamp(1, MAX_DIMENSION);
        self.dimension = dimension;
        self.cells = vec![Cell::default(); (dimension * dimension) as usize];
        self.dirty.mark_full();
    }

    fn opacity(&self, x: u32, y: u32) -> Option<u8> {
        self.cell(x, y).map(|cell| cell.opacity)
    }

    fn set_opacity(&mut self, x: u32, y: u32, opacity: u8) {
        self.update(x, y, |cell| cell.opacity = opacity);
    }

    fn data(&self, x: u32, y: u32) -> Option<CellData> {
        self.cell(x, y).map(|cell| cell.data)
    }

    fn set_data(&mut self, x: u32, y: u32, data: CellData) {
        self.update(x, y, |cell| cell.data = data);
    }

    fn set_color(&mut self, x: u32, y: u32, color: Color) {
        self.update(x, y, |cell| cell.color = color);
    }

    fn set_border(&mut self, x: u32, y: u32, border: Border) {
        self.update(x, y, |cell| cell.border = border);
    }

    fn set_grid_color(&mut self, color: Color) {
        self.grid_color = color;
    }

    fn set_status_color(&mut self, color: Color) {
        self.status_color = color;
    }

    fn set_status_text(&mut self, text: &str) {
        self.status_text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_clamps_dimension() {
        assert_eq!(Grid::new(0).dimension(), 1);
        assert_eq!(Grid::new(100).dimension(), MAX_DIMENSION);
        assert_eq!(Grid::new(10).all_cells().len(), 100);
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut grid = Grid::new(4);
        grid.take_dirty();

        grid.set_opacity(4, 0, 10);
        grid.set_color(0, 7, RED);

        assert_eq!(grid.opacity(4, 0), None);
        assert!(grid.data(0, 4).is_none());
        assert!(grid.take_dirty().is_empty());
    }

    #[test]
    fn writes_mark_cells_dirty() {
        let mut grid = Grid::new(4);
        assert_eq!(grid.take_dirty().len(), 16);

        grid.set_opacity(1, 2, 40);
        grid.set_data(3, 0, CellData::new(RED, 0));

        assert_eq!(grid.opacity(1, 2), Some(40));
        assert_eq!(grid.take_dirty(), vec![(3, 0), (1, 2)]);
    }

    #[test]
    fn cell_at_uses_strict_upper_bound() {
        let grid = Grid::new(10);
        assert_eq!(grid.cell_at(9, 9), Some((9, 9)));
        assert_eq!(grid.cell_at(10, 3), None);
        assert_eq!(grid.cell_at(-1, 0), None);
    }
}
