//! Serializable view of the grid for inspection and output.

use super::{Grid, GridHost};
use crate::draw::Border;
use serde::Serialize;
use std::fmt::Write as _;

/// Captured attributes of one bead.
#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub x: u32,
    pub y: u32,
    pub index: usize,
    pub color: String,
    pub opacity: u8,
    #[serde(skip_serializing_if = "Border::is_none")]
    pub border: Border,
}

/// Point-in-time copy of the whole grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot {
    pub dimension: u32,
    pub grid_color: String,
    pub status_text: String,
    pub status_color: String,
    pub cells: Vec<CellSnapshot>,
}

impl GridSnapshot {
    pub fn capture(grid: &Grid) -> Self {
        let cells = grid
            .all_cells()
            .into_iter()
            .filter_map(|(x, y)| {
                grid.cell(x, y).map(|cell| CellSnapshot {
                    x,
                    y,
                    index: cell.data.index,
                    color: cell.color.to_hex(),
                    opacity: cell.opacity,
                    border: cell.border,
                })
            })
            .collect();

        Self {
            dimension: grid.dimension(),
            grid_color: grid.grid_color().to_hex(),
            status_text: grid.status_text().to_string(),
            status_color: grid.status_color().to_hex(),
            cells,
        }
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<&CellSnapshot> {
        self.cells.iter().find(|cell| cell.x == x && cell.y == y)
    }

    /// Renders the grid as rows of `index:opacity` pairs.
    ///
    /// The first line carries the status text so the table reads like the
    /// host's own status line above the beads.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.status_text);
        for row in self.cells.chunks(self.dimension as usize) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{}:{:>3}", cell.index, cell.opacity))
                .collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }
}
