//! Neighbour-bleed painting.
//!
//! Entering a bead while the pointer is held fills it quickly and bleeds a
//! smaller amount of paint into the eight surrounding beads. A neighbour whose
//! opacity would reach the ceiling advances to the next palette color and
//! starts that stage faint, so a drag leaves a color-cycling trail behind it.

use crate::draw::Palette;
use crate::grid::{CellData, GridHost};
use crate::input::PointerState;
use log::trace;

/// Fully opaque.
pub const MAX_OPACITY: u8 = 255;

/// Default opacity added to the entered bead.
pub const DEFAULT_MAIN_STEP: u8 = 75;

/// Default opacity bled into each neighbour.
pub const DEFAULT_BLEED_STEP: u8 = 20;

/// Offsets of the eight beads around the entered one.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Opacity increments applied per enter event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintSettings {
    /// Added to the entered bead
    pub main_step: u8,
    /// Added to each neighbour; also the opacity a new color stage starts at
    pub bleed_step: u8,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            main_step: DEFAULT_MAIN_STEP,
            bleed_step: DEFAULT_BLEED_STEP,
        }
    }
}

/// What a single enter event changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintOutcome {
    /// The entered bead itself was written
    pub painted: bool,
    /// Neighbours that received paint
    pub bled: usize,
    /// Neighbours that moved to the next palette color
    pub advanced: usize,
}

impl PaintOutcome {
    pub fn is_noop(&self) -> bool {
        !self.painted && self.bled == 0
    }
}

/// Applies the fill-and-bleed rule to a grid host.
#[derive(Debug, Clone)]
pub struct PaintPropagator {
    palette: Palette,
    settings: PaintSettings,
}

impl PaintPropagator {
    pub fn new(palette: Palette, settings: PaintSettings) -> Self {
        Self { palette, settings }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn settings(&self) -> PaintSettings {
        self.settings
    }

    /// Paints bead (x, y) and bleeds into its neighbours.
    ///
    /// Does nothing unless `pointer.is_drawing`. Coordinates outside
    /// `[0, D)` are skipped individually, so entering an edge bead still
    /// bleeds into the in-range neighbours.
    pub fn on_enter(
        &self,
        pointer: &PointerState,
        grid: &mut dyn GridHost,
        x: i32,
        y: i32,
    ) -> PaintOutcome {
        let mut outcome = PaintOutcome::default();
        if !pointer.is_drawing {
            return outcome;
        }

        if let Some((cx, cy)) = grid.cell_at(x, y) {
            self.fill(grid, cx, cy);
            outcome.painted = true;
        }

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let Some((nx, ny)) = grid.cell_at(x.saturating_add(dx), y.saturating_add(dy)) else {
                continue;
            };
            outcome.bled += 1;
            if self.bleed(grid, nx, ny) {
                outcome.advanced += 1;
            }
        }

        outcome
    }

    fn fill(&self, grid: &mut dyn GridHost, x: u32, y: u32) {
        let index = stage_of(grid, x, y);
        let opacity = if self.palette.is_terminal(index) {
            MAX_OPACITY
        } else {
            grid.opacity(x, y)
                .unwrap_or(0)
                .saturating_add(self.settings.main_step)
        };
        grid.set_opacity(x, y, opacity);
    }

    /// Returns true when the neighbour advanced a color stage.
    fn bleed(&self, grid: &mut dyn GridHost, x: u32, y: u32) -> bool {
        let index = stage_of(grid, x, y);
        if self.palette.is_terminal(index) {
            grid.set_opacity(x, y, MAX_OPACITY);
            return false;
        }

        let current = grid.opacity(x, y).unwrap_or(0);
        let bled = u16::from(current) + u16::from(self.settings.bleed_step);
        if bled < u16::from(MAX_OPACITY) {
            grid.set_opacity(x, y, bled as u8);
            return false;
        }

        let next = self.palette.advance(index);
        let color = self.palette.color(next);
        grid.set_data(x, y, CellData::new(color, next));
        grid.set_color(x, y, color);

        let opacity = if self.palette.is_terminal(next) {
            MAX_OPACITY
        } else {
            self.settings.bleed_step
        };
        grid.set_opacity(x, y, opacity);
        trace!("Bead ({}, {}) advanced to stage {} ({})", x, y, next, color);
        true
    }
}

fn stage_of(grid: &dyn GridHost, x: u32, y: u32) -> usize {
    grid.data(x, y).map(|data| data.index).unwrap_or(0)
}
