//! Event handler capability and the painting handler.

use super::propagator::{PaintOutcome, PaintPropagator};
use crate::draw::{Border, Color, color::*};
use crate::grid::{CellData, GridHost};
use crate::input::PointerState;
use log::{debug, info};

/// Callbacks a grid host invokes on its registered handler.
///
/// Calls arrive synchronously, one at a time, with coordinates already
/// validated by the host.
pub trait GridEventHandler {
    /// Called once before any pointer events, to size and decorate the grid.
    fn on_startup(&mut self, grid: &mut dyn GridHost);

    /// Pointer pressed (or touch started) over bead (x, y).
    fn on_press(&mut self, pointer: &mut PointerState, x: i32, y: i32);

    /// Pointer released (or touch lifted) over bead (x, y).
    fn on_release(&mut self, pointer: &mut PointerState, x: i32, y: i32);

    /// Pointer moved into bead (x, y).
    fn on_pointer_enter(
        &mut self,
        pointer: &PointerState,
        grid: &mut dyn GridHost,
        x: i32,
        y: i32,
    );

    /// Pointer left bead (x, y).
    fn on_pointer_exit(&mut self, _pointer: &PointerState, _x: i32, _y: i32) {}
}

/// Grid-wide presentation applied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupLayout {
    /// Grid width and height in beads
    pub dimension: u32,
    /// Background color behind the beads
    pub grid_color: Color,
    /// Width of the frame drawn around the grid perimeter
    pub border_width: u8,
    /// Status line text
    pub status_text: String,
    /// Status line color
    pub status_color: Color,
}

impl Default for StartupLayout {
    fn default() -> Self {
        Self {
            dimension: 10,
            grid_color: WHITE,
            border_width: 1,
            status_text: "Click and Drag to Draw".to_string(),
            status_color: VIOLET,
        }
    }
}

/// Click-and-drag painter.
///
/// Startup clears every bead to the first palette color at zero opacity and
/// frames the grid. Press and release toggle drawing; enter events run the
/// propagator.
#[derive(Debug, Clone)]
pub struct PaintHandler {
    propagator: PaintPropagator,
    layout: StartupLayout,
    last_outcome: PaintOutcome,
}

impl PaintHandler {
    pub fn new(propagator: PaintPropagator, layout: StartupLayout) -> Self {
        Self {
            propagator,
            layout,
            last_outcome: PaintOutcome::default(),
        }
    }

    pub fn propagator(&self) -> &PaintPropagator {
        &self.propagator
    }

    pub fn layout(&self) -> &StartupLayout {
        &self.layout
    }

    /// Result of the most recent enter event.
    pub fn last_outcome(&self) -> PaintOutcome {
        self.last_outcome
    }
}

impl GridEventHandler for PaintHandler {
    fn on_startup(&mut self, grid: &mut dyn GridHost) {
        grid.set_dimension(self.layout.dimension);
        grid.set_grid_color(self.layout.grid_color);
        grid.set_status_color(self.layout.status_color);
        grid.set_status_text(&self.layout.status_text);

        let first = self.propagator.palette().first();
        let dimension = grid.dimension();
        for (x, y) in grid.all_cells() {
            grid.set_color(x, y, first);
            grid.set_opacity(x, y, 0);
            grid.set_data(x, y, CellData::new(first, 0));
            grid.set_border(
                x,
                y,
                Border::perimeter(x, y, dimension, self.layout.border_width),
            );
        }

        info!(
            "Painter ready: {}x{} grid, {} palette colors",
            dimension,
            dimension,
            self.propagator.palette().len()
        );
    }

    fn on_press(&mut self, pointer: &mut PointerState, x: i32, y: i32) {
        debug!("Drawing started at ({}, {})", x, y);
        pointer.press();
    }

    fn on_release(&mut self, pointer: &mut PointerState, x: i32, y: i32) {
        debug!("Drawing stopped at ({}, {})", x, y);
        pointer.release();
    }

    fn on_pointer_enter(
        &mut self,
        pointer: &PointerState,
        grid: &mut dyn GridHost,
        x: i32,
        y: i32,
    ) {
        self.last_outcome = self.propagator.on_enter(pointer, grid, x, y);
        if !self.last_outcome.is_noop() {
            debug!(
                "Painted ({}, {}): {} neighbours bled, {} advanced",
                x, y, self.last_outcome.bled, self.last_outcome.advanced
            );
        }
    }
}
