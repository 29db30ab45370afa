//! Host-side event dispatch.
//!
//! A [`Session`] owns the bead grid and the pointer state, registers one
//! [`GridEventHandler`] at construction, and feeds it pointer events one at a
//! time. Events whose coordinates fall outside the grid are dropped before
//! they reach the handler.

use crate::grid::{Grid, GridHost, GridSnapshot};
use crate::input::{PointerEvent, PointerState};
use crate::paint::GridEventHandler;
use log::{debug, info, warn};

/// Result of dispatching a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The handler ran; these beads changed and need repainting.
    Handled { dirty: Vec<(u32, u32)> },
    /// The event was outside the grid and never reached the handler.
    Dropped,
}

/// Counters accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub handled: usize,
    pub dropped: usize,
    pub repainted: usize,
}

/// Single-threaded host that drives a registered handler.
pub struct Session<H: GridEventHandler> {
    grid: Grid,
    pointer: PointerState,
    handler: H,
    stats: SessionStats,
}

impl<H: GridEventHandler> Session<H> {
    /// Registers `handler` with `grid` and runs its startup hook.
    pub fn new(mut grid: Grid, mut handler: H) -> Self {
        handler.on_startup(&mut grid);
        grid.take_dirty();
        info!(
            "Session started on {}x{} grid",
            grid.dimension(),
            grid.dimension()
        );

        Self {
            grid,
            pointer: PointerState::new(),
            handler,
            stats: SessionStats::default(),
        }
    }

    /// Delivers one event to the handler.
    pub fn dispatch(&mut self, event: PointerEvent) -> Dispatch {
        let (x, y) = event.position();
        if self.grid.cell_at(x, y).is_none() {
            warn!("Dropping {} outside {}-bead grid", event, self.grid.dimension());
            self.stats.dropped += 1;
            return Dispatch::Dropped;
        }

        match event {
            PointerEvent::Press { x, y } => self.handler.on_press(&mut self.pointer, x, y),
            PointerEvent::Release { x, y } => self.handler.on_release(&mut self.pointer, x, y),
            PointerEvent::Enter { x, y } => {
                self.handler
                    .on_pointer_enter(&self.pointer, &mut self.grid, x, y)
            }
            PointerEvent::Exit { x, y } => self.handler.on_pointer_exit(&self.pointer, x, y),
        }

        let dirty = self.grid.take_dirty();
        debug!("Handled {} ({} beads dirty)", event, dirty.len());
        self.stats.handled += 1;
        self.stats.repainted += dirty.len();
        Dispatch::Handled { dirty }
    }

    /// Delivers every event in order.
    pub fn run(&mut self, events: impl IntoIterator<Item = PointerEvent>) -> SessionStats {
        for event in events {
            self.dispatch(event);
        }
        self.stats
    }

    /// Re-runs startup, returning every bead to its initial state.
    pub fn reset(&mut self) {
        self.pointer = PointerState::new();
        self.handler.on_startup(&mut self.grid);
        self.grid.take_dirty();
        debug!("Session reset");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.grid)
    }
}

#[cfg(test)]
mod tests;
