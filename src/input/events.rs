//! Pointer events delivered by a grid host.

use std::fmt;

/// Pointer transition over a bead.
///
/// Coordinates are signed so that hosts can forward raw positions; the
/// session validates them against the grid before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed or touch started over bead (x, y)
    Press { x: i32, y: i32 },
    /// Button released or touch lifted over bead (x, y)
    Release { x: i32, y: i32 },
    /// Pointer moved into bead (x, y)
    Enter { x: i32, y: i32 },
    /// Pointer left bead (x, y)
    Exit { x: i32, y: i32 },
}

impl PointerEvent {
    pub fn position(&self) -> (i32, i32) {
        match *self {
            PointerEvent::Press { x, y }
            | PointerEvent::Release { x, y }
            | PointerEvent::Enter { x, y }
            | PointerEvent::Exit { x, y } => (x, y),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PointerEvent::Press { .. } => "press",
            PointerEvent::Release { .. } => "release",
            PointerEvent::Enter { .. } => "enter",
            PointerEvent::Exit { .. } => "exit",
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.position();
        write!(f, "{} {} {}", self.name(), x, y)
    }
}
