//! Pointer press state owned by the host.

/// Whether the pointer is currently held down over the grid.
///
/// Only press and release notifications change this; painting reads it to
/// decide whether an enter event has any effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub is_drawing: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.is_drawing = true;
    }

    pub fn release(&mut self) {
        self.is_drawing = false;
    }
}
