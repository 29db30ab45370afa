//! Dirty cell tracking for incremental repaint.
//!
//! Collects the beads whose attributes changed since the host last drained
//! the tracker.

use std::collections::BTreeSet;

/// Tracks cells touched between repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    cells: BTreeSet<(u32, u32)>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire grid as dirty. Clears any accumulated cells.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.cells.clear();
    }

    /// Records a single cell unless the tracker is already full.
    pub fn mark_cell(&mut self, x: u32, y: u32) {
        if self.force_full {
            return;
        }
        self.cells.insert((x, y));
    }

    pub fn is_full(&self) -> bool {
        self.force_full
    }

    /// Drains the dirty cells gathered so far, in row-major order.
    ///
    /// When the full grid is marked, returns every cell of a
    /// `dimension`-wide grid.
    pub fn take_cells(&mut self, dimension: u32) -> Vec<(u32, u32)> {
        if self.force_full {
            self.force_full = false;
            self.cells.clear();
            return (0..dimension)
                .flat_map(|y| (0..dimension).map(move |x| (x, y)))
                .collect();
        }

        let mut cells: Vec<_> = std::mem::take(&mut self.cells).into_iter().collect();
        cells.sort_by_key(|&(x, y)| (y, x));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_cell_deduplicates() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_cell(1, 2);
        tracker.mark_cell(1, 2);
        tracker.mark_cell(0, 0);

        assert_eq!(tracker.take_cells(10), vec![(0, 0), (1, 2)]);
        assert!(tracker.take_cells(10).is_empty());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_cell(1, 1);
        tracker.mark_full();
        tracker.mark_cell(0, 1);

        let cells = tracker.take_cells(3);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[8], (2, 2));
        assert!(!tracker.is_full());
    }
}
