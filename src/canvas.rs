//! Grid-cell canvas: the single owner of the filled-cell set.
//!
//! [`GridCanvas`] holds the set of currently filled cells behind a narrow
//! mutation API. The rasterization algorithms record their output through
//! [`GridCanvas::mark_filled`]; a UI embedding toggles cells under the cursor
//! through [`GridCanvas::toggle`] and reads [`GridCanvas::snapshot`] to paint.

use std::collections::HashSet;

use crate::geometry::Cell;

/// Set of filled grid cells with a narrow mutation interface.
///
/// The backing set is never exposed mutably; all writes go through
/// [`toggle`](Self::toggle), [`mark_filled`](Self::mark_filled), and
/// [`clear`](Self::clear). The canvas is an ordinary owned value with no
/// internal synchronization — a multi-threaded embedding must wrap it in its
/// own lock.
///
/// # Example
///
/// ```
/// use gridraster::canvas::GridCanvas;
/// use gridraster::geometry::Cell;
///
/// let mut grid = GridCanvas::new();
/// grid.mark_filled(Cell::new(2, 3));
/// grid.toggle(Cell::new(0, 0));
/// assert_eq!(grid.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridCanvas {
    filled: HashSet<Cell>,
}

impl GridCanvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the membership of a cell: remove it if present, insert otherwise.
    ///
    /// Applying `toggle` twice restores the prior membership state.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.filled.remove(&cell) {
            self.filled.insert(cell);
        }
    }

    /// Mark a cell filled unconditionally.
    ///
    /// Idempotent: marking an already-filled cell is a no-op.
    pub fn mark_filled(&mut self, cell: Cell) {
        self.filled.insert(cell);
    }

    /// Remove every filled cell.
    pub fn clear(&mut self) {
        self.filled.clear();
    }

    /// Whether a cell is currently filled.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.filled.contains(&cell)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    /// Whether no cells are filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    /// Read-only view of the filled-cell set, for rendering.
    ///
    /// The shared borrow cannot mutate the set, so all writes still funnel
    /// through the mutation API.
    #[must_use]
    pub fn snapshot(&self) -> &HashSet<Cell> {
        &self.filled
    }

    /// Iterate over the filled cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.filled.iter().copied()
    }
}

impl<'a> IntoIterator for &'a GridCanvas {
    type Item = &'a Cell;
    type IntoIter = std::collections::hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.filled.iter()
    }
}
