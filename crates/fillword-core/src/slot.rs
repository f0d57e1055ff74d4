//! Slots: numbered, directional entry positions in a grid.

use std::fmt::{self, Display};

/// The direction a slot runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A crossword entry position: a start cell, a direction, and a fixed
/// length.
///
/// Slots are immutable and compared by identity (start cell, direction,
/// length). They are owned by a [`Layout`](crate::Layout); solvers only
/// read them.
///
/// # Examples
///
/// ```
/// use fillword_core::{Direction, Slot};
///
/// let slot = Slot::new(0, 1, Direction::Down, 3);
/// let cells: Vec<_> = slot.cells().collect();
/// assert_eq!(cells, [(0, 1), (1, 1), (2, 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    /// Direction the slot runs in.
    pub direction: Direction,
    /// Number of cells the slot covers.
    pub length: usize,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Returns an iterator over the `(row, col)` cells the slot covers, in
    /// word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Self {
            row,
            col,
            direction,
            length,
        } = *self;
        (0..length).map(move |k| match direction {
            Direction::Across => (row, col + k),
            Direction::Down => (row + k, col),
        })
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} of length {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// Identifier of a slot within a [`Layout`](crate::Layout).
///
/// Slot ids are only meaningful for the layout that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u32);

impl SlotId {
    /// Creates a slot id from a raw index.
    ///
    /// The id is only meaningful when `index` is less than the slot count
    /// of the layout it is used with.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the id as an index into the layout's slot list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_across() {
        let slot = Slot::new(2, 1, Direction::Across, 3);
        let cells: Vec<_> = slot.cells().collect();
        assert_eq!(cells, [(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_cells_down() {
        let slot = Slot::new(0, 4, Direction::Down, 2);
        let cells: Vec<_> = slot.cells().collect();
        assert_eq!(cells, [(0, 4), (1, 4)]);
    }

    #[test]
    fn test_display() {
        let slot = Slot::new(1, 2, Direction::Down, 4);
        assert_eq!(slot.to_string(), "(1, 2) down of length 4");
    }

    #[test]
    fn test_identity() {
        let a = Slot::new(0, 0, Direction::Across, 3);
        let b = Slot::new(0, 0, Direction::Down, 3);
        assert_ne!(a, b);
        assert_eq!(a, Slot::new(0, 0, Direction::Across, 3));
    }
}
