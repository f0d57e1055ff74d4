//! Grid layouts: open and blocked cells, the slots they form, and the
//! overlap constraints between crossing slots.

use std::{collections::HashMap, str::FromStr};

use crate::{Direction, Slot, SlotId};

/// The character-offset pair at which two crossing slots must agree.
///
/// For an overlap returned by [`Layout::overlap`]`(x, y)`, character `a` of
/// the word in `x` must equal character `b` of the word in `y`. The mapping
/// is symmetric: `overlap(y, x)` describes the same shared cell with the
/// roles swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Character offset within the first slot.
    pub a: usize,
    /// Character offset within the second slot.
    pub b: usize,
}

impl Overlap {
    /// Returns the same overlap with the slot roles swapped.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Errors that can occur when building a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The grid has no rows or no columns.
    #[display("layout has no cells")]
    Empty,
    /// A row's length differs from the first row's length.
    #[display("row {row} has a different length than row 0")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
    },
    /// A character in the textual form is neither open nor blocked.
    #[display("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedCharacter {
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

/// A crossword grid skeleton.
///
/// A layout is built once from a rectangular grid of open and blocked
/// cells. Construction computes everything a solver needs:
///
/// - the **slots**: maximal horizontal and vertical runs of open cells of
///   length ≥ 2 (a lone open cell never forms a slot);
/// - the **overlaps**: for every across/down pair sharing a cell, the
///   character offsets at which their words must agree;
/// - the **neighbors** of each slot: the slots it shares a cell with.
///
/// Well-formedness beyond rectangularity is assumed, not validated: two
/// slots can share at most one cell because parallel maximal runs never
/// intersect.
///
/// # Examples
///
/// ```
/// use fillword_core::{Direction, Layout, Overlap, Slot};
///
/// let layout: Layout = "
///     ___
///     #_#
///     #_#
/// "
/// .parse()?;
///
/// let slots = layout.slots();
/// assert_eq!(slots[0], Slot::new(0, 0, Direction::Across, 3));
/// assert_eq!(slots[1], Slot::new(0, 1, Direction::Down, 3));
///
/// // The shared cell (0, 1) is character 1 of the across word and
/// // character 0 of the down word.
/// let ids: Vec<_> = layout.slot_ids().collect();
/// let (across, down) = (ids[0], ids[1]);
/// assert_eq!(layout.overlap(across, down), Some(Overlap { a: 1, b: 0 }));
/// assert_eq!(layout.overlap(down, across), Some(Overlap { a: 0, b: 1 }));
/// # Ok::<(), fillword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    width: usize,
    height: usize,
    open: Vec<bool>,
    slots: Vec<Slot>,
    neighbors: Vec<Vec<SlotId>>,
    overlaps: HashMap<(SlotId, SlotId), Overlap>,
}

impl Layout {
    /// Builds a layout from rows of cells, `true` meaning open.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] if there are no rows or the rows have
    /// no columns, and [`LayoutError::RaggedRow`] if the rows differ in
    /// length.
    pub fn new(rows: &[Vec<bool>]) -> Result<Self, LayoutError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(LayoutError::RaggedRow { row });
        }

        let open: Vec<bool> = rows.iter().flatten().copied().collect();
        let slots = find_slots(&open, width, height);
        let (neighbors, overlaps) = find_overlaps(&slots);

        Ok(Self {
            width,
            height,
            open,
            slots,
            neighbors,
            overlaps,
        })
    }

    /// Returns the grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the cell at `(row, col)` is open.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    #[must_use]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width);
        self.open[row * self.width + col]
    }

    /// Returns all slots, indexed by [`SlotId`].
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot for an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this layout.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Slot {
        self.slots[id.index()]
    }

    /// Returns an iterator over all slot ids.
    #[expect(clippy::cast_possible_truncation)]
    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + use<> {
        (0..self.slots.len() as u32).map(SlotId::new)
    }

    /// Returns the slots sharing a cell with `id`, in ascending id order.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this layout.
    #[must_use]
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id.index()]
    }

    /// Returns the overlap constraint between two slots, or `None` if they
    /// share no cell.
    #[must_use]
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    /// Parses a layout from text, one row per line.
    ///
    /// `_` and `.` are open cells, `#` and `█` are blocked cells. Leading
    /// and trailing whitespace around each row is ignored, as are blank
    /// lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_index = rows.len();
            let mut row = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '_' | '.' => row.push(true),
                    '#' | '█' => row.push(false),
                    _ => {
                        return Err(LayoutError::UnexpectedCharacter {
                            row: row_index,
                            col,
                            ch,
                        });
                    }
                }
            }
            rows.push(row);
        }
        Self::new(&rows)
    }
}

/// Scans the grid for maximal open runs of length ≥ 2, across then down.
fn find_slots(open: &[bool], width: usize, height: usize) -> Vec<Slot> {
    let at = |row: usize, col: usize| open[row * width + col];
    let mut slots = Vec::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            let length = (col..width).take_while(|&c| at(row, c)).count();
            if length >= 2 {
                slots.push(Slot::new(row, col, Direction::Across, length));
            }
            col += length.max(1);
        }
    }
    for col in 0..width {
        let mut row = 0;
        while row < height {
            let length = (row..height).take_while(|&r| at(r, col)).count();
            if length >= 2 {
                slots.push(Slot::new(row, col, Direction::Down, length));
            }
            row += length.max(1);
        }
    }
    slots
}

/// Computes neighbor lists and the symmetric overlap map.
///
/// Parallel slots never share a cell, so only across/down pairs are
/// considered: each open cell is covered by at most one slot per direction.
fn find_overlaps(slots: &[Slot]) -> (Vec<Vec<SlotId>>, HashMap<(SlotId, SlotId), Overlap>) {
    let mut cover: HashMap<(usize, usize), (SlotId, usize)> = HashMap::new();
    for (id, slot) in ids(slots).zip(slots) {
        if slot.direction == Direction::Across {
            for (offset, cell) in slot.cells().enumerate() {
                cover.insert(cell, (id, offset));
            }
        }
    }

    let mut neighbors = vec![Vec::new(); slots.len()];
    let mut overlaps = HashMap::new();
    for (down_id, slot) in ids(slots).zip(slots) {
        if slot.direction != Direction::Down {
            continue;
        }
        for (down_offset, cell) in slot.cells().enumerate() {
            let Some(&(across_id, across_offset)) = cover.get(&cell) else {
                continue;
            };
            let overlap = Overlap {
                a: across_offset,
                b: down_offset,
            };
            overlaps.insert((across_id, down_id), overlap);
            overlaps.insert((down_id, across_id), overlap.swapped());
            neighbors[across_id.index()].push(down_id);
            neighbors[down_id.index()].push(across_id);
        }
    }
    for list in &mut neighbors {
        list.sort_unstable();
    }
    (neighbors, overlaps)
}

#[expect(clippy::cast_possible_truncation)]
fn ids(slots: &[Slot]) -> impl Iterator<Item = SlotId> + use<> {
    (0..slots.len() as u32).map(SlotId::new)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn layout(s: &str) -> Layout {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_row() {
        let layout = layout("___");
        assert_eq!(layout.slots(), [Slot::new(0, 0, Direction::Across, 3)]);
        assert!(layout.neighbors(SlotId::new(0)).is_empty());
    }

    #[test]
    fn test_lone_cells_form_no_slot() {
        let layout = layout(
            "
            _#_
            ###
            _#_
            ",
        );
        assert_eq!(layout.slot_count(), 0);
    }

    #[test]
    fn test_crossing_slots() {
        // Across (0,0) length 3 crosses down (0,1) length 3 at cell (0,1).
        let layout = layout(
            "
            ___
            #_#
            #_#
            ",
        );
        assert_eq!(
            layout.slots(),
            [
                Slot::new(0, 0, Direction::Across, 3),
                Slot::new(0, 1, Direction::Down, 3),
            ]
        );
        assert_eq!(
            layout.overlap(SlotId::new(0), SlotId::new(1)),
            Some(Overlap { a: 1, b: 0 })
        );
        assert_eq!(
            layout.overlap(SlotId::new(1), SlotId::new(0)),
            Some(Overlap { a: 0, b: 1 })
        );
        assert_eq!(layout.neighbors(SlotId::new(0)), [SlotId::new(1)]);
        assert_eq!(layout.neighbors(SlotId::new(1)), [SlotId::new(0)]);
    }

    #[test]
    fn test_parallel_slots_do_not_overlap() {
        let layout = layout(
            "
            ___
            ###
            ___
            ",
        );
        assert_eq!(layout.slot_count(), 2);
        assert_eq!(layout.overlap(SlotId::new(0), SlotId::new(1)), None);
        assert!(layout.neighbors(SlotId::new(0)).is_empty());
    }

    #[test]
    fn test_runs_split_by_blocked_cells() {
        let layout = layout("__#___");
        assert_eq!(
            layout.slots(),
            [
                Slot::new(0, 0, Direction::Across, 2),
                Slot::new(0, 3, Direction::Across, 3),
            ]
        );
    }

    #[test]
    fn test_open_grid_cell_queries() {
        let layout = layout(
            "
            __
            #_
            ",
        );
        assert_eq!((layout.width(), layout.height()), (2, 2));
        assert!(layout.is_open(0, 0));
        assert!(!layout.is_open(1, 0));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!("".parse::<Layout>().unwrap_err(), LayoutError::Empty);
        assert_eq!(Layout::new(&[]).unwrap_err(), LayoutError::Empty);
        assert_eq!(Layout::new(&[Vec::new()]).unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let input = "
            ___
            __
        ";
        assert_eq!(
            input.parse::<Layout>().unwrap_err(),
            LayoutError::RaggedRow { row: 1 }
        );
    }

    #[test]
    fn test_unexpected_character_rejected() {
        assert_eq!(
            "_x_".parse::<Layout>().unwrap_err(),
            LayoutError::UnexpectedCharacter {
                row: 0,
                col: 1,
                ch: 'x'
            }
        );
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (1..7usize).prop_flat_map(|width| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), width..=width), 1..7)
        })
    }

    proptest! {
        #[test]
        fn prop_slots_are_maximal_open_runs(rows in arb_rows()) {
            let layout = Layout::new(&rows).unwrap();
            for slot in layout.slots() {
                prop_assert!(slot.length >= 2);
                for (row, col) in slot.cells() {
                    prop_assert!(layout.is_open(row, col));
                }
                // The cells just before and after the run are blocked or
                // out of bounds.
                let before = match slot.direction {
                    Direction::Across => slot.col.checked_sub(1).map(|c| (slot.row, c)),
                    Direction::Down => slot.row.checked_sub(1).map(|r| (r, slot.col)),
                };
                let after = match slot.direction {
                    Direction::Across => (slot.col + slot.length < layout.width())
                        .then(|| (slot.row, slot.col + slot.length)),
                    Direction::Down => (slot.row + slot.length < layout.height())
                        .then(|| (slot.row + slot.length, slot.col)),
                };
                for (row, col) in before.into_iter().chain(after) {
                    prop_assert!(!layout.is_open(row, col));
                }
            }
        }

        #[test]
        fn prop_overlaps_are_symmetric_shared_cells(rows in arb_rows()) {
            let layout = Layout::new(&rows).unwrap();
            for x in layout.slot_ids() {
                for y in layout.slot_ids() {
                    if x == y {
                        continue;
                    }
                    let forward = layout.overlap(x, y);
                    prop_assert_eq!(layout.overlap(y, x), forward.map(Overlap::swapped));
                    prop_assert_eq!(layout.neighbors(x).contains(&y), forward.is_some());
                    if let Some(overlap) = forward {
                        let cell_x = layout.slot(x).cells().nth(overlap.a);
                        let cell_y = layout.slot(y).cells().nth(overlap.b);
                        prop_assert_eq!(cell_x, cell_y);
                        prop_assert!(cell_x.is_some());
                    }
                }
            }
        }
    }
}
