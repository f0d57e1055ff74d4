//! Partial and complete slot-to-word assignments.

use fillword_core::{Layout, SlotId, Vocabulary, WordId};

/// A partial mapping from slots to chosen words.
///
/// An assignment starts empty and is grown and shrunk by exactly one entry
/// per search step; it is complete when every slot of the layout it was
/// sized for has a word. The backtracking search owns its assignment
/// exclusively and undoes every tentative entry on failure, so a returned
/// assignment is always the one instance that was threaded through the
/// whole search.
///
/// # Examples
///
/// ```
/// use fillword_core::{Layout, Vocabulary};
/// use fillword_solver::Assignment;
///
/// let layout: Layout = "___".parse()?;
/// let vocab: Vocabulary = ["CAT"].into_iter().collect();
///
/// let mut assignment = Assignment::new(layout.slot_count());
/// assert!(!assignment.is_complete());
///
/// let slot = layout.slot_ids().next().unwrap();
/// let cat = vocab.ids().next().unwrap();
/// assignment.insert(slot, cat);
/// assert!(assignment.is_complete());
/// assert_eq!(assignment.get(slot), Some(cat));
/// # Ok::<(), fillword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    assigned: usize,
}

impl Assignment {
    /// Creates an empty assignment for `slot_count` slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            words: vec![None; slot_count],
            assigned: 0,
        }
    }

    /// Returns the word assigned to a slot, if any.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range for the assignment.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.words[slot.index()]
    }

    /// Assigns a word to an unassigned slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range or already assigned.
    pub fn insert(&mut self, slot: SlotId, word: WordId) {
        let entry = &mut self.words[slot.index()];
        assert!(entry.is_none(), "slot {slot} is already assigned");
        *entry = Some(word);
        self.assigned += 1;
    }

    /// Removes the word assigned to a slot, undoing an [`insert`](Self::insert).
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range or not assigned.
    pub fn remove(&mut self, slot: SlotId) {
        let entry = &mut self.words[slot.index()];
        assert!(entry.is_some(), "slot {slot} is not assigned");
        *entry = None;
        self.assigned -= 1;
    }

    /// Returns the number of assigned slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned
    }

    /// Returns `true` if no slot is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Returns `true` if every slot is assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned == self.words.len()
    }

    /// Returns an iterator over the `(slot, word)` entries in slot order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(index, word)| word.map(|word| (SlotId::new(index as u32), word)))
    }

    /// Returns the letters the assignment places on the grid, row by row.
    ///
    /// Cells not covered by an assigned slot are `None`; blocked cells are
    /// always `None`.
    ///
    /// # Panics
    ///
    /// Panics if the assignment was not built for `layout` and `vocab`.
    #[must_use]
    pub fn letter_grid(&self, layout: &Layout, vocab: &Vocabulary) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; layout.width()]; layout.height()];
        for (slot, word) in self.iter() {
            let word = vocab.get(word);
            for (offset, (row, col)) in layout.slot(slot).cells().enumerate() {
                letters[row][col] = Some(word.char_at(offset));
            }
        }
        letters
    }

    /// Renders the assignment as a text grid.
    ///
    /// Blocked cells are drawn as `█`, unfilled open cells as spaces. Each
    /// row ends with a newline.
    ///
    /// # Panics
    ///
    /// Panics if the assignment was not built for `layout` and `vocab`.
    #[must_use]
    pub fn render(&self, layout: &Layout, vocab: &Vocabulary) -> String {
        let letters = self.letter_grid(layout, vocab);
        let mut out = String::new();
        for (row, letters) in letters.iter().enumerate() {
            for (col, letter) in letters.iter().enumerate() {
                if layout.is_open(row, col) {
                    out.push(letter.unwrap_or(' '));
                } else {
                    out.push('█');
                }
            }
            out.push('\n');
        }
        out
    }
}
