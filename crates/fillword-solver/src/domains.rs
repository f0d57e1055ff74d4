//! The domain store: per-slot sets of admissible candidate words.

use std::collections::HashSet;

use fillword_core::{Layout, SlotId, Vocabulary, WordId};

/// A mutable mapping from each slot to its remaining candidate words.
///
/// Domains start as the full vocabulary for every slot and only ever
/// shrink: the consistency passes of [`Solver`](crate::Solver) remove
/// candidates, and the backtracking search reads the result without
/// touching it.
///
/// # Examples
///
/// ```
/// use fillword_core::{Layout, Vocabulary};
/// use fillword_solver::Domains;
///
/// let layout: Layout = "___".parse()?;
/// let vocab: Vocabulary = ["CAT", "DOG"].into_iter().collect();
///
/// let domains = Domains::new(&layout, &vocab);
/// let slot = layout.slot_ids().next().unwrap();
/// assert_eq!(domains.len(slot), 2);
/// # Ok::<(), fillword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Domains {
    sets: Vec<HashSet<WordId>>,
}

impl Domains {
    /// Creates a domain store mapping every slot of `layout` to the full
    /// vocabulary.
    #[must_use]
    pub fn new(layout: &Layout, vocab: &Vocabulary) -> Self {
        let full: HashSet<WordId> = vocab.ids().collect();
        Self {
            sets: vec![full; layout.slot_count()],
        }
    }

    /// Returns the candidate set for a slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not belong to the layout the store was built
    /// from.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> &HashSet<WordId> {
        &self.sets[slot.index()]
    }

    /// Returns the number of candidates remaining for a slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not belong to the layout the store was built
    /// from.
    #[must_use]
    pub fn len(&self, slot: SlotId) -> usize {
        self.sets[slot.index()].len()
    }

    /// Returns `true` if the store covers no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Removes every candidate of `slot` for which `keep` returns `false`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn retain(&mut self, slot: SlotId, mut keep: impl FnMut(WordId) -> bool) -> bool {
        let set = &mut self.sets[slot.index()];
        let before = set.len();
        set.retain(|&word| keep(word));
        set.len() != before
    }

    /// Borrows the candidate set of `x` mutably together with the set of
    /// `y` immutably.
    ///
    /// # Panics
    ///
    /// Panics if `x == y` or either slot is out of range.
    pub(crate) fn pair_mut(&mut self, x: SlotId, y: SlotId) -> (&mut HashSet<WordId>, &HashSet<WordId>) {
        let (x, y) = (x.index(), y.index());
        assert_ne!(x, y);
        if x < y {
            let (head, tail) = self.sets.split_at_mut(y);
            (&mut head[x], &tail[0])
        } else {
            let (head, tail) = self.sets.split_at_mut(x);
            (&mut tail[0], &head[y])
        }
    }
}

#[cfg(test)]
mod tests {
    use fillword_core::Layout;

    use super::*;

    fn fixtures() -> (Layout, Vocabulary) {
        let layout = "
            ___
            #_#
            #_#
        "
        .parse()
        .unwrap();
        let vocab = ["CAT", "DOG", "ACE"].into_iter().collect();
        (layout, vocab)
    }

    #[test]
    fn test_new_maps_every_slot_to_full_vocabulary() {
        let (layout, vocab) = fixtures();
        let domains = Domains::new(&layout, &vocab);
        for slot in layout.slot_ids() {
            assert_eq!(domains.len(slot), vocab.len());
        }
    }

    #[test]
    fn test_retain_shrinks_and_reports() {
        let (layout, vocab) = fixtures();
        let mut domains = Domains::new(&layout, &vocab);
        let slot = layout.slot_ids().next().unwrap();

        let cat = vocab.ids().next().unwrap();
        assert!(domains.retain(slot, |word| word == cat));
        assert_eq!(domains.len(slot), 1);

        // Nothing left to remove.
        assert!(!domains.retain(slot, |word| word == cat));
    }

    #[test]
    fn test_pair_mut_borrows_both_orders() {
        let (layout, vocab) = fixtures();
        let mut domains = Domains::new(&layout, &vocab);
        let ids: Vec<_> = layout.slot_ids().collect();

        let (x, y) = domains.pair_mut(ids[0], ids[1]);
        assert_eq!(x.len(), y.len());
        let (x, y) = domains.pair_mut(ids[1], ids[0]);
        assert_eq!(x.len(), y.len());
    }
}
