//! Node consistency, AC-3 propagation, and backtracking search.

use std::{
    cmp::Reverse,
    collections::{HashSet, VecDeque},
};

use fillword_core::{Layout, SlotId, Vocabulary, WordId};
use log::{debug, trace};

use crate::{Assignment, Domains};

/// A solver for one layout and vocabulary.
///
/// The solver owns the [`Domains`] store and works in two stages. The
/// consistency passes ([`enforce_node_consistency`](Self::enforce_node_consistency)
/// and [`ac3`](Self::ac3)) shrink the domains; both are idempotent and
/// domains never grow back. The search stage ([`solve`](Self::solve)) then
/// treats the domains as a read-only oracle and explores assignments
/// depth-first.
///
/// Malformed inputs are preconditions of the layout: the solver assumes
/// slot lengths are positive and overlap offsets are in range, as
/// [`Layout`] construction guarantees for grids it built itself.
///
/// # Examples
///
/// ```
/// use fillword_core::{Layout, Vocabulary};
/// use fillword_solver::Solver;
///
/// let layout: Layout = "
///     ___
///     #_#
///     #_#
/// "
/// .parse()?;
/// let vocab: Vocabulary = ["CAT", "DOG", "ACE"].into_iter().collect();
///
/// let solver = Solver::new(&layout, &vocab);
/// let assignment = solver.solve().expect("this grid is fillable");
/// println!("{}", assignment.render(&layout, &vocab));
/// # Ok::<(), fillword_core::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    layout: &'a Layout,
    vocab: &'a Vocabulary,
    domains: Domains,
}

impl<'a> Solver<'a> {
    /// Creates a solver with every slot's domain set to the full
    /// vocabulary.
    #[must_use]
    pub fn new(layout: &'a Layout, vocab: &'a Vocabulary) -> Self {
        Self {
            layout,
            vocab,
            domains: Domains::new(layout, vocab),
        }
    }

    /// Returns the current domain store.
    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Removes every candidate whose length differs from its slot's
    /// length.
    ///
    /// Running this again on an already node-consistent store removes
    /// nothing. A domain emptied here is not an error; the search will
    /// simply find no solution.
    pub fn enforce_node_consistency(&mut self) {
        let (layout, vocab) = (self.layout, self.vocab);
        for slot in layout.slot_ids() {
            let length = layout.slot(slot).length;
            if self.domains.retain(slot, |word| vocab.get(word).len() == length) {
                trace!(
                    "node consistency: slot {slot} down to {} candidates",
                    self.domains.len(slot)
                );
            }
        }
    }

    /// Makes `x` arc-consistent with `y`: removes from `x`'s domain every
    /// word with no partner in `y`'s domain agreeing at their overlap.
    ///
    /// Returns `true` if any candidate was removed. A pair without an
    /// overlap is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `x == y`.
    pub fn revise(&mut self, x: SlotId, y: SlotId) -> bool {
        let Some(overlap) = self.layout.overlap(x, y) else {
            return false;
        };
        let vocab = self.vocab;
        let (dx, dy) = self.domains.pair_mut(x, y);
        let before = dx.len();
        dx.retain(|&w| {
            let Some(&ch) = vocab.get(w).chars().get(overlap.a) else {
                return false;
            };
            dy.iter()
                .any(|&v| vocab.get(v).chars().get(overlap.b) == Some(&ch))
        });
        dx.len() != before
    }

    /// Enforces arc consistency over every directed arc of the constraint
    /// graph.
    ///
    /// Returns `false` if some domain was emptied, in which case no
    /// solution exists; otherwise every remaining candidate has a
    /// compatible partner in each neighboring domain.
    pub fn ac3(&mut self) -> bool {
        let arcs: Vec<_> = self
            .layout
            .slot_ids()
            .flat_map(|x| self.layout.neighbors(x).iter().map(move |&y| (x, y)))
            .collect();
        self.ac3_with(arcs)
    }

    /// Enforces arc consistency starting from the given worklist of
    /// directed arcs.
    ///
    /// Arcs are processed in FIFO order. Whenever a revision shrinks the
    /// domain of `x`, every arc `(z, x)` for a neighbor `z` other than the
    /// arc's own source is re-enqueued; the source is reconsidered through
    /// the other neighbors' chains if it is constrained further. Domains
    /// only shrink and are finite, so the loop always terminates.
    ///
    /// Returns `false` as soon as any domain becomes empty.
    pub fn ac3_with(&mut self, arcs: impl IntoIterator<Item = (SlotId, SlotId)>) -> bool {
        let mut queue: VecDeque<_> = arcs.into_iter().collect();
        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(x, y) {
                continue;
            }
            trace!(
                "revised arc ({x}, {y}): {} candidates left for slot {x}",
                self.domains.len(x)
            );
            if self.domains.len(x) == 0 {
                debug!("arc consistency failed: slot {x} has an empty domain");
                return false;
            }
            for &z in self.layout.neighbors(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
        true
    }

    /// Returns `true` if a (possibly partial) assignment violates no
    /// constraint: every assigned word fits its slot's length, agrees with
    /// every assigned crossing word at their overlap, and no word is used
    /// twice.
    #[must_use]
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = HashSet::new();
        for (slot, word) in assignment.iter() {
            if !seen.insert(word) {
                return false;
            }
            let chars = self.vocab.get(word).chars();
            if chars.len() != self.layout.slot(slot).length {
                return false;
            }
            for &other in self.layout.neighbors(slot) {
                let Some(other_word) = assignment.get(other) else {
                    continue;
                };
                let Some(overlap) = self.layout.overlap(slot, other) else {
                    continue;
                };
                if chars.get(overlap.a) != self.vocab.get(other_word).chars().get(overlap.b) {
                    return false;
                }
            }
        }
        true
    }

    /// Solves the puzzle: node consistency, then AC-3, then backtracking
    /// search from the empty assignment.
    ///
    /// Returns `None` if propagation empties a domain (search is never
    /// entered) or the search exhausts every branch.
    #[must_use]
    pub fn solve(mut self) -> Option<Assignment> {
        debug!(
            "solving {} slots with {} candidate words",
            self.layout.slot_count(),
            self.vocab.len()
        );
        self.enforce_node_consistency();
        if !self.ac3() {
            return None;
        }
        let mut assignment = Assignment::new(self.layout.slot_count());
        self.backtrack(&mut assignment).then_some(assignment)
    }

    /// Depth-first search over partial assignments.
    ///
    /// One assignment instance is threaded through the whole recursion;
    /// each frame's tentative entry is removed again on every failing
    /// path, so the caller sees its own state unchanged unless the search
    /// succeeded.
    fn backtrack(&self, assignment: &mut Assignment) -> bool {
        let Some(slot) = self.select_unassigned_slot(assignment) else {
            // Every slot is assigned.
            return true;
        };
        for word in self.order_domain_values(slot, assignment) {
            assignment.insert(slot, word);
            if self.consistent(assignment) && self.backtrack(assignment) {
                return true;
            }
            assignment.remove(slot);
        }
        trace!("exhausted candidates for slot {slot}, backtracking");
        false
    }

    /// Picks the unassigned slot with the fewest remaining candidates,
    /// breaking ties by the highest number of neighbors. Remaining ties go
    /// to the lowest slot id; any tied slot would be correct.
    fn select_unassigned_slot(&self, assignment: &Assignment) -> Option<SlotId> {
        self.layout
            .slot_ids()
            .filter(|&slot| assignment.get(slot).is_none())
            .min_by_key(|&slot| {
                (
                    self.domains.len(slot),
                    Reverse(self.layout.neighbors(slot).len()),
                    slot,
                )
            })
    }

    /// Orders a slot's candidates least-constraining first.
    ///
    /// A candidate's cost is the number of words it would rule out from
    /// the domains of unassigned neighbors. Already-assigned neighbors are
    /// excluded: their choice is fixed and the eager consistency check
    /// handles conflicts with them.
    fn order_domain_values(&self, slot: SlotId, assignment: &Assignment) -> Vec<WordId> {
        let unassigned_neighbors: Vec<SlotId> = self
            .layout
            .neighbors(slot)
            .iter()
            .copied()
            .filter(|&n| assignment.get(n).is_none())
            .collect();

        let mut ranked: Vec<(usize, WordId)> = self
            .domains
            .get(slot)
            .iter()
            .map(|&word| {
                let count = self.rule_out_count(slot, word, &unassigned_neighbors);
                (count, word)
            })
            .collect();
        ranked.sort_unstable();
        ranked.into_iter().map(|(_, word)| word).collect()
    }

    /// Counts the neighbor candidates that conflict with `word` at their
    /// overlaps.
    fn rule_out_count(&self, slot: SlotId, word: WordId, neighbors: &[SlotId]) -> usize {
        let chars = self.vocab.get(word).chars();
        neighbors
            .iter()
            .filter_map(|&n| self.layout.overlap(slot, n).map(|overlap| (n, overlap)))
            .map(|(n, overlap)| {
                let ch = chars.get(overlap.a);
                self.domains
                    .get(n)
                    .iter()
                    .filter(|&&v| self.vocab.get(v).chars().get(overlap.b) != ch)
                    .count()
            })
            .sum()
    }
}
