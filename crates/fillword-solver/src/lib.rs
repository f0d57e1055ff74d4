//! Constraint-propagation and search engine for filling crossword grids.
//!
//! The engine treats a grid as a constraint-satisfaction problem: each slot
//! of a [`Layout`] is a variable, its domain is the set of vocabulary words
//! that may still fill it, and every pair of crossing slots carries a
//! shared-letter constraint. Solving proceeds in three phases:
//!
//! 1. **Node consistency** - drop every candidate whose length differs from
//!    its slot's length.
//! 2. **Arc consistency (AC-3)** - a fixed-point worklist pass that drops
//!    every candidate lacking a compatible partner in a crossing slot's
//!    domain.
//! 3. **Backtracking search** - depth-first exploration of partial
//!    [`Assignment`]s, ordered by the minimum-remaining-values / highest
//!    degree variable heuristic and the least-constraining-value ordering.
//!
//! Domains are frozen after propagation; the search reads them but only
//! ever mutates its single assignment, undoing each tentative entry on
//! failure. "No solution" is an ordinary outcome, reported as `None`.
//!
//! # Examples
//!
//! ```
//! use fillword_core::{Layout, Vocabulary};
//! use fillword_solver::solve;
//!
//! let layout: Layout = "
//!     ___
//!     #_#
//!     #_#
//! "
//! .parse()?;
//! let vocab: Vocabulary = ["CAT", "DOG", "ACE"].into_iter().collect();
//!
//! let assignment = solve(&layout, &vocab).expect("this grid is fillable");
//! assert!(assignment.is_complete());
//! # Ok::<(), fillword_core::LayoutError>(())
//! ```

use fillword_core::{Layout, Vocabulary};

pub use self::{assignment::Assignment, domains::Domains, solver::Solver};

mod assignment;
mod domains;
mod solver;

/// Fills a layout from a vocabulary.
///
/// Runs node consistency, arc consistency, and backtracking search, and
/// returns a complete assignment of one distinct word per slot, or `None`
/// if the vocabulary cannot fill the grid.
///
/// This is shorthand for [`Solver::new`] followed by [`Solver::solve`].
#[must_use]
pub fn solve(layout: &Layout, vocab: &Vocabulary) -> Option<Assignment> {
    Solver::new(layout, vocab).solve()
}
