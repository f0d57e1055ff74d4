//! Core puzzle model for the fillword crossword engine.
//!
//! This crate describes a crossword puzzle without solving it:
//!
//! - [`Layout`] - the grid skeleton: open and blocked cells, the slots they
//!   form, and the overlap constraints between crossing slots
//! - [`Slot`] / [`SlotId`] - a single entry position with a direction and a
//!   fixed length, and its typed index into a layout
//! - [`Overlap`] - the character-offset pair at which two crossing slots
//!   must agree
//! - [`Vocabulary`] / [`Word`] / [`WordId`] - the interned candidate word
//!   list
//!
//! The model is immutable once built: the solver crate reads slots,
//! neighbors, and overlaps but never writes back.
//!
//! # Examples
//!
//! ```
//! use fillword_core::{Direction, Layout};
//!
//! let layout: Layout = "
//!     ___
//!     #_#
//!     #_#
//! "
//! .parse()?;
//!
//! // One across slot and one down slot, crossing at (0, 1).
//! assert_eq!(layout.slot_count(), 2);
//! let across = layout
//!     .slot_ids()
//!     .find(|&id| layout.slot(id).direction == Direction::Across)
//!     .unwrap();
//! assert_eq!(layout.neighbors(across).len(), 1);
//! # Ok::<(), fillword_core::LayoutError>(())
//! ```

pub use self::{
    layout::{Layout, LayoutError, Overlap},
    slot::{Direction, Slot, SlotId},
    word::{Vocabulary, Word, WordId},
};

mod layout;
mod slot;
mod word;
