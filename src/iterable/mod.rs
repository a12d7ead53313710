//! Iterable capability
//!
//! An iterable is a factory for cursors. Every call to
//! [`Iterable::iterator`] allocates a fresh cursor positioned before the first
//! element, and cursors drawn from the same iterable never share mutable
//! state, so any number of traversals may be in flight at once.

mod source;

pub use source::{make_iterable, IterCursor, IterSource};

use crate::cursor::Cursor;

/// Anything that can start an independent traversal on demand.
pub trait Iterable {
    /// Element type of the produced traversals.
    type Item;
    /// Cursor type produced for each traversal.
    type Cursor: Cursor<Item = Self::Item>;

    /// Start a new traversal. Never fails; an empty source yields a cursor
    /// that is exhausted on its first advance.
    fn iterator(&self) -> Self::Cursor;
}

impl<I: Iterable + ?Sized> Iterable for &I {
    type Item = I::Item;
    type Cursor = I::Cursor;

    fn iterator(&self) -> Self::Cursor {
        (**self).iterator()
    }
}
