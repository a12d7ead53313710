//! Bridge from the cursor protocol to `std::iter::Iterator`

use std::iter::FusedIterator;

use super::{Cursor, Fuse, Step};

/// Draining adapter: a cursor seen as a standard iterator.
///
/// The cursor is fused on the way in, so `Drain` is a [`FusedIterator`].
#[derive(Debug, Clone)]
pub struct Drain<C> {
    cursor: Fuse<C>,
}

impl<C: Cursor> Drain<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor: Fuse::new(cursor),
        }
    }

    /// Number of elements drained so far.
    pub fn drained(&self) -> usize {
        self.cursor.position()
    }
}

impl<C: Cursor> Iterator for Drain<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.advance() {
            Step::Value(value) => Some(value),
            Step::End => None,
        }
    }
}

impl<C: Cursor> FusedIterator for Drain<C> {}
