//! Adapters from external producers into the iterable capability

use std::iter::Fuse as StdFuse;

use crate::cursor::{Cursor, Step};

use super::Iterable;

/// Iterable over a re-playable source description.
///
/// The description (a slice, a range, a `Vec`, a `Chars`, a map's key
/// iterator) is cloned for every traversal, so each cursor starts from the
/// beginning independently.
#[derive(Debug, Clone)]
pub struct IterSource<S> {
    source: S,
}

/// Adapt an in-memory producer into an [`Iterable`].
///
/// ```
/// use lazyseq::{make_iterable, Cursor, Iterable};
///
/// let data = [1, 2, 3];
/// let iterable = make_iterable(&data[..]);
/// let sum: i32 = iterable.iterator().drain().sum();
/// assert_eq!(sum, 6);
/// ```
pub fn make_iterable<S>(source: S) -> IterSource<S>
where
    S: IntoIterator + Clone,
{
    IterSource { source }
}

impl<S> IterSource<S>
where
    S: IntoIterator + Clone,
{
    /// Borrow the source description.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> Iterable for IterSource<S>
where
    S: IntoIterator + Clone,
{
    type Item = S::Item;
    type Cursor = IterCursor<S::IntoIter>;

    fn iterator(&self) -> Self::Cursor {
        IterCursor::new(self.source.clone().into_iter())
    }
}

/// Cursor over a one-shot standard iterator, such as the lines of an open
/// file.
///
/// The iterator is fused, so a producer that resumes after `None` still
/// reports `End` forever.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: StdFuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wrap an iterator positioned before its first element.
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.iter.next().into()
    }
}
