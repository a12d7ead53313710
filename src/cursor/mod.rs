//! Iterator state machine
//!
//! A cursor is the mutable handle attached to one traversal of a sequence.
//! It exposes a single operation, [`Cursor::advance`], whose result is either
//! the next element or the [`Step::End`] sentinel.
//!
//! States: `Active` → `Active` (on `Value`) → `Exhausted` (on `End`).
//! No transition leaves `Exhausted`: once a cursor has reported `End`, every
//! later call must report `End` again.

mod drain;
mod fuse;

pub use drain::Drain;
pub use fuse::Fuse;

use crate::batch::{batch_cursor, BatchCursor};
use crate::Result;

/// Outcome of advancing a cursor by one position.
///
/// Exhaustion is an ordinary value, not an error: draining a sequence to
/// completion never goes through `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a step carries the next element or the exhaustion signal"]
pub enum Step<T> {
    /// The next element of the sequence.
    Value(T),
    /// The sequence is exhausted.
    End,
}

impl<T> Step<T> {
    /// Whether this step signals exhaustion.
    pub fn is_end(&self) -> bool {
        matches!(self, Step::End)
    }

    /// Whether this step carries an element.
    pub fn is_value(&self) -> bool {
        !self.is_end()
    }

    /// Convert into an `Option`, mapping `End` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Value(value) => Some(value),
            Step::End => None,
        }
    }

    /// Transform the carried element, keeping `End` as is.
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Value(value) => Step::Value(f(value)),
            Step::End => Step::End,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Step::Value(value),
            None => Step::End,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

/// Lifecycle state of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorState {
    /// More elements may follow.
    #[default]
    Active,
    /// `End` has been observed; terminal.
    Exhausted,
}

/// Cursor over one traversal of a sequence source.
///
/// Implementations must make exhaustion idempotent: after returning
/// [`Step::End`], every subsequent call returns [`Step::End`] without side
/// effects. Wrap a cursor in [`Fuse`] when that guarantee is not inherent.
///
/// `advance` takes `&mut self`, so one handle can never be advanced from two
/// places at once. Each consumer that needs its own position must obtain its
/// own cursor from an [`Iterable`](crate::Iterable).
pub trait Cursor {
    /// Element type handed out by this cursor.
    type Item;

    /// Move one position forward.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Track position and pin exhaustion.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Bridge into `std::iter::Iterator` for `for` loops and std adapters.
    fn drain(self) -> Drain<Self>
    where
        Self: Sized,
    {
        Drain::new(self)
    }

    /// Repackage the rest of this traversal into batches of `batch_size`.
    ///
    /// Fails with [`SequenceError::InvalidArgument`](crate::SequenceError)
    /// when `batch_size` is zero or negative; no element is drawn in that case.
    fn batched<B>(self, batch_size: B) -> Result<BatchCursor<Self>>
    where
        Self: Sized,
        B: TryInto<usize>,
    {
        batch_cursor(self, batch_size)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}
