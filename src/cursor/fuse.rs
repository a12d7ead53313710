//! Position tracking and exhaustion pinning

use tracing::debug;

use super::{Cursor, CursorState, Step};

/// Cursor wrapper holding the traversal's position and exhaustion flag.
///
/// Once the inner cursor reports `End`, the inner cursor is never polled
/// again, so exhaustion is monotonic even for sources that would resume.
#[derive(Debug, Clone)]
pub struct Fuse<C> {
    inner: C,
    position: usize,
    state: CursorState,
}

impl<C: Cursor> Fuse<C> {
    /// Wrap a cursor positioned before its first element.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            position: 0,
            state: CursorState::Active,
        }
    }

    /// Number of values handed out so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Whether `End` has been observed.
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Borrow the wrapped cursor.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwrap, discarding position tracking.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for Fuse<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.is_exhausted() {
            return Step::End;
        }
        match self.inner.advance() {
            Step::Value(value) => {
                self.position += 1;
                Step::Value(value)
            }
            Step::End => {
                debug!(position = self.position, "cursor exhausted");
                self.state = CursorState::Exhausted;
                Step::End
            }
        }
    }
}
