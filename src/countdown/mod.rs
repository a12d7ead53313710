//! Countdown: a hand-written iterable/cursor pair
//!
//! [`Countdown`] is a factory: each traversal gets its own
//! [`CountdownCursor`] holding a private counter, so repeated or overlapping
//! traversals of one instance are safe.
//!
//! [`CountdownOnce`] is the restricted mode where the iterable and the
//! cursor are the same object. It allows one live traversal at a time; see
//! its docs for the contract.

mod single_pass;

pub use single_pass::{CountdownOnce, CountdownTraversal};

use crate::cursor::{Cursor, Step};
use crate::iterable::Iterable;

/// Iterable producing `start, start - 1, ..., 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    start: u64,
}

impl Countdown {
    /// Create a countdown from `start`. `Countdown::new(0)` is empty.
    pub fn new(start: u64) -> Self {
        Self { start }
    }

    /// Starting value.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Number of elements each traversal yields.
    pub fn len(&self) -> u64 {
        self.start
    }

    /// Whether traversals yield nothing.
    pub fn is_empty(&self) -> bool {
        self.start == 0
    }
}

impl Iterable for Countdown {
    type Item = u64;
    type Cursor = CountdownCursor;

    fn iterator(&self) -> Self::Cursor {
        CountdownCursor {
            counter: self.start,
        }
    }
}

/// Cursor for one traversal of a [`Countdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownCursor {
    counter: u64,
}

impl CountdownCursor {
    /// Value the next advance will yield, or 0 once exhausted.
    pub fn remaining(&self) -> u64 {
        self.counter
    }
}

impl Cursor for CountdownCursor {
    type Item = u64;

    fn advance(&mut self) -> Step<u64> {
        count_down(&mut self.counter)
    }
}

/// Shared countdown step: yield the counter, then decrement.
/// A zero counter is terminal, which makes exhaustion idempotent.
fn count_down(counter: &mut u64) -> Step<u64> {
    if *counter == 0 {
        return Step::End;
    }
    let value = *counter;
    *counter -= 1;
    Step::Value(value)
}
