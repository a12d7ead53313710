//! Single-traversal countdown
//!
//! The iterable and its cursor share one counter. Starting a traversal
//! while another is alive is misuse and fails fast with
//! [`SequenceError::ReentrancyViolation`] instead of letting two handles
//! decrement the same counter.

use std::cell::Cell;

use tracing::debug;

use crate::cursor::{Cursor, Step};
use crate::{Result, SequenceError};

use super::count_down;

/// Countdown whose state lives in the instance itself.
///
/// Contract:
/// - at most one [`CountdownTraversal`] with values left may be alive at a
///   time;
/// - the counter is not reset between traversals, so a traversal started
///   after an earlier one was dropped resumes where it stopped, and an
///   exhausted instance yields nothing;
/// - the type is `!Sync`, so a handle cannot be shared across threads.
///
/// Use [`Countdown`](super::Countdown) when independent traversals are needed.
#[derive(Debug)]
pub struct CountdownOnce {
    counter: Cell<u64>,
    active: Cell<bool>,
}

impl CountdownOnce {
    /// Create a single-traversal countdown from `start`.
    pub fn new(start: u64) -> Self {
        Self {
            counter: Cell::new(start),
            active: Cell::new(false),
        }
    }

    /// Start the traversal.
    ///
    /// Fails with `ReentrancyViolation` while another traversal of this
    /// instance is alive and still has values left. Once the counter has
    /// reached zero, `begin` always succeeds with an exhausted traversal.
    pub fn begin(&self) -> Result<CountdownTraversal<'_>> {
        if self.active.replace(true) && self.counter.get() > 0 {
            debug!("rejected second live countdown traversal");
            return Err(SequenceError::ReentrancyViolation {
                what: "countdown already has a live traversal",
            });
        }
        Ok(CountdownTraversal { owner: self })
    }

    /// Whether a traversal is currently alive.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Value the next advance will yield, or 0 once exhausted.
    pub fn remaining(&self) -> u64 {
        self.counter.get()
    }
}

/// The live traversal of a [`CountdownOnce`]. Dropping it releases the
/// instance for a later `begin`.
#[derive(Debug)]
pub struct CountdownTraversal<'a> {
    owner: &'a CountdownOnce,
}

impl Cursor for CountdownTraversal<'_> {
    type Item = u64;

    fn advance(&mut self) -> Step<u64> {
        let mut counter = self.owner.counter.get();
        let step = count_down(&mut counter);
        self.owner.counter.set(counter);
        step
    }
}

impl Drop for CountdownTraversal<'_> {
    fn drop(&mut self) {
        self.owner.active.set(false);
    }
}
