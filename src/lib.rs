//! # Lazy, pull-based sequences
//!
//! This library implements a uniform protocol for traversing a sequence one
//! value at a time without materialising it, plus the constructs built on
//! top of it.
//!
//! ## Components
//!
//! 1. **Cursor** ([`Cursor`]): the state machine of one traversal. `advance`
//!    returns [`Step::Value`] or the [`Step::End`] sentinel; exhaustion is
//!    monotonic.
//! 2. **Iterable** ([`Iterable`]): a factory handing out independent cursors.
//! 3. **Countdown** ([`Countdown`], [`CountdownOnce`]): a hand-written
//!    iterable/cursor pair and its restricted single-traversal mode.
//! 4. **Generators** ([`Generator`], [`count_up_to`]): suspend/resume bodies
//!    written as explicit state machines over enumerated resume points.
//! 5. **Batching** ([`batch`]): streams any iterable as fixed-size batches.
//!
//! Data flows one way: source → cursor → (optionally) batch composer →
//! consumer. Control is pull-based; nothing is computed until the consumer
//! asks for it.
//!
//! ## Usage Example
//!
//! ```
//! use lazyseq::{batch, Countdown, Cursor, Iterable};
//!
//! let batches = batch(Countdown::new(5), 2)?;
//! let drained: Vec<Vec<u64>> = batches.iterator().drain().collect();
//! assert_eq!(drained, vec![vec![5, 4], vec![3, 2], vec![1]]);
//! # Ok::<(), lazyseq::SequenceError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod batch;      // Batch composer
pub mod countdown;  // Hand-written iterable/cursor pair
pub mod cursor;     // Traversal state machine
pub mod generator;  // Suspend/resume generator bodies
pub mod iterable;   // Cursor factories and source adapters

// Re-exports for convenience
pub use batch::{batch, batch_cursor, batch_with_config, BatchConfig, BatchCursor, Batched};
pub use countdown::{Countdown, CountdownCursor, CountdownOnce, CountdownTraversal};
pub use cursor::{Cursor, CursorState, Drain, Fuse, Step};
pub use generator::{count_up_to, count_up_to_seq, CountUpTo, Generator, GeneratorBody, Suspend};
pub use iterable::{make_iterable, IterCursor, IterSource, Iterable};

use thiserror::Error;

/// Errors raised by misuse of the sequence protocol.
///
/// Exhaustion is never an error; it is reported as [`Step::End`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A constructor received an out-of-range argument (e.g. batch size 0).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A single-traversal sequence was asked for a second live traversal.
    #[error("Reentrancy violation: {what}")]
    ReentrancyViolation {
        /// Which sequence rejected the traversal
        what: &'static str,
    },
}

/// Result alias for fallible sequence constructors.
pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
