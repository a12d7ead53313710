//! Resumable generators
//!
//! A generator body is a suspend/resume computation written as an explicit
//! state machine. The body names its suspension points with an enumerated
//! resume point; [`Generator`] stores the point reached by the last
//! suspension and, on each advance, runs the body forward from there until
//! it yields exactly one value or returns.
//!
//! Execution is single-threaded and cooperative. Control alternates strictly
//! between the consumer (which calls [`Cursor::advance`]) and the body (which
//! runs until its next [`Suspend`]). Nothing runs in the background, and
//! abandoning a generator half way is always safe: dropping it is enough.

mod count_up;

pub use count_up::{count_up_to, count_up_to_seq, CountUpTo, CountUpToPoint, CountUpToSeq};

use std::fmt;

use tracing::trace;

use crate::cursor::{Cursor, Step};

/// What a body did when it was resumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suspend<P, Y> {
    /// Produced one value; resume at `P` next time.
    Yield(P, Y),
    /// Ran to completion.
    Return,
}

/// The forward logic of a generator.
pub trait GeneratorBody {
    /// Value produced per resumption.
    type Yield;
    /// Enumerated suspension points (the generator's program counter).
    type Point: Copy + fmt::Debug;

    /// Point at which the body starts before its first resumption.
    fn entry(&self) -> Self::Point;

    /// Run from `at` until the next yield or until completion.
    fn resume(&mut self, at: Self::Point) -> Suspend<Self::Point, Self::Yield>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorState<P> {
    Suspended(P),
    Complete,
}

/// Drives a [`GeneratorBody`] one resumption per advance.
#[derive(Debug, Clone)]
pub struct Generator<B: GeneratorBody> {
    body: B,
    state: GeneratorState<B::Point>,
}

impl<B: GeneratorBody> Generator<B> {
    /// Create a generator suspended at the body's entry point. No body code
    /// runs until the first advance.
    pub fn new(body: B) -> Self {
        let entry = body.entry();
        Self {
            body,
            state: GeneratorState::Suspended(entry),
        }
    }

    /// Whether the body has run to completion.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, GeneratorState::Complete)
    }

    /// Suspension point the next advance resumes from.
    pub fn resume_point(&self) -> Option<B::Point> {
        match self.state {
            GeneratorState::Suspended(point) => Some(point),
            GeneratorState::Complete => None,
        }
    }

    /// Borrow the body.
    pub fn body(&self) -> &B {
        &self.body
    }
}

impl<B: GeneratorBody> Cursor for Generator<B> {
    type Item = B::Yield;

    fn advance(&mut self) -> Step<B::Yield> {
        let at = match self.state {
            GeneratorState::Suspended(point) => point,
            GeneratorState::Complete => return Step::End,
        };
        trace!(?at, "resuming generator");
        match self.body.resume(at) {
            Suspend::Yield(next, value) => {
                trace!(?next, "generator suspended");
                self.state = GeneratorState::Suspended(next);
                Step::Value(value)
            }
            Suspend::Return => {
                trace!("generator complete");
                self.state = GeneratorState::Complete;
                Step::End
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Yields "a", then "b", then returns; each stage is its own point.
    struct TwoLetters;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        First,
        Second,
        Done,
    }

    impl GeneratorBody for TwoLetters {
        type Yield = &'static str;
        type Point = Stage;

        fn entry(&self) -> Stage {
            Stage::First
        }

        fn resume(&mut self, at: Stage) -> Suspend<Stage, &'static str> {
            match at {
                Stage::First => Suspend::Yield(Stage::Second, "a"),
                Stage::Second => Suspend::Yield(Stage::Done, "b"),
                Stage::Done => Suspend::Return,
            }
        }
    }

    #[test]
    fn test_generator_walks_resume_points() {
        let mut letters = Generator::new(TwoLetters);
        assert_eq!(letters.resume_point(), Some(Stage::First));
        assert_eq!(letters.advance(), Step::Value("a"));
        assert_eq!(letters.resume_point(), Some(Stage::Second));
        assert_eq!(letters.advance(), Step::Value("b"));
        assert_eq!(letters.advance(), Step::End);
        assert!(letters.is_complete());
        assert_eq!(letters.resume_point(), None);
        for _ in 0..100 {
            assert_eq!(letters.advance(), Step::End);
        }
    }
}
