//! Bounded counting generator: `1, 2, ..., max`

use crate::iterable::Iterable;

use super::{Generator, GeneratorBody, Suspend};

/// Suspension points of [`CountUpTo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpToPoint {
    /// Before `count` is initialised.
    Entry,
    /// Just after yielding `count`; the loop increments next.
    AfterYield,
}

/// Body of the `count_up_to` generator.
///
/// Forward logic: start at 1; while the count is at most `max`, yield it and
/// increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUpTo {
    max: u64,
    count: u64,
}

impl CountUpTo {
    /// Body counting up to `max` inclusive.
    pub fn new(max: u64) -> Self {
        Self { max, count: 0 }
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u64 {
        self.max
    }

    fn loop_head(&self) -> Suspend<CountUpToPoint, u64> {
        if self.count <= self.max {
            Suspend::Yield(CountUpToPoint::AfterYield, self.count)
        } else {
            Suspend::Return
        }
    }
}

impl GeneratorBody for CountUpTo {
    type Yield = u64;
    type Point = CountUpToPoint;

    fn entry(&self) -> CountUpToPoint {
        CountUpToPoint::Entry
    }

    fn resume(&mut self, at: CountUpToPoint) -> Suspend<CountUpToPoint, u64> {
        match at {
            CountUpToPoint::Entry => self.count = 1,
            CountUpToPoint::AfterYield => match self.count.checked_add(1) {
                Some(next) => self.count = next,
                // `max == u64::MAX` was just yielded.
                None => return Suspend::Return,
            },
        }
        self.loop_head()
    }
}

/// Lazy generator yielding `1, 2, ..., max`, then `End`.
///
/// ```
/// use lazyseq::{count_up_to, Cursor};
///
/// let values: Vec<u64> = count_up_to(3).drain().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn count_up_to(max: u64) -> Generator<CountUpTo> {
    Generator::new(CountUpTo::new(max))
}

/// Iterable form of [`count_up_to`]: every traversal is a fresh generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpToSeq {
    max: u64,
}

/// Iterable whose traversals each run `count_up_to(max)` from the start.
pub fn count_up_to_seq(max: u64) -> CountUpToSeq {
    CountUpToSeq { max }
}

impl Iterable for CountUpToSeq {
    type Item = u64;
    type Cursor = Generator<CountUpTo>;

    fn iterator(&self) -> Self::Cursor {
        count_up_to(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Cursor, Step};

    #[test]
    fn test_count_up_to_three() {
        let mut counter = count_up_to(3);
        assert_eq!(counter.advance(), Step::Value(1));
        assert_eq!(counter.advance(), Step::Value(2));
        assert_eq!(counter.advance(), Step::Value(3));
        assert_eq!(counter.advance(), Step::End);
        assert_eq!(counter.advance(), Step::End);
    }

    #[test]
    fn test_no_work_before_first_advance() {
        let counter = count_up_to(5);
        assert_eq!(counter.resume_point(), Some(CountUpToPoint::Entry));
        assert_eq!(counter.body().count, 0);
    }

    #[test]
    fn test_count_up_to_zero() {
        let mut counter = count_up_to(0);
        assert_eq!(counter.advance(), Step::End);
        assert!(counter.is_complete());
    }

    #[test]
    fn test_count_up_to_saturating_bound() {
        // Body whose loop counter is one step short of the numeric limit.
        let mut counter = Generator::new(CountUpTo {
            max: u64::MAX,
            count: u64::MAX - 1,
        });
        let mut body = counter.body().clone();
        assert_eq!(
            body.resume(CountUpToPoint::AfterYield),
            Suspend::Yield(CountUpToPoint::AfterYield, u64::MAX)
        );
        assert_eq!(body.resume(CountUpToPoint::AfterYield), Suspend::Return);

        // Driven from the entry point, the same bound still yields 1 first.
        assert_eq!(counter.advance(), Step::Value(1));
        assert_eq!(counter.resume_point(), Some(CountUpToPoint::AfterYield));
    }

    #[test]
    fn test_seq_restarts_per_traversal() {
        let seq = count_up_to_seq(2);
        let mut first = seq.iterator();
        assert_eq!(first.advance(), Step::Value(1));
        let second: Vec<u64> = seq.iterator().drain().collect();
        assert_eq!(second, vec![1, 2]);
        assert_eq!(first.advance(), Step::Value(2));
    }
}
