//! Generator ordering and exhaustion

use lazyseq::{
    count_up_to, count_up_to_seq, Cursor, Generator, GeneratorBody, Iterable, Step, Suspend,
};
use proptest::prelude::*;

#[test]
fn test_count_up_to_three_then_end() {
    let mut counter = count_up_to(3);
    let mut values = Vec::new();
    while let Step::Value(v) = counter.advance() {
        values.push(v);
    }
    assert_eq!(values, vec![1, 2, 3]);
    assert!(counter.is_complete());
    for _ in 0..100 {
        assert_eq!(counter.advance(), Step::End);
    }
}

/// Fibonacci numbers below a bound, written as a two-point body.
#[derive(Debug)]
struct FibBelow {
    bound: u64,
    a: u64,
    b: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FibPoint {
    Start,
    Loop,
}

impl GeneratorBody for FibBelow {
    type Yield = u64;
    type Point = FibPoint;

    fn entry(&self) -> FibPoint {
        FibPoint::Start
    }

    fn resume(&mut self, at: FibPoint) -> Suspend<FibPoint, u64> {
        if at == FibPoint::Loop {
            let next = self.a + self.b;
            self.a = self.b;
            self.b = next;
        }
        if self.a < self.bound {
            Suspend::Yield(FibPoint::Loop, self.a)
        } else {
            Suspend::Return
        }
    }
}

fn fib_eager(bound: u64) -> Vec<u64> {
    let (mut a, mut b) = (0u64, 1u64);
    let mut out = Vec::new();
    while a < bound {
        out.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    out
}

#[test]
fn test_custom_body_matches_eager_order() {
    let lazy: Vec<u64> = Generator::new(FibBelow { bound: 100, a: 0, b: 1 })
        .drain()
        .collect();
    assert_eq!(lazy, fib_eager(100));
}

#[test]
fn test_abandoned_generator_is_dropped_cleanly() {
    let mut counter = count_up_to(u64::MAX);
    assert_eq!(counter.advance(), Step::Value(1));
    assert_eq!(counter.advance(), Step::Value(2));
    drop(counter);
}

proptest! {
    #[test]
    fn count_up_matches_eager_range(max in 0u64..300) {
        let lazy: Vec<u64> = count_up_to_seq(max).iterator().drain().collect();
        let eager: Vec<u64> = (1..=max).collect();
        prop_assert_eq!(lazy, eager);
    }
}
