//! Batch output stability across traversals

use std::collections::HashSet;

use blake3::hash;
use lazyseq::{batch, make_iterable, Countdown, Cursor, Iterable};

fn render(batches: &[Vec<u64>]) -> String {
    batches
        .iter()
        .map(|b| format!("{b:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn batch_output_is_deterministic_across_traversals() {
    let batches = batch(Countdown::new(50), 7).expect("valid batch size");

    let mut fingerprints = HashSet::new();
    for _ in 0..5 {
        let drained: Vec<Vec<u64>> = batches.iterator().drain().collect();
        fingerprints.insert(hash(render(&drained).as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across traversals");
}

#[test]
fn lazy_and_eager_batching_agree() {
    let source: Vec<u64> = (0..97).collect();
    let lazy: Vec<Vec<u64>> = batch(make_iterable(source.clone()), 10)
        .expect("valid batch size")
        .iterator()
        .drain()
        .collect();
    let eager: Vec<Vec<u64>> = source.chunks(10).map(<[u64]>::to_vec).collect();

    assert_eq!(hash(render(&lazy).as_bytes()), hash(render(&eager).as_bytes()));
}
