//! Batch composer
//!
//! Repackages any sequence into consecutive batches of at most `batch_size`
//! elements:
//! - batches partition the source in order, nothing duplicated or dropped;
//! - every batch but the last holds exactly `batch_size` elements;
//! - an empty source yields no batches, and a source whose length is a
//!   multiple of `batch_size` yields no short final batch.
//!
//! Composition is lazy. The source cursor is advanced one element at a time,
//! only while the current batch is being filled; nothing is drawn ahead.
//! Invalid batch sizes are rejected when the composer is built, before the
//! source is touched.

mod body;

pub use body::{BatchBody, BatchPoint};

use tracing::debug;

use crate::cursor::Cursor;
use crate::generator::Generator;
use crate::iterable::Iterable;
use crate::{Result, SequenceError};

/// Cursor yielding batches drawn from one traversal of a source.
pub type BatchCursor<C> = Generator<BatchBody<C>>;

/// Validated batching parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Maximum elements per batch (at least 1).
    pub batch_size: usize,
    /// Stop after this many batches, even if the source continues.
    pub max_batches: Option<usize>,
}

impl BatchConfig {
    /// Construct configuration with explicit batch size.
    ///
    /// Accepts any integer type; zero and negative sizes are rejected.
    pub fn with_batch_size<B>(batch_size: B) -> Result<Self>
    where
        B: TryInto<usize>,
    {
        let batch_size = batch_size.try_into().map_err(|_| {
            SequenceError::InvalidArgument("batch size must be > 0".to_string())
        })?;
        let config = Self {
            batch_size,
            max_batches: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Cap the number of batches each traversal yields.
    pub fn with_max_batches(mut self, limit: usize) -> Self {
        self.max_batches = Some(limit);
        self
    }

    /// Check invariants of a possibly hand-built configuration.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SequenceError::InvalidArgument(
                "batch size must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Iterable of batches over an underlying iterable.
///
/// Each traversal of a `Batched` starts a fresh traversal of the source.
#[derive(Debug, Clone)]
pub struct Batched<I> {
    source: I,
    config: BatchConfig,
}

impl<I: Iterable> Batched<I> {
    /// Batching parameters.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Underlying iterable.
    pub fn source(&self) -> &I {
        &self.source
    }
}

impl<I: Iterable> Iterable for Batched<I> {
    type Item = Vec<I::Item>;
    type Cursor = BatchCursor<I::Cursor>;

    fn iterator(&self) -> Self::Cursor {
        Generator::new(BatchBody::new(self.source.iterator(), self.config))
    }
}

/// Compose `iterable` into batches of `batch_size`.
///
/// ```
/// use lazyseq::{batch, make_iterable, Cursor, Iterable};
///
/// let batches = batch(make_iterable(0..10), 3)?;
/// let drained: Vec<Vec<i32>> = batches.iterator().drain().collect();
/// assert_eq!(drained, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]);
/// # Ok::<(), lazyseq::SequenceError>(())
/// ```
pub fn batch<I, B>(iterable: I, batch_size: B) -> Result<Batched<I>>
where
    I: Iterable,
    B: TryInto<usize>,
{
    batch_with_config(iterable, BatchConfig::with_batch_size(batch_size)?)
}

/// Compose `iterable` into batches according to `config`.
pub fn batch_with_config<I: Iterable>(iterable: I, config: BatchConfig) -> Result<Batched<I>> {
    config.validate()?;
    debug!(
        batch_size = config.batch_size,
        max_batches = ?config.max_batches,
        "batch composer built"
    );
    Ok(Batched {
        source: iterable,
        config,
    })
}

/// Batch the remainder of a single in-progress traversal.
pub fn batch_cursor<C, B>(cursor: C, batch_size: B) -> Result<BatchCursor<C>>
where
    C: Cursor,
    B: TryInto<usize>,
{
    let config = BatchConfig::with_batch_size(batch_size)?;
    debug!(batch_size = config.batch_size, "batching live cursor");
    Ok(Generator::new(BatchBody::new(cursor, config)))
}
