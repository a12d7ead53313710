//! Batch generator body

use tracing::trace;

use crate::cursor::{Cursor, Fuse, Step};
use crate::generator::{GeneratorBody, Suspend};

use super::BatchConfig;

/// Upper bound on capacity reserved up front for one batch.
const MAX_PREALLOCATED: usize = 4096;

/// Suspension points of [`BatchBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPoint {
    /// Nothing drawn yet.
    Entry,
    /// A batch was just yielded; the next resumption fills the following one.
    AfterYield,
}

/// Generator body drawing up to `batch_size` elements per resumption.
#[derive(Debug, Clone)]
pub struct BatchBody<C> {
    source: Fuse<C>,
    config: BatchConfig,
    emitted: usize,
}

impl<C: Cursor> BatchBody<C> {
    /// Body batching the remainder of `source`.
    pub fn new(source: C, config: BatchConfig) -> Self {
        Self {
            source: Fuse::new(source),
            config,
            emitted: 0,
        }
    }

    /// Elements drawn from the source so far.
    pub fn drawn(&self) -> usize {
        self.source.position()
    }

    /// Batches yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_batches
            .is_some_and(|limit| self.emitted >= limit)
    }
}

impl<C: Cursor> GeneratorBody for BatchBody<C> {
    type Yield = Vec<C::Item>;
    type Point = BatchPoint;

    fn entry(&self) -> BatchPoint {
        BatchPoint::Entry
    }

    fn resume(&mut self, at: BatchPoint) -> Suspend<BatchPoint, Vec<C::Item>> {
        if at == BatchPoint::AfterYield && self.source.is_exhausted() {
            return Suspend::Return;
        }
        if self.limit_reached() {
            return Suspend::Return;
        }

        let batch_size = self.config.batch_size;
        let mut batch = Vec::with_capacity(batch_size.min(MAX_PREALLOCATED));
        while batch.len() < batch_size {
            match self.source.advance() {
                Step::Value(value) => batch.push(value),
                Step::End => break,
            }
        }

        if batch.is_empty() {
            return Suspend::Return;
        }
        self.emitted += 1;
        trace!(
            batch = self.emitted,
            len = batch.len(),
            drawn = self.drawn(),
            "batch filled"
        );
        Suspend::Yield(BatchPoint::AfterYield, batch)
    }
}
