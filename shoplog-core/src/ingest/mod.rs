//! Streaming import of raw log lines into a [`RecordStore`].
//!
//! Lines flow through the parser one at a time. Valid records collect in a
//! bounded batch that is appended whenever it fills up. Malformed lines are
//! counted and skipped. Blank lines are dropped without being counted.
//!
//! There is no atomicity across batches. If the store fails mid-import the
//! caller gets [`ImportError::Store`] with the counts of what was already
//! flushed, and those records stay in the store.

mod error;


pub use error::ImportError;

use crate::parse::parse_line;
use crate::record::LogRecord;
use crate::store::{RecordStore, StoreError};
use serde::Serialize;
use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DEFAULT_BATCH_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub success_count: u64,
    pub error_count: u64,
}

impl ImportResult {
    pub fn total(&self) -> u64 {
        self.success_count + self.error_count
    }
}

pub struct Ingestor<'a> {
    store: &'a dyn RecordStore,
    batch_size: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Ingestor<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            store,
            batch_size: DEFAULT_BATCH_SIZE,
            cancel: None,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Stop at the next record boundary once `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn import<I, S>(&self, lines: I) -> Result<ImportResult, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(lines.into_iter().map(Ok::<S, std::io::Error>))
    }

    /// Import from a reader without buffering more than one line at a time.
    pub fn import_reader<R: BufRead>(&self, reader: R) -> Result<ImportResult, ImportError> {
        self.run(reader.lines())
    }

    fn run<I, S>(&self, lines: I) -> Result<ImportResult, ImportError>
    where
        I: Iterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        let mut batch = Batch::new(self.store, self.batch_size);

        for line in lines {
            if self.is_cancelled() {
                return Err(batch.abort_cancelled());
            }

            let line = match line {
                Ok(line) => line,
                Err(source) => return Err(batch.abort_read(source)),
            };

            match parse_line(line.as_ref()) {
                Ok(record) => batch.push(record)?,
                Err(err) if err.is_blank() => {}
                Err(err) => {
                    tracing::debug!(kind = %err.kind, line = %err.raw_line, "rejected log line");
                    batch.counts.error_count += 1;
                }
            }
        }

        let result = batch.finish()?;
        tracing::info!(
            success = result.success_count,
            errors = result.error_count,
            "log import finished"
        );
        Ok(result)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Pending records plus the running counts. `counts.success_count` only ever
/// includes records that made it into the store.
struct Batch<'a> {
    store: &'a dyn RecordStore,
    capacity: usize,
    pending: Vec<LogRecord>,
    counts: ImportResult,
}

impl<'a> Batch<'a> {
    fn new(store: &'a dyn RecordStore, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            pending: Vec::with_capacity(capacity),
            counts: ImportResult::default(),
        }
    }

    fn push(&mut self, record: LogRecord) -> Result<(), ImportError> {
        self.pending.push(record);
        if self.pending.len() >= self.capacity {
            self.flush().map_err(|source| self.store_failed(source))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.store.append(&self.pending)?;
        self.counts.success_count += self.pending.len() as u64;
        self.pending.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<ImportResult, ImportError> {
        self.flush().map_err(|source| self.store_failed(source))?;
        Ok(self.counts)
    }

    fn store_failed(&self, source: StoreError) -> ImportError {
        tracing::warn!(
            error = %source,
            stored = self.counts.success_count,
            dropped = self.pending.len(),
            "log import aborted by store failure"
        );
        ImportError::Store {
            partial: self.counts,
            source,
        }
    }

    fn abort_read(mut self, source: std::io::Error) -> ImportError {
        if let Err(store_err) = self.flush() {
            return self.store_failed(store_err);
        }
        tracing::warn!(error = %source, stored = self.counts.success_count, "log import aborted by read failure");
        ImportError::Read {
            partial: self.counts,
            source,
        }
    }

    fn abort_cancelled(mut self) -> ImportError {
        if let Err(store_err) = self.flush() {
            return self.store_failed(store_err);
        }
        tracing::info!(stored = self.counts.success_count, "log import cancelled");
        ImportError::Cancelled {
            partial: self.counts,
        }
    }
}
