//! Shared fixtures for unit tests.

use crate::record::{LogRecord, TimeRange, parse_timestamp};
use crate::store::{MemoryStore, RecordStore, StoreError};
use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

pub fn record(timestamp: &str, user: &str, path: &str, ms: u64, status: u16) -> LogRecord {
    LogRecord {
        timestamp: ts(timestamp),
        user_id: user.to_string(),
        path: path.to_string(),
        response_time_ms: ms,
        status_code: status,
    }
}

pub fn store_with(records: &[LogRecord]) -> MemoryStore {
    let store = MemoryStore::new();
    store.append(records).unwrap();
    store
}

/// Wraps a [`MemoryStore`] and starts failing after a number of successful appends.
pub struct FlakyStore {
    pub inner: MemoryStore,
    appends_before_failure: usize,
    appends: AtomicUsize,
    pub fail_scans: bool,
}

impl FlakyStore {
    pub fn failing_after(appends_before_failure: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            appends_before_failure,
            appends: AtomicUsize::new(0),
            fail_scans: false,
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_scans: true,
            ..Self::failing_after(usize::MAX)
        }
    }

    pub fn append_calls(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    fn check_scan(&self) -> Result<(), StoreError> {
        if self.fail_scans {
            return Err(StoreError::scan("injected scan failure"));
        }
        Ok(())
    }
}

impl RecordStore for FlakyStore {
    fn append(&self, batch: &[LogRecord]) -> Result<(), StoreError> {
        let n = self.appends.fetch_add(1, Ordering::SeqCst);
        if n >= self.appends_before_failure {
            return Err(StoreError::unavailable("injected append failure"));
        }
        self.inner.append(batch)
    }

    fn scan(&self, range: TimeRange, visit: &mut dyn FnMut(&LogRecord)) -> Result<(), StoreError> {
        self.check_scan()?;
        self.inner.scan(range, visit)
    }

    fn scan_by_user(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(&LogRecord),
    ) -> Result<(), StoreError> {
        self.check_scan()?;
        self.inner.scan_by_user(user_id, visit)
    }

    fn latest_timestamp(&self) -> Result<Option<NaiveDateTime>, StoreError> {
        self.check_scan()?;
        self.inner.latest_timestamp()
    }
}
