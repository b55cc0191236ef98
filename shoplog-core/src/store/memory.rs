use crate::record::{LogRecord, TimeRange};
use crate::store::{RecordStore, StoreError};
use ahash::AHashMap;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{RwLock, RwLockReadGuard};

/// Timestamp plus a monotonically increasing ingestion sequence, so records
/// sharing a second keep the order they were appended in.
type RecordKey = (NaiveDateTime, u64);

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<RecordKey, LogRecord>,
    by_user: AHashMap<String, Vec<RecordKey>>,
    next_seq: u64,
}

/// In-process [`RecordStore`].
///
/// Appends take the write lock for the whole batch; scans hold the read lock
/// for the duration of the visit and therefore see a stable snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Panic while holding the write lock, leaving the store poisoned.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.inner.write();
                panic!("poisoning memory store");
            })
            .join()
        });
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, batch: &[LogRecord]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))?;

        for record in batch {
            let key = (record.timestamp, inner.next_seq);
            inner.next_seq += 1;

            let user_keys = inner.by_user.entry(record.user_id.clone()).or_default();
            // Keep per-user keys sorted even when batches arrive out of time order.
            let pos = user_keys.partition_point(|k| *k < key);
            user_keys.insert(pos, key);

            inner.records.insert(key, record.clone());
        }
        Ok(())
    }

    fn scan(
        &self,
        range: TimeRange,
        visit: &mut dyn FnMut(&LogRecord),
    ) -> Result<(), StoreError> {
        let inner = self.read()?;
        if range.is_inverted() {
            return Ok(());
        }

        let lower = match range.start {
            Some(start) => Bound::Included((start, 0)),
            None => Bound::Unbounded,
        };
        let upper = match range.end {
            Some(end) => Bound::Included((end, u64::MAX)),
            None => Bound::Unbounded,
        };

        for record in inner.records.range((lower, upper)).map(|(_, r)| r) {
            visit(record);
        }
        Ok(())
    }

    fn scan_by_user(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(&LogRecord),
    ) -> Result<(), StoreError> {
        let inner = self.read()?;
        let Some(keys) = inner.by_user.get(user_id) else {
            return Ok(());
        };

        for key in keys {
            let record = inner
                .records
                .get(key)
                .ok_or_else(|| StoreError::scan(format!("dangling index entry for user {user_id}")))?;
            visit(record);
        }
        Ok(())
    }

    fn latest_timestamp(&self) -> Result<Option<NaiveDateTime>, StoreError> {
        let inner = self.read()?;
        Ok(inner.records.last_key_value().map(|((ts, _), _)| *ts))
    }
}
