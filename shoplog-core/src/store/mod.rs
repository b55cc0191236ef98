//! Record store collaborator.
//!
//! The analytics engine never owns persisted records. It talks to a
//! [`RecordStore`] which appends batches and streams records back in
//! timestamp order. Scans hand every record to a visitor while the store
//! holds a consistent view, so no query has to materialize its input.

mod error;
mod memory;


pub use error::StoreError;
pub use memory::MemoryStore;

use crate::record::{LogRecord, TimeRange};
use chrono::NaiveDateTime;

pub trait RecordStore: Send + Sync {
    /// Append one batch. A batch is either stored entirely or not at all.
    fn append(&self, batch: &[LogRecord]) -> Result<(), StoreError>;

    /// Visit every record inside `range` ordered by timestamp, then by
    /// ingestion order for equal timestamps.
    fn scan(&self, range: TimeRange, visit: &mut dyn FnMut(&LogRecord)) -> Result<(), StoreError>;

    /// Visit every record of one user, ordered like [`RecordStore::scan`].
    fn scan_by_user(
        &self,
        user_id: &str,
        visit: &mut dyn FnMut(&LogRecord),
    ) -> Result<(), StoreError>;

    fn latest_timestamp(&self) -> Result<Option<NaiveDateTime>, StoreError>;
}
