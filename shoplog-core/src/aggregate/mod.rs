//! Range summaries over the record store.
//!
//! A summary is one streaming scan feeding a [`SummaryAccumulator`]. The
//! accumulator keeps an exact distinct-user set, per-path counters, and
//! running sums; the top paths are chosen at the end with a bounded heap.

mod accumulator;
mod bucket;
mod top_k;


pub use accumulator::SummaryAccumulator;
pub use bucket::{BUCKET_SECS, ErrorTally, bucket_width, minute_ceil, minute_floor};
pub use top_k::{PathCount, top_k};

use crate::error::QueryError;
use crate::record::TimeRange;
use crate::store::RecordStore;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const DEFAULT_TOP_PATHS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_requests: u64,
    pub unique_users: u64,
    pub avg_response_time_ms: f64,
    pub error_rate: f64,
    pub top_paths: Vec<PathCount>,
}

pub fn summarize(
    store: &dyn RecordStore,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<SummaryStats, QueryError> {
    summarize_with(store, TimeRange::new(start, end), DEFAULT_TOP_PATHS)
}

pub fn summarize_with(
    store: &dyn RecordStore,
    range: TimeRange,
    top_paths: usize,
) -> Result<SummaryStats, QueryError> {
    if let (Some(start), Some(end)) = (range.start, range.end) {
        if start > end {
            return Err(QueryError::InvalidRange { start, end });
        }
    }

    let mut acc = SummaryAccumulator::new();
    store.scan(range, &mut |record| acc.push(record))?;

    tracing::debug!(
        records = acc.total_requests(),
        start = ?range.start,
        end = ?range.end,
        "range summary computed"
    );
    Ok(acc.finish(top_paths))
}
