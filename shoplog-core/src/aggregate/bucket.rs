use crate::record::LogRecord;
use chrono::{NaiveDateTime, TimeDelta, Timelike};

pub const BUCKET_SECS: i64 = 60;

pub fn bucket_width() -> TimeDelta {
    TimeDelta::seconds(BUCKET_SECS)
}

/// Start of the one-minute bucket containing `ts`.
pub fn minute_floor(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Smallest minute boundary at or after `ts`.
pub fn minute_ceil(ts: NaiveDateTime) -> Option<NaiveDateTime> {
    let floor = minute_floor(ts);
    if floor == ts {
        Some(ts)
    } else {
        floor.checked_add_signed(bucket_width())
    }
}

/// Request and error counters shared by range summaries and minute buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorTally {
    pub requests: u64,
    pub errors: u64,
}

impl ErrorTally {
    pub fn record(&mut self, record: &LogRecord) {
        self.requests += 1;
        if record.is_error() {
            self.errors += 1;
        }
    }

    pub fn merge(&mut self, other: &ErrorTally) {
        self.requests += other.requests;
        self.errors += other.errors;
    }

    /// Fraction of errors in `[0, 1]`; `0.0` when nothing was recorded.
    pub fn error_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.errors as f64 / self.requests as f64
        }
    }
}
