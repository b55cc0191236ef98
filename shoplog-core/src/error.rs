use crate::store::StoreError;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Failure of a read-side query. Validation variants are caller mistakes and
/// should be reported as rejected requests; `Store` is an infrastructure
/// failure. Neither is retried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid time range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("invalid window: {window_minutes} minutes (must be positive)")]
    InvalidWindow { window_minutes: i64 },

    #[error("window of {window_minutes} minutes reaches outside the representable time range")]
    WindowOutOfRange { window_minutes: i64 },

    #[error("invalid timestamp '{value}' (expected YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp { value: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, QueryError::Store(_))
    }
}
