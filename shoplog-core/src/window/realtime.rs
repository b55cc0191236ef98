use crate::aggregate::{BUCKET_SECS, ErrorTally, minute_ceil, minute_floor};
use crate::error::QueryError;
use crate::record::{TimeRange, timestamp};
use crate::store::RecordStore;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

pub const DEFAULT_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowDataPoint {
    #[serde(with = "timestamp")]
    pub bucket_start: NaiveDateTime,
    pub request_count: u64,
    pub error_rate: f64,
}

impl WindowDataPoint {
    pub(crate) fn from_tally(bucket_start: NaiveDateTime, tally: &ErrorTally) -> Self {
        Self {
            bucket_start,
            request_count: tally.requests,
            error_rate: tally.error_rate(),
        }
    }
}

/// Bucket span `[start, end)` of `window_minutes` whole minutes, where `end`
/// is the first minute boundary at or after `as_of`. For a minute-aligned
/// `as_of` this is exactly `[as_of - window_minutes, as_of)`.
///
/// `None` when the span does not fit in the representable time range.
pub fn window_bounds(
    as_of: NaiveDateTime,
    window_minutes: i64,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let span = TimeDelta::try_seconds(window_minutes.checked_mul(BUCKET_SECS)?)?;
    let end = minute_ceil(as_of)?;
    let start = end.checked_sub_signed(span)?;
    Some((start, end))
}

/// Per-minute request counts and error rates for the `window_minutes`
/// minutes before `as_of`. Records at or after `as_of` are never counted.
///
/// `as_of` defaults to the newest record in the store, so that record itself
/// falls just outside the window. Exactly `window_minutes` points come back,
/// zero-filled where nothing happened, with one exception: an empty store and
/// no explicit `as_of` leaves nothing to anchor on, and the result is empty
/// instead of `window_minutes` zero points.
pub fn realtime(
    store: &dyn RecordStore,
    window_minutes: i64,
    as_of: Option<NaiveDateTime>,
) -> Result<Vec<WindowDataPoint>, QueryError> {
    if window_minutes <= 0 {
        return Err(QueryError::InvalidWindow { window_minutes });
    }

    let as_of = match as_of {
        Some(ts) => ts,
        None => match store.latest_timestamp()? {
            Some(ts) => ts,
            None => return Ok(Vec::new()),
        },
    };

    let out_of_range = || QueryError::WindowOutOfRange { window_minutes };
    let (start, _) = window_bounds(as_of, window_minutes).ok_or_else(out_of_range)?;
    let len = usize::try_from(window_minutes).map_err(|_| out_of_range())?;

    let mut buckets = Vec::new();
    buckets.try_reserve_exact(len).map_err(|_| out_of_range())?;
    buckets.resize(len, ErrorTally::default());

    // Scan bounds are inclusive and records carry whole seconds.
    let last = as_of.checked_sub_signed(TimeDelta::seconds(1));
    if let Some(last) = last.filter(|last| *last >= start) {
        store.scan(TimeRange::new(Some(start), Some(last)), &mut |record| {
            let offset = (minute_floor(record.timestamp) - start).num_minutes();
            if let Some(bucket) = usize::try_from(offset).ok().and_then(|i| buckets.get_mut(i)) {
                bucket.record(record);
            }
        })?;
    }

    Ok(buckets
        .iter()
        .enumerate()
        .map(|(i, tally)| {
            let bucket_start = start + TimeDelta::seconds(i as i64 * BUCKET_SECS);
            WindowDataPoint::from_tally(bucket_start, tally)
        })
        .collect())
}
