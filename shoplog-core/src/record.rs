use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Wire format of every timestamp the engine reads or writes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed access log line. Records are never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub user_id: String,
    pub path: String,
    pub response_time_ms: u64,
    pub status_code: u16,
}

impl LogRecord {
    /// 4xx and 5xx responses count as errors.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }
}

/// Inclusive time bounds for a store scan. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeRange {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start.is_none_or(|s| ts >= s) && self.end.is_none_or(|e| ts <= e)
    }

    /// True when both bounds are present and `start > end`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }
}

/// Strict `YYYY-MM-DD HH:MM:SS`: every field zero-padded, no leap seconds.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if !has_timestamp_shape(s) {
        return None;
    }
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .ok()
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}

// chrono accepts unpadded fields, so the layout is checked byte by byte.
fn has_timestamp_shape(s: &str) -> bool {
    const LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";
    s.len() == LAYOUT.len()
        && s.bytes().zip(LAYOUT).all(|(b, l)| match *l {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        })
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// `#[serde(with = "...")]` adapter rendering timestamps in the log format.
pub(crate) mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }
}
