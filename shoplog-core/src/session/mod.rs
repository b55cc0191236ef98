//! Per-user sessions and purchase funnel detection.
//!
//! A user's records are split into sessions wherever two consecutive records
//! are more than the inactivity gap apart (30 minutes by default; a gap of
//! exactly 30 minutes stays in the same session). Each session is checked
//! for the browse → cart → checkout funnel.

mod funnel;

#[cfg(test)]
mod tests;

pub use funnel::{BreakPoint, FunnelProgress, FunnelStage};

use crate::error::QueryError;
use crate::record::{LogRecord, timestamp};
use crate::store::RecordStore;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

pub const DEFAULT_INACTIVITY_GAP_SECS: i64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    pub path_sequence: Vec<String>,
    pub completed_purchase: bool,
    pub break_point: Option<BreakPoint>,
}

struct OpenSession {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    path_sequence: Vec<String>,
    funnel: FunnelProgress,
}

impl OpenSession {
    fn start(record: &LogRecord) -> Self {
        let mut session = Self {
            start_time: record.timestamp,
            end_time: record.timestamp,
            path_sequence: Vec::new(),
            funnel: FunnelProgress::default(),
        };
        session.extend(record);
        session
    }

    fn extend(&mut self, record: &LogRecord) {
        self.end_time = record.timestamp;
        self.funnel.observe(&record.path);
        self.path_sequence.push(record.path.clone());
    }

    fn close(self) -> Session {
        Session {
            start_time: self.start_time,
            end_time: self.end_time,
            path_sequence: self.path_sequence,
            completed_purchase: self.funnel.is_complete(),
            break_point: self.funnel.break_point(),
        }
    }
}

/// Splits a time-ordered record stream into sessions.
pub struct Sessionizer {
    gap: TimeDelta,
    open: Option<OpenSession>,
    closed: Vec<Session>,
}

impl Sessionizer {
    pub fn new(gap: TimeDelta) -> Self {
        Self {
            gap,
            open: None,
            closed: Vec::new(),
        }
    }

    pub fn push(&mut self, record: &LogRecord) {
        if let Some(open) = self.open.as_mut() {
            if record.timestamp - open.end_time <= self.gap {
                open.extend(record);
                return;
            }
        }
        if let Some(done) = self.open.replace(OpenSession::start(record)) {
            self.closed.push(done.close());
        }
    }

    pub fn finish(mut self) -> Vec<Session> {
        if let Some(open) = self.open.take() {
            self.closed.push(open.close());
        }
        self.closed
    }
}

pub fn journey(store: &dyn RecordStore, user_id: &str) -> Result<Vec<Session>, QueryError> {
    journey_with(store, user_id, TimeDelta::seconds(DEFAULT_INACTIVITY_GAP_SECS))
}

pub fn journey_with(
    store: &dyn RecordStore,
    user_id: &str,
    gap: TimeDelta,
) -> Result<Vec<Session>, QueryError> {
    let mut sessionizer = Sessionizer::new(gap);
    store.scan_by_user(user_id, &mut |record| sessionizer.push(record))?;

    let sessions = sessionizer.finish();
    tracing::debug!(
        user_id,
        sessions = sessions.len(),
        purchases = sessions.iter().filter(|s| s.completed_purchase).count(),
        "user journey reconstructed"
    );
    Ok(sessions)
}
