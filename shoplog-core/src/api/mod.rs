//! Transport-agnostic request handlers.
//!
//! These mirror the operations a web layer exposes (import, summary,
//! realtime, journey, health) and return serializable response shapes.
//! Query parameters arrive as raw strings and are validated here.

mod types;


pub use types::{
    DataPoint, HealthResponse, ImportResponse, JourneyResponse, RealtimeResponse, SessionView,
    SummaryResponse,
};

use crate::aggregate::summarize_with;
use crate::conf::EngineConfig;
use crate::error::QueryError;
use crate::ingest::{ImportError, Ingestor};
use crate::record::{TimeRange, parse_timestamp};
use crate::session::journey_with;
use crate::store::RecordStore;
use chrono::NaiveDateTime;

/// Request handlers bound to one store and one configuration.
pub struct Api<'a> {
    store: &'a dyn RecordStore,
    config: &'a EngineConfig,
}

impl<'a> Api<'a> {
    pub fn new(store: &'a dyn RecordStore, config: &'a EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            message: "service is running",
        }
    }

    /// Import an uploaded file body. Parse errors are counted, not returned.
    pub fn import_content(&self, content: &str) -> Result<ImportResponse, ImportError> {
        Ingestor::new(self.store)
            .with_batch_size(self.config.ingest.batch_size)
            .import(content.lines())
            .map(ImportResponse::from)
    }

    pub fn summary(
        &self,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<SummaryResponse, QueryError> {
        let range = TimeRange::new(parse_param(start_time)?, parse_param(end_time)?);
        summarize_with(self.store, range, self.config.summary.top_paths).map(SummaryResponse::from)
    }

    pub fn realtime(&self, window_minutes: Option<i64>) -> Result<RealtimeResponse, QueryError> {
        self.realtime_as_of(window_minutes, None)
    }

    /// Realtime view anchored at an explicit time instead of the newest record.
    pub fn realtime_as_of(
        &self,
        window_minutes: Option<i64>,
        as_of: Option<&str>,
    ) -> Result<RealtimeResponse, QueryError> {
        let window_minutes = window_minutes.unwrap_or(self.config.realtime.default_window_minutes);
        let points = crate::window::realtime(self.store, window_minutes, parse_param(as_of)?)?;

        Ok(RealtimeResponse {
            window_minutes,
            data_points: points.into_iter().map(DataPoint::from).collect(),
        })
    }

    pub fn journey(&self, user_id: &str) -> Result<JourneyResponse, QueryError> {
        let sessions = journey_with(self.store, user_id, self.config.sessions.inactivity_gap())?;

        Ok(JourneyResponse {
            user_id: user_id.to_string(),
            sessions: sessions.into_iter().map(SessionView::from).collect(),
        })
    }
}

/// Absent and empty parameters both mean "unbounded".
fn parse_param(value: Option<&str>) -> Result<Option<NaiveDateTime>, QueryError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| QueryError::InvalidTimestamp {
                value: s.to_string(),
            }),
    }
}
