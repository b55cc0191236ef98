use crate::aggregate::{PathCount, SummaryStats};
use crate::ingest::ImportResult;
use crate::record::timestamp;
use crate::session::{BreakPoint, Session};
use crate::window::WindowDataPoint;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResponse {
    pub success: u64,
    pub errors: u64,
}

impl From<ImportResult> for ImportResponse {
    fn from(r: ImportResult) -> Self {
        Self {
            success: r.success_count,
            errors: r.error_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    pub total_requests: u64,
    pub unique_users: u64,
    pub avg_response_time: f64,
    pub error_rate: f64,
    pub top_paths: Vec<PathCount>,
}

impl From<SummaryStats> for SummaryResponse {
    fn from(s: SummaryStats) -> Self {
        Self {
            total_requests: s.total_requests,
            unique_users: s.unique_users,
            avg_response_time: s.avg_response_time_ms,
            error_rate: s.error_rate,
            top_paths: s.top_paths,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealtimeResponse {
    pub window_minutes: i64,
    pub data_points: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub requests: u64,
    pub error_rate: f64,
}

impl From<WindowDataPoint> for DataPoint {
    fn from(p: WindowDataPoint) -> Self {
        Self {
            timestamp: p.bucket_start,
            requests: p.request_count,
            error_rate: p.error_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyResponse {
    pub user_id: String,
    pub sessions: Vec<SessionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    #[serde(with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end_time: NaiveDateTime,
    pub path_sequence: Vec<String>,
    pub completed_purchase: bool,
    pub break_point: Option<BreakPoint>,
}

impl From<Session> for SessionView {
    fn from(s: Session) -> Self {
        Self {
            start_time: s.start_time,
            end_time: s.end_time,
            path_sequence: s.path_sequence,
            completed_purchase: s.completed_purchase,
            break_point: s.break_point,
        }
    }
}
