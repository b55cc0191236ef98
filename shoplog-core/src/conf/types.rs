use crate::aggregate::DEFAULT_TOP_PATHS;
use crate::ingest::DEFAULT_BATCH_SIZE;
use crate::session::DEFAULT_INACTIVITY_GAP_SECS;
use crate::window::DEFAULT_WINDOW_MINUTES;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Engine tuning, normally read from `shoplog.toml`. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ingest: IngestConfig,
    pub summary: SummaryConfig,
    pub realtime: RealtimeConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    /// Records appended to the store per call.
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    pub top_paths: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            top_paths: DEFAULT_TOP_PATHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RealtimeConfig {
    /// Used when a realtime request does not name a window.
    pub default_window_minutes: i64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            default_window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// A gap strictly longer than this starts a new session.
    pub inactivity_gap_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_gap_secs: DEFAULT_INACTIVITY_GAP_SECS,
        }
    }
}

impl SessionConfig {
    pub fn inactivity_gap(&self) -> TimeDelta {
        TimeDelta::seconds(self.inactivity_gap_secs)
    }
}
