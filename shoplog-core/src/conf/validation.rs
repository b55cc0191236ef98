use crate::conf::error::ConfigError;
use crate::conf::types::EngineConfig;

/// Largest configured default window: 31 days.
pub const MAX_DEFAULT_WINDOW_MINUTES: i64 = 31 * 24 * 60;

/// Longest inactivity gap accepted: one week.
const MAX_INACTIVITY_GAP_SECS: i64 = 7 * 24 * 60 * 60;

/// Check every field and report all problems at once.
pub fn validate_config(cfg: &EngineConfig) -> Result<(), ConfigError> {
    let mut issues = Vec::new();

    if cfg.ingest.batch_size == 0 {
        issues.push("ingest.batch_size must be greater than 0".to_string());
    }

    if cfg.summary.top_paths == 0 {
        issues.push("summary.top_paths must be greater than 0".to_string());
    }

    if !(1..=MAX_DEFAULT_WINDOW_MINUTES).contains(&cfg.realtime.default_window_minutes) {
        issues.push(format!(
            "realtime.default_window_minutes must be between 1 and {MAX_DEFAULT_WINDOW_MINUTES}, got {}",
            cfg.realtime.default_window_minutes
        ));
    }

    if !(1..=MAX_INACTIVITY_GAP_SECS).contains(&cfg.sessions.inactivity_gap_secs) {
        issues.push(format!(
            "sessions.inactivity_gap_secs must be between 1 and {MAX_INACTIVITY_GAP_SECS}, got {}",
            cfg.sessions.inactivity_gap_secs
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation { issues })
    }
}
