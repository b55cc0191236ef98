//! Command implementations behind the `shoplog` binary.
//!
//! Query commands load one log file into a fresh [`MemoryStore`] and run a
//! single query against it. `stats` tails stdin instead and keeps a
//! [`LiveWindow`] up to date.
//!
//! The overall data flow is:
//!
//! log file / stdin
//! Ingestor (parse_line per line)
//! MemoryStore
//! summarize / realtime / journey
//! render (pretty) or serde_json (json)
//!
//! [`MemoryStore`]: crate::store::MemoryStore
//! [`LiveWindow`]: crate::window::LiveWindow

mod check;
mod constants;
mod generate;
mod query;
mod render;
mod stats;

#[cfg(test)]
mod tests;

pub use check::check_config;
pub use generate::{GenerateOptions, generate, generate_to};
pub use query::{run_import, run_journey, run_realtime, run_summary};
pub use stats::run_stats;

use crate::conf::EngineConfig;
use crate::logging::OutputMode;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub config: EngineConfig,
    pub output: OutputMode,
}
