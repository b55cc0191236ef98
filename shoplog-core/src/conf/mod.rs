mod error;
mod loader;
mod types;
mod validation;


pub use error::ConfigError;
pub use loader::{load_config, load_config_or_default, parse_config};
pub use types::{EngineConfig, IngestConfig, RealtimeConfig, SessionConfig, SummaryConfig};
pub use validation::{MAX_DEFAULT_WINDOW_MINUTES, validate_config};

pub const DEFAULT_CONFIG_PATH: &str = "shoplog.toml";
