use crate::conf::error::ConfigError;
use crate::conf::types::EngineConfig;
use crate::conf::validation::validate_config;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(&s, path)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(EngineConfig::default());
    }
    load_config(path)
}

/// `origin` is only used to label errors.
pub fn parse_config(s: &str, origin: &Path) -> Result<EngineConfig, ConfigError> {
    let cfg: EngineConfig = toml::from_str(s).map_err(|e| ConfigError::parse(origin, e))?;
    validate_config(&cfg)?;
    Ok(cfg)
}
