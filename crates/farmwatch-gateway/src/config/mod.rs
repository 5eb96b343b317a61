//! Gateway config loader (strict parsing).
//!
//! The config file is optional. Without it the service listens on the default
//! address and serves the default 30-day series.

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use farmwatch_core::error::{FarmwatchError, Result};

pub use schema::{GatewayConfig, ServerSection, TimeSeriesSection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FarmwatchError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| FarmwatchError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to defaults.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path, "no config file, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(FarmwatchError::Internal(format!("read config failed: {e}"))),
    }
}
