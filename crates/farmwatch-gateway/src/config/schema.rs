use std::net::SocketAddr;

use farmwatch_core::error::{FarmwatchError, Result};
use farmwatch_core::timeseries::TimeSeriesSettings;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub timeseries: TimeSeriesSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            timeseries: TimeSeriesSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FarmwatchError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.timeseries.settings().validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FarmwatchError::BadRequest(format!(
                "server.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeSeriesSection {
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    #[serde(default = "default_noise")]
    pub noise: f64,

    #[serde(default = "default_fallback_base")]
    pub fallback_base: f64,
}

impl Default for TimeSeriesSection {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            noise: default_noise(),
            fallback_base: default_fallback_base(),
        }
    }
}

impl TimeSeriesSection {
    pub fn settings(&self) -> TimeSeriesSettings {
        TimeSeriesSettings {
            window_days: self.window_days,
            noise: self.noise,
            fallback_base: self.fallback_base,
        }
    }
}

fn default_window_days() -> u32 {
    TimeSeriesSettings::default().window_days
}
fn default_noise() -> f64 {
    TimeSeriesSettings::default().noise
}
fn default_fallback_base() -> f64 {
    TimeSeriesSettings::default().fallback_base
}
