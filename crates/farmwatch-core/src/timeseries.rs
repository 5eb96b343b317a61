//! Synthetic time-series generator.
//!
//! Each series is a window of daily samples ending at a reference date. A
//! sample is the region's current metric value plus uniform noise, clamped to
//! `[0, 1]`. The random source and the reference date are parameters, so
//! callers pick between the thread-local RNG and a seeded one.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::error::{FarmwatchError, Result};
use crate::region::Region;

/// Metric used when the caller does not name one.
pub const DEFAULT_METRIC: &str = "ndvi";

/// One dated sample. Serializes as `{"date": "YYYY-MM-DD", "value": f64}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Shape of a generated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesSettings {
    /// Number of daily samples, the last one dated on the reference day.
    pub window_days: u32,
    /// Half-width of the uniform noise band.
    pub noise: f64,
    /// Base value used when the metric is not a numeric field of the region.
    pub fallback_base: f64,
}

impl Default for TimeSeriesSettings {
    fn default() -> Self {
        Self {
            window_days: 30,
            noise: 0.05,
            fallback_base: 0.5,
        }
    }
}

impl TimeSeriesSettings {
    pub fn validate(&self) -> Result<()> {
        if !(1..=366).contains(&self.window_days) {
            return Err(FarmwatchError::BadRequest(
                "timeseries.window_days must be between 1 and 366".into(),
            ));
        }
        if !(0.0..=0.5).contains(&self.noise) {
            return Err(FarmwatchError::BadRequest(
                "timeseries.noise must be between 0 and 0.5".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fallback_base) {
            return Err(FarmwatchError::BadRequest(
                "timeseries.fallback_base must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSeriesGenerator {
    settings: TimeSeriesSettings,
}

impl TimeSeriesGenerator {
    pub fn new(settings: TimeSeriesSettings) -> Self {
        Self { settings }
    }

    /// Base value for `metric` on `region`, falling back for non-numeric names.
    pub fn base_for(&self, region: &Region, metric: &str) -> f64 {
        match region.metric(metric) {
            Some(v) => v,
            None => {
                tracing::debug!(
                    region_id = %region.id,
                    metric = %metric,
                    "metric not on record, using fallback base"
                );
                self.settings.fallback_base
            }
        }
    }

    /// Series for one region metric, ending at `today`.
    pub fn for_region<R: Rng>(
        &self,
        region: &Region,
        metric: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<TimeSeriesPoint> {
        self.generate(self.base_for(region, metric), today, rng)
    }

    /// Oldest-first samples around `base`, the last one dated `today`.
    pub fn generate<R: Rng>(
        &self,
        base: f64,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<TimeSeriesPoint> {
        let days = self.settings.window_days;
        let noise = self.settings.noise;

        (0..days)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
            .map(|date| {
                let jitter = if noise > 0.0 {
                    rng.random_range(-noise..=noise)
                } else {
                    0.0
                };
                TimeSeriesPoint {
                    date,
                    value: (base + jitter).clamp(0.0, 1.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_noise_is_flat() {
        let gen = TimeSeriesGenerator::new(TimeSeriesSettings {
            noise: 0.0,
            ..Default::default()
        });
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let pts = gen.generate(0.3, today, &mut StdRng::seed_from_u64(1));
        assert!(pts.iter().all(|p| p.value == 0.3));
    }

    #[test]
    fn window_crosses_leap_day() {
        let gen = TimeSeriesGenerator::default();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let pts = gen.generate(0.5, today, &mut StdRng::seed_from_u64(1));
        assert_eq!(pts[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(pts
            .iter()
            .any(|p| p.date == NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }
}
