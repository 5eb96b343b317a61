//! Shared application state for the farmwatch gateway.
//!
//! Everything here is read-only after startup. Handlers receive a cheap clone
//! (`Arc` bumps) through axum `State`.

use std::sync::Arc;

use chrono::Local;
use farmwatch_core::error::Result;
use farmwatch_core::region::{Region, RegionCatalog};
use farmwatch_core::timeseries::{TimeSeriesGenerator, TimeSeriesPoint};

use crate::config::GatewayConfig;
use crate::intake::{LogSubscriptionSink, SubscriptionSink};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    sink: Arc<dyn SubscriptionSink>,
}

struct AppStateInner {
    catalog: RegionCatalog,
    generator: TimeSeriesGenerator,
}

impl AppState {
    /// Built-in catalog, settings from `cfg`, and the logging sink.
    pub fn new(cfg: &GatewayConfig) -> Self {
        Self::with_parts(
            RegionCatalog::builtin(),
            TimeSeriesGenerator::new(cfg.timeseries.settings()),
            Arc::new(LogSubscriptionSink::new()),
        )
    }

    pub fn with_parts(
        catalog: RegionCatalog,
        generator: TimeSeriesGenerator,
        sink: Arc<dyn SubscriptionSink>,
    ) -> Self {
        tracing::info!(regions = ?catalog.ids(), sink = sink.name(), "app state ready");
        Self {
            inner: Arc::new(AppStateInner { catalog, generator }),
            sink,
        }
    }

    pub fn region(&self, id: &str) -> Result<&Region> {
        self.inner.catalog.get(id)
    }

    /// Fresh series for `metric` on region `id`, ending at the local date.
    pub fn timeseries(&self, id: &str, metric: &str) -> Result<Vec<TimeSeriesPoint>> {
        let region = self.region(id)?;
        let today = Local::now().date_naive();
        let mut rng = rand::rng();
        Ok(self.inner.generator.for_region(region, metric, today, &mut rng))
    }

    pub fn sink(&self) -> Arc<dyn SubscriptionSink> {
        Arc::clone(&self.sink)
    }
}
