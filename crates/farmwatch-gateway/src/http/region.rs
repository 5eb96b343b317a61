//! Region overview and time-series handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use farmwatch_core::region::Region;
use farmwatch_core::timeseries::{TimeSeriesPoint, DEFAULT_METRIC};

use crate::app_state::AppState;
use crate::http::ApiError;

#[derive(Debug, Deserialize)]
pub struct TimeSeriesQuery {
    #[serde(default = "default_metric")]
    pub metric: String,
}

fn default_metric() -> String {
    DEFAULT_METRIC.to_string()
}

pub async fn overview(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<Json<Region>, ApiError> {
    let region = state.region(&region_id).inspect_err(|_| {
        tracing::debug!(region_id = %region_id, "overview for unknown region");
    })?;
    Ok(Json(region.clone()))
}

pub async fn timeseries(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
    Query(q): Query<TimeSeriesQuery>,
) -> Result<Json<Vec<TimeSeriesPoint>>, ApiError> {
    let points = state.timeseries(&region_id, &q.metric).inspect_err(|_| {
        tracing::debug!(
            region_id = %region_id,
            metric = %q.metric,
            "timeseries for unknown region"
        );
    })?;
    Ok(Json(points))
}
