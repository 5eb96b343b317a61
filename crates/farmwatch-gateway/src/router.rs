//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/region/:region_id/overview", get(http::region::overview))
        .route("/api/region/:region_id/timeseries", get(http::region::timeseries))
        .route("/api/subscribe", post(http::subscribe::subscribe))
        .with_state(state)
}
