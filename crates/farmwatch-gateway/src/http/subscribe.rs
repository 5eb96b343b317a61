//! Subscription intake handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use farmwatch_core::subscription::{SubscriptionAck, SubscriptionRequest};

use crate::app_state::AppState;
use crate::http::ApiError;

pub async fn subscribe(
    State(state): State<AppState>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<Json<SubscriptionAck>, ApiError> {
    let Json(req) = body.inspect_err(|rej| {
        tracing::debug!(status = %rej.status(), "subscription body rejected");
    })?;

    state.sink().accept(&req).await?;
    Ok(Json(SubscriptionAck::success()))
}
