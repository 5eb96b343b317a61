//! JSON error responses.
//!
//! Every error leaves as `{"error": CODE, "detail": message}` with a matching
//! status. Body-parsing rejections from axum are re-wrapped into the same shape.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use farmwatch_core::error::{ClientCode, FarmwatchError};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: ClientCode,
    detail: String,
}

impl From<FarmwatchError> for ApiError {
    fn from(err: FarmwatchError) -> Self {
        let code = err.client_code();
        let status = match code {
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }
        Self {
            status,
            code,
            detail: err.client_detail(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self {
        let code = match &rej {
            JsonRejection::JsonDataError(_) => ClientCode::ValidationFailed,
            _ => ClientCode::BadRequest,
        };
        Self {
            status: rej.status(),
            code,
            detail: rej.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code.as_str(),
            "detail": self.detail,
        }));
        (self.status, body).into_response()
    }
}
