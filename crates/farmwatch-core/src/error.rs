//! Shared error type across farmwatch crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Requested entity does not exist.
    NotFound,
    /// Invalid input that is not a body-shape problem.
    BadRequest,
    /// Request body failed shape validation.
    ValidationFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FarmwatchError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum FarmwatchError {
    #[error("region not found: {0}")]
    RegionNotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FarmwatchError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FarmwatchError::RegionNotFound(_) => ClientCode::NotFound,
            FarmwatchError::BadRequest(_) => ClientCode::BadRequest,
            FarmwatchError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            FarmwatchError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Human-readable detail that is safe to show to callers.
    ///
    /// Not-found errors use a fixed message so the requested id is never echoed.
    pub fn client_detail(&self) -> String {
        match self {
            FarmwatchError::RegionNotFound(_) => "Region not found".to_string(),
            FarmwatchError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}
