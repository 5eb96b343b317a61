//! HTTP handlers for the `/api` surface.

pub mod error;
pub mod region;
pub mod subscribe;

pub use error::ApiError;
