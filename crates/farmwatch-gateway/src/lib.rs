//! farmwatch gateway library entry.
//!
//! Wires the region catalog, time-series generator, and subscription intake
//! into an axum HTTP stack. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod intake;
pub mod router;
