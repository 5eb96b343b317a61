//! farmwatch core: region catalog, synthetic time series, and subscription
//! value objects.
//!
//! This crate holds the domain model and error surface shared by the gateway
//! and the facade crate. It carries no transport or runtime dependencies, so
//! the catalog and generator can be exercised without an HTTP stack.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `FarmwatchError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod region;
pub mod subscription;
pub mod timeseries;

/// Shared result type.
pub use error::{FarmwatchError, Result};
