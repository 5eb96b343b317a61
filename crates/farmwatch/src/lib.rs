//! Top-level facade crate for farmwatch.
//!
//! Re-exports the domain crate and the gateway library so users can depend on
//! a single crate.

pub mod core {
    pub use farmwatch_core::*;
}

pub mod gateway {
    pub use farmwatch_gateway::*;
}
