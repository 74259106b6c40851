//! infoprobe server library entry.
//!
//! Wires config, the stats sampler, the metric registry, and the HTTP
//! handlers into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod stats;
