//! Service metric registry.
//!
//! A single [`metrics::ProbeMetrics`] is owned by the application state and
//! shared by every in-flight request.

pub mod metrics;
