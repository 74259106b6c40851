//! infoprobe core: error types and the in-process metric primitives.
//!
//! This crate carries no HTTP or runtime dependencies. The server crate builds
//! its registry out of the counter/gauge types defined here and renders them
//! with the text exposition encoder.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{ProbeError, Result};
