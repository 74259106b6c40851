//! Application endpoints.
//!
//! - `/`         : redirect to `/get_info`
//! - `/get_info` : identity payload, counted per version

pub mod info;

pub use info::{get_info, root, InfoResponse};
