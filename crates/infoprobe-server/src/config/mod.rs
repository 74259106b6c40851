//! Environment-driven service config.
//!
//! Resolved once at startup. `main` loads a local `.env` file (if any) before
//! calling [`AppConfig::from_env`]; variables already set in the process
//! environment win over the file.

pub mod schema;

pub use schema::AppConfig;
