use std::net::SocketAddr;

use infoprobe_core::error::{ProbeError, Result};

pub const ENV_TITLE: &str = "APP_TITLE";
pub const ENV_VERSION: &str = "APP_VERSION";
pub const ENV_LISTEN: &str = "LISTEN_ADDR";

/// Application identity plus the bind address.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub version: String,
    pub listen: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            version: default_version(),
            listen: default_listen(),
        }
    }
}

impl AppConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary key lookup.
    ///
    /// Identity strings fall back only when unset; a set-but-empty value is
    /// kept as is. A blank `LISTEN_ADDR` means the default bind address.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen = match lookup(ENV_LISTEN).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|e| {
                ProbeError::Config(format!(
                    "{ENV_LISTEN} must be a valid socket address ({raw}): {e}"
                ))
            })?,
            None => default_listen(),
        };

        Ok(Self {
            title: lookup(ENV_TITLE).unwrap_or_else(default_title),
            version: lookup(ENV_VERSION).unwrap_or_else(default_version),
            listen,
        })
    }
}

fn default_title() -> String {
    "My FastAPI App".into()
}
fn default_version() -> String {
    "1.0".into()
}
fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}
