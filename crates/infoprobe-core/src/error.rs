//! Shared error type across infoprobe crates.

use thiserror::Error;

/// Stable error codes, used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid startup configuration.
    Config,
    /// An OS statistic could not be read.
    Sampling,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::Sampling => "SAMPLING",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("stat unavailable: {0}")]
    Sampling(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ProbeError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            ProbeError::Config(_) => ClientCode::Config,
            ProbeError::Sampling(_) => ClientCode::Sampling,
            ProbeError::Internal(_) => ClientCode::Internal,
        }
    }
}
