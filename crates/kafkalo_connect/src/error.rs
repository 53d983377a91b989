//! Error types for Connect administration

use thiserror::Error;

/// Errors surfaced by a [`crate::ConnectAdmin`] implementation.
///
/// `NotFound` and `RemoteUnavailable` are kept apart so callers can tell a
/// missing connector from a cluster they could not talk to.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The cluster answered and reported the connector absent.
    #[error("Connector not found: {connector}")]
    NotFound { connector: String },

    /// Transport failure, unexpected status, or a response that could not be decoded.
    #[error("Connect cluster unavailable at {endpoint}: {reason}")]
    RemoteUnavailable { endpoint: String, reason: String },

    /// The client could not be built from the supplied settings.
    #[error("Invalid Connect client configuration: {0}")]
    Config(String),
}

impl ConnectError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConnectError::NotFound { .. })
    }

    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self, ConnectError::RemoteUnavailable { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConnectError>;
