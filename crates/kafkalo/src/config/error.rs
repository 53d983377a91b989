//! Error types for loading the settings file

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a [`crate::config::Decryptor`].
#[derive(Error, Debug)]
pub enum DecryptError {
    /// The document carries no encryption envelope; it is plaintext.
    #[error("encryption metadata not found")]
    MetadataNotFound,

    /// An envelope is present but could not be decrypted.
    #[error("{0}")]
    Failed(String),
}

/// Settings file loading error. Every variant aborts the load.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decrypt config file {path}: {reason}")]
    Decrypt { path: PathBuf, reason: String },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Decrypt { path, .. }
            | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
