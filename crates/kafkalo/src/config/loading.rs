//! Settings file loading: read, decrypt when encrypted, parse.

use std::path::Path;
use tracing::{debug, info};

use super::decrypt::{Decryptor, DocumentFormat, SopsDecryptor};
use super::error::{ConfigError, DecryptError, Result};
use super::types::Configuration;

/// Load the settings file at `path`, decrypting it with `sops` when it is
/// encrypted.
pub fn load(path: impl AsRef<Path>) -> Result<Configuration> {
    load_with(path, &SopsDecryptor::default())
}

/// Load the settings file at `path` using the given decryptor.
///
/// Read, decrypt and parse failures all abort the load. A document without
/// an encryption envelope is parsed as-is.
pub fn load_with(path: impl AsRef<Path>, decryptor: &dyn Decryptor) -> Result<Configuration> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format = DocumentFormat::from_path(path);
    let plaintext = match decryptor.decrypt(&raw, format) {
        Ok(decrypted) => {
            info!(path = %path.display(), "Decrypted config file");
            decrypted
        }
        Err(DecryptError::MetadataNotFound) => {
            debug!(path = %path.display(), "Config file is not encrypted");
            raw
        }
        Err(DecryptError::Failed(reason)) => {
            return Err(ConfigError::Decrypt {
                path: path.to_path_buf(),
                reason,
            });
        }
    };

    parse(&plaintext, path)
}

fn parse(bytes: &[u8], path: &Path) -> Result<Configuration> {
    serde_yaml::from_slice(bytes).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
