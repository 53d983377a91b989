//! Decryption of SOPS-encrypted settings files.
//!
//! A document is encrypted when it carries a top-level `sops` mapping with the
//! key metadata. Documents without it are plaintext and are returned to the
//! loader untouched.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::error::DecryptError;

/// Env var overriding the `sops` executable
pub const SOPS_BIN_ENV: &str = "KAFKALO_SOPS_BIN";

const ENVELOPE_KEY: &str = "sops";

/// Structured document format of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Infer the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

/// Turns raw settings bytes into plaintext bytes.
pub trait Decryptor {
    /// Returns `DecryptError::MetadataNotFound` when `raw` is not encrypted.
    fn decrypt(&self, raw: &[u8], format: DocumentFormat) -> Result<Vec<u8>, DecryptError>;
}

/// Whether `raw` carries a SOPS envelope.
///
/// Bytes that do not parse as a document have no envelope; the parse error is
/// reported later by the loader.
pub fn has_encryption_envelope(raw: &[u8]) -> bool {
    // JSON is a YAML subset, so one parser covers both formats.
    match serde_yaml::from_slice::<serde_yaml::Value>(raw) {
        Ok(doc) => doc.get(ENVELOPE_KEY).is_some_and(|meta| meta.is_mapping()),
        Err(_) => false,
    }
}

/// Decrypts through the external `sops` binary.
#[derive(Debug, Clone)]
pub struct SopsDecryptor {
    binary: String,
}

impl Default for SopsDecryptor {
    fn default() -> Self {
        let binary = std::env::var(SOPS_BIN_ENV).unwrap_or_else(|_| "sops".to_string());
        Self { binary }
    }
}

impl SopsDecryptor {
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Decryptor for SopsDecryptor {
    fn decrypt(&self, raw: &[u8], format: DocumentFormat) -> Result<Vec<u8>, DecryptError> {
        if !has_encryption_envelope(raw) {
            return Err(DecryptError::MetadataNotFound);
        }

        debug!(binary = %self.binary, format = format.as_str(), "Decrypting with sops");
        let mut child = Command::new(&self.binary)
            .args([
                "--decrypt",
                "--input-type",
                format.as_str(),
                "--output-type",
                format.as_str(),
                "/dev/stdin",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DecryptError::Failed(format!("failed to run {}: {}", self.binary, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DecryptError::Failed("sops stdin unavailable".to_string()))?;

        // Feed stdin from a second thread so a large document cannot
        // deadlock against a full stdout pipe.
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(raw));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (output, written)
        });
        let output =
            output.map_err(|e| DecryptError::Failed(format!("sops I/O failed: {}", e)))?;

        // sops may exit before reading all of stdin; its own error wins.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("metadata not found") {
                return Err(DecryptError::MetadataNotFound);
            }
            return Err(DecryptError::Failed(format!(
                "sops exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        written.map_err(|e| DecryptError::Failed(format!("failed to feed sops: {}", e)))?;

        Ok(output.stdout)
    }
}
