//! Masking of sensitive values before they reach the terminal.

use regex::Regex;
use thiserror::Error;

/// Replacement shown instead of a sensitive value
pub const MASK: &str = "********";

#[derive(Error, Debug)]
#[error("Invalid connectors_sensitive_keys regex '{pattern}': {source}")]
pub struct MaskError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Matches config keys whose values must not be displayed.
#[derive(Debug, Clone, Default)]
pub struct SensitiveKeys {
    regex: Option<Regex>,
}

impl SensitiveKeys {
    /// Build from the optional `kafkalo.connectors_sensitive_keys` setting.
    /// An unset or blank pattern masks nothing.
    pub fn new(pattern: Option<&str>) -> Result<Self, MaskError> {
        let regex = match pattern.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Some(Regex::new(p).map_err(|source| MaskError {
                pattern: p.to_string(),
                source,
            })?),
            None => None,
        };
        Ok(Self { regex })
    }

    pub fn is_sensitive(&self, key: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(key))
    }

    /// The value to display for `key`.
    pub fn display<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.is_sensitive(key) {
            MASK
        } else {
            value
        }
    }
}

/// Replace every string value stored under a key containing "password"
/// (case-insensitive), at any depth.
pub fn mask_passwords(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if key.to_ascii_lowercase().contains("password") {
                    if !child.is_null() {
                        *child = serde_json::Value::String(MASK.to_string());
                    }
                } else {
                    mask_passwords(child);
                }
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(mask_passwords),
        _ => {}
    }
}
