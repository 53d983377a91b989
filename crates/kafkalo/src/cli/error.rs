//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use kafkalo::config::ConfigError;
use kafkalo::connect::ConnectError;
use kafkalo::input::InputError;
use kafkalo::mask::MaskError;
use std::fmt;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a suggestion for fixing the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(
        mut self,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "message": self.message,
                "context": self.context,
                "suggestions": self.suggestions,
            }
        })
    }
}

impl From<ConfigError> for HelpfulError {
    fn from(err: ConfigError) -> Self {
        let path = err.path().display().to_string();
        match &err {
            ConfigError::Read { .. } => HelpfulError::new(err.to_string())
                .with_context("The settings file could not be read")
                .with_suggestions([
                    format!("TRY: Check that the file exists: ls -la {}", path),
                    "TRY: Pass another file with --config or KAFKALO_CONFIG".to_string(),
                ]),
            ConfigError::Decrypt { .. } => HelpfulError::new(err.to_string())
                .with_context("The settings file is SOPS-encrypted but could not be decrypted")
                .with_suggestions([
                    format!("TRY: Decrypt it manually to see the sops error: sops -d {}", path),
                    "TRY: Check that your age/PGP/KMS key is available".to_string(),
                    "TRY: Point KAFKALO_SOPS_BIN at the sops executable".to_string(),
                ]),
            ConfigError::Parse { .. } => HelpfulError::new(err.to_string())
                .with_context("The settings file is not a valid kafkalo configuration")
                .with_suggestions([
                    "TRY: Validate the YAML syntax".to_string(),
                    "TRY: Check field types, e.g. kafkalo.input_dirs must be a list".to_string(),
                ]),
        }
    }
}

impl From<InputError> for HelpfulError {
    fn from(err: InputError) -> Self {
        HelpfulError::new(err.to_string())
            .with_context("A pattern in kafkalo.input_dirs is not a valid glob")
            .with_suggestions([
                "TRY: Use * for any name, ** for any depth, ? for one character",
                "TRY: Close every [ ] character class",
            ])
    }
}

impl From<ConnectError> for HelpfulError {
    fn from(err: ConnectError) -> Self {
        match &err {
            ConnectError::NotFound { connector } => HelpfulError::new(err.to_string())
                .with_context("The Connect cluster has no connector with this name")
                .with_suggestion(format!(
                    "TRY: List the existing connectors: kafkalo connect list (looking for '{}')",
                    connector
                )),
            ConnectError::RemoteUnavailable { .. } => HelpfulError::new(err.to_string())
                .with_context("The Connect cluster could not be queried")
                .with_suggestions([
                    "TRY: Check connections.connect.url in the settings file",
                    "TRY: Check credentials and TLS settings (caPath, skipVerify)",
                ]),
            ConnectError::Config(_) => HelpfulError::new(err.to_string())
                .with_context("The connections.connect section is incomplete or invalid")
                .with_suggestion("TRY: Set connections.connect.url, e.g. http://localhost:8083"),
        }
    }
}

impl From<MaskError> for HelpfulError {
    fn from(err: MaskError) -> Self {
        HelpfulError::new(err.to_string())
            .with_context("kafkalo.connectors_sensitive_keys must be a valid regular expression")
            .with_suggestion("TRY: Example: (?i)password|secret")
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Print a command failure as JSON on stdout.
pub fn print_json_error(err: &anyhow::Error) {
    let value = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => helpful.to_json(),
        None => HelpfulError::new(format!("{:#}", err)).to_json(),
    };
    println!("{}", value);
}
