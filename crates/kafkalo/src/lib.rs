//! kafkalo - Core Library
//!
//! Settings loading, input resolution and masking shared by the `kafkalo`
//! binary. Connect administration lives in `kafkalo_connect`.

pub mod config;
pub mod input;
pub mod mask;

pub use config::{load, load_with, ConfigError, Configuration};
pub use input::{normalize_schema_path, resolve, InputError};
pub use kafkalo_connect as connect;
pub use mask::SensitiveKeys;
