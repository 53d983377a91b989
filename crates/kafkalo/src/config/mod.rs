//! Settings file (`kafkalo.yaml`) model and loader.
//!
//! The file may be committed encrypted with SOPS; the loader decrypts it
//! transparently and parses plaintext files as-is.

pub mod decrypt;
pub mod error;
pub mod loading;
pub mod types;

pub use decrypt::{has_encryption_envelope, Decryptor, DocumentFormat, SopsDecryptor};
pub use error::{ConfigError, DecryptError};
pub use loading::{load, load_with};
pub use types::{
    ConnectSettings, Configuration, Connections, KafkaSettings, KafkaloSettings,
    KerberosSettings, MdsSettings, ProducerSettings, SchemaRegistrySettings, SslSettings,
};
