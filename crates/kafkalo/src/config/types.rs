//! Settings file model.
//!
//! Field names follow the keys operators write in `kafkalo.yaml`. Every
//! section is optional; absent sections fall back to defaults and unknown
//! keys are ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the settings file. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub connections: Connections,
    #[serde(default)]
    pub kafkalo: KafkaloSettings,
}

/// Connection settings for every cluster service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    #[serde(default)]
    pub kafka: KafkaSettings,
    #[serde(default)]
    pub schemaregistry: SchemaRegistrySettings,
    #[serde(default)]
    pub mds: MdsSettings,
    #[serde(default)]
    pub connect: ConnectSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KafkaSettings {
    #[serde(default)]
    pub bootstrap_brokers: Vec<String>,
    #[serde(default)]
    pub ssl: SslSettings,
    #[serde(default)]
    pub kerberos: KerberosSettings,
    #[serde(default)]
    pub producer: ProducerSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslSettings {
    #[serde(default)]
    pub enabled: bool,
    pub ca_path: Option<PathBuf>,
    #[serde(default)]
    pub skip_verify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KerberosSettings {
    #[serde(default)]
    pub enabled: bool,
    pub keytab: Option<PathBuf>,
    pub service_name: Option<String>,
    pub realm: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub krb5_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerSettings {
    pub max_message_bytes: Option<u32>,
    pub compression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRegistrySettings {
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ca_path: Option<PathBuf>,
    #[serde(default)]
    pub skip_verify: bool,
    #[serde(default)]
    pub skip_registry_for_reads: bool,
}

/// Metadata service (RBAC) settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdsSettings {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "schema-registry-cluster-id")]
    pub schema_registry_cluster_id: Option<String>,
    #[serde(rename = "connect-cluster-id")]
    pub connect_cluster_id: Option<String>,
    #[serde(rename = "ksql-cluster-id")]
    pub ksql_cluster_id: Option<String>,
    pub ca_path: Option<PathBuf>,
    #[serde(default)]
    pub skip_verify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectSettings {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ca_path: Option<PathBuf>,
    #[serde(default)]
    pub skip_verify: bool,
}

/// Tool-level settings under the `kafkalo` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaloSettings {
    /// Glob or literal patterns of definition files, in declaration order
    #[serde(default)]
    pub input_dirs: Vec<String>,
    /// Root for relative schema file references
    pub schema_dir: Option<String>,
    /// Regex matching connector config keys whose values must be masked
    pub connectors_sensitive_keys: Option<String>,
}

impl Configuration {
    /// Input patterns to resolve into definition files.
    pub fn input_patterns(&self) -> &[String] {
        &self.kafkalo.input_dirs
    }

    /// Configured schema root, or `""` when unset.
    pub fn schema_dir(&self) -> &str {
        self.kafkalo.schema_dir.as_deref().unwrap_or_default()
    }

    /// Connect client settings derived from `connections.connect`.
    pub fn connect_client_config(&self) -> kafkalo_connect::ConnectClientConfig {
        let connect = &self.connections.connect;
        kafkalo_connect::ConnectClientConfig {
            url: connect.url.clone().unwrap_or_default(),
            username: connect.username.clone(),
            password: connect.password.clone(),
            ca_path: connect.ca_path.clone(),
            skip_verify: connect.skip_verify,
        }
    }
}
