//! Blocking REST client for the Kafka Connect API.
//!
//! Uses raw HTTP requests against the three endpoints the admin contract
//! needs:
//! - `GET /connectors`
//! - `GET /connectors/{name}`
//! - `GET /connectors/{name}/status`

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::admin::ConnectAdmin;
use crate::error::{ConnectError, Result};
use crate::types::{ConnectorDescriptor, TaskDescriptor, TASK_STATE_RUNNING};

/// Connect and read timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings needed to reach a Connect cluster.
#[derive(Debug, Clone, Default)]
pub struct ConnectClientConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ca_path: Option<PathBuf>,
    pub skip_verify: bool,
}

/// Connect REST API client
pub struct ConnectClient {
    base: Url,
    agent: ureq::Agent,
    auth_header: Option<String>,
}

/// Response of `GET /connectors/{name}`
#[derive(Debug, Deserialize)]
struct ConnectorInfoResponse {
    name: String,
    #[serde(default)]
    config: BTreeMap<String, String>,
}

/// Response of `GET /connectors/{name}/status`
#[derive(Debug, Deserialize)]
struct ConnectorStatusResponse {
    #[serde(default)]
    tasks: Vec<TaskStatus>,
}

#[derive(Debug, Deserialize)]
struct TaskStatus {
    id: i32,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    worker_id: Option<String>,
}

impl From<TaskStatus> for TaskDescriptor {
    fn from(task: TaskStatus) -> Self {
        match task.state {
            Some(state) => TaskDescriptor {
                id: task.id,
                is_running: state == TASK_STATE_RUNNING,
                status: state,
                worker_id: task.worker_id.unwrap_or_default(),
            },
            None => TaskDescriptor::unassigned(task.id),
        }
    }
}

/// Connect error body: `{"error_code": 404, "message": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_code: u16,
    message: String,
}

impl ConnectClient {
    /// Build a client from connection settings.
    pub fn new(config: &ConnectClientConfig) -> Result<Self> {
        let raw_url = config.url.trim();
        if raw_url.is_empty() {
            return Err(ConnectError::Config(
                "connections.connect.url is not set".to_string(),
            ));
        }
        let base = Url::parse(raw_url)
            .map_err(|e| ConnectError::Config(format!("invalid URL '{}': {}", raw_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ConnectError::Config(format!(
                "URL '{}' cannot be used as a base URL",
                raw_url
            )));
        }

        let mut builder = ureq::AgentBuilder::new()
            .timeout_connect(REQUEST_TIMEOUT)
            .timeout_read(REQUEST_TIMEOUT);
        if config.ca_path.is_some() || config.skip_verify {
            builder = builder.tls_connector(Arc::new(build_tls_connector(config)?));
        }

        let auth_header = config.username.as_ref().map(|username| {
            let password = config.password.as_deref().unwrap_or_default();
            let token = BASE64.encode(format!("{}:{}", username, password));
            format!("Basic {}", token)
        });

        Ok(Self {
            base,
            agent: builder.build(),
            auth_header,
        })
    }

    /// Base URL of the cluster
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON document. `connector` names the entity for 404 reporting.
    fn get_json<T: DeserializeOwned>(&self, url: Url, connector: Option<&str>) -> Result<T> {
        debug!(url = %url, "GET");
        let mut request = self.agent.get(url.as_str()).set("Accept", "application/json");
        if let Some(header) = &self.auth_header {
            request = request.set("Authorization", header);
        }

        let unavailable = |reason: String| ConnectError::RemoteUnavailable {
            endpoint: url.to_string(),
            reason,
        };

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                let error_body = serde_json::from_str::<ErrorBody>(&body).ok();
                // Only a Connect-shaped 404 means the connector is absent; a bare
                // 404 comes from a wrong base path or a proxy in front.
                if let (404, Some(name), Some(404)) =
                    (code, connector, error_body.as_ref().map(|b| b.error_code))
                {
                    return Err(ConnectError::NotFound {
                        connector: name.to_string(),
                    });
                }
                let message = error_body.map(|b| b.message).unwrap_or(body);
                warn!(url = %url, status = code, "Connect request failed");
                return Err(unavailable(format!("HTTP {}: {}", code, message.trim())));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(unavailable(transport.to_string()));
            }
        };

        response
            .into_json::<T>()
            .map_err(|e| unavailable(format!("malformed response: {}", e)))
    }
}

fn build_tls_connector(config: &ConnectClientConfig) -> Result<native_tls::TlsConnector> {
    let mut tls = native_tls::TlsConnector::builder();
    if let Some(ca_path) = &config.ca_path {
        let pem = std::fs::read(ca_path).map_err(|e| {
            ConnectError::Config(format!("cannot read CA file {}: {}", ca_path.display(), e))
        })?;
        let cert = native_tls::Certificate::from_pem(&pem).map_err(|e| {
            ConnectError::Config(format!("invalid CA file {}: {}", ca_path.display(), e))
        })?;
        tls.add_root_certificate(cert);
    }
    if config.skip_verify {
        tls.danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }
    tls.build()
        .map_err(|e| ConnectError::Config(format!("TLS setup failed: {}", e)))
}

impl ConnectAdmin for ConnectClient {
    fn list_connectors(&self) -> Result<Vec<String>> {
        self.get_json(self.endpoint(&["connectors"]), None)
    }

    fn get_connector_info(&self, name: &str) -> Result<ConnectorDescriptor> {
        let info: ConnectorInfoResponse =
            self.get_json(self.endpoint(&["connectors", name]), Some(name))?;
        Ok(ConnectorDescriptor {
            name: info.name,
            config: info.config,
        })
    }

    fn list_tasks_for_connector(&self, name: &str) -> Result<Vec<TaskDescriptor>> {
        let status: ConnectorStatusResponse =
            self.get_json(self.endpoint(&["connectors", name, "status"]), Some(name))?;
        Ok(status.tasks.into_iter().map(TaskDescriptor::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> ConnectClient {
        ConnectClient::new(&ConnectClientConfig {
            url: url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = ConnectClient::new(&ConnectClientConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, ConnectError::Config(_)));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = ConnectClient::new(&ConnectClientConfig {
            url: "not a url".to_string(),
            ..Default::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, ConnectError::Config(_)));
    }

    #[test]
    fn test_missing_ca_file_is_rejected() {
        let err = ConnectClient::new(&ConnectClientConfig {
            url: "https://connect:8083".to_string(),
            ca_path: Some(PathBuf::from("/nonexistent/ca.pem")),
            ..Default::default()
        })
        .err()
        .unwrap();
        assert!(err.to_string().contains("/nonexistent/ca.pem"));
    }

    #[test]
    fn test_endpoint_building() {
        let c = client("http://connect:8083");
        assert_eq!(
            c.endpoint(&["connectors"]).as_str(),
            "http://connect:8083/connectors"
        );

        let c = client("http://connect:8083/api/");
        assert_eq!(
            c.endpoint(&["connectors", "orders-sink", "status"]).as_str(),
            "http://connect:8083/api/connectors/orders-sink/status"
        );
    }

    #[test]
    fn test_endpoint_escapes_connector_names() {
        let c = client("http://connect:8083");
        assert_eq!(
            c.endpoint(&["connectors", "a b/c"]).as_str(),
            "http://connect:8083/connectors/a%20b%2Fc"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        let c = ConnectClient::new(&ConnectClientConfig {
            url: "http://connect:8083".to_string(),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(c.auth_header.as_deref(), Some("Basic YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn test_task_without_state_is_unassigned() {
        let task: TaskStatus = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(TaskDescriptor::from(task), TaskDescriptor::unassigned(2));
    }

    #[test]
    fn test_task_state_passes_through() {
        let task: TaskStatus =
            serde_json::from_str(r#"{"id": 0, "state": "PAUSED", "worker_id": "w1:8083"}"#)
                .unwrap();
        let task = TaskDescriptor::from(task);
        assert_eq!(task.status, "PAUSED");
        assert_eq!(task.worker_id, "w1:8083");
        assert!(!task.is_running);
    }
}
