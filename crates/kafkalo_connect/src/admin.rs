//! The admin contract a Connect cluster client must honor.

use crate::error::Result;
use crate::types::{ConnectorDescriptor, TaskDescriptor};

/// Read-only administration of a Kafka Connect cluster.
///
/// Connector and task states are owned by the cluster; implementations pass
/// them through without filtering, sorting or caching.
pub trait ConnectAdmin {
    /// Connector names in the order the cluster reports them.
    fn list_connectors(&self) -> Result<Vec<String>>;

    /// Name and configuration of a single connector.
    ///
    /// Fails with `NotFound` when the cluster reports no such connector and
    /// with `RemoteUnavailable` for any transport or decoding failure.
    fn get_connector_info(&self, name: &str) -> Result<ConnectorDescriptor>;

    /// Tasks of a connector.
    ///
    /// A task whose worker cannot be reached is reported as `UNASSIGNED`
    /// instead of failing the whole call.
    fn list_tasks_for_connector(&self, name: &str) -> Result<Vec<TaskDescriptor>>;
}
