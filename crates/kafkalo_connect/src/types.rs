//! Connector and task descriptors returned by admin queries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task state reported when no worker currently owns the task.
pub const TASK_STATE_UNASSIGNED: &str = "UNASSIGNED";
/// Task state of a healthy task.
pub const TASK_STATE_RUNNING: &str = "RUNNING";

/// A connector and its configuration, as reported by the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDescriptor {
    pub name: String,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// One task of a connector.
///
/// `status` is passed through verbatim from the cluster; `is_running` comes
/// from the same report and is not recomputed by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: i32,
    pub status: String,
    pub worker_id: String,
    pub is_running: bool,
}

impl TaskDescriptor {
    /// A task whose worker could not be reached.
    pub fn unassigned(id: i32) -> Self {
        Self {
            id,
            status: TASK_STATE_UNASSIGNED.to_string(),
            worker_id: String::new(),
            is_running: false,
        }
    }
}
