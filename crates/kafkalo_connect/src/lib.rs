//! Kafka Connect administration
//!
//! Provides:
//! - **ConnectAdmin**: the contract a Connect cluster client must honor
//! - **ConnectClient**: a blocking REST implementation of that contract
//! - **Descriptors**: connector and task records passed through from the cluster

pub mod admin;
pub mod client;
pub mod error;
pub mod types;

pub use admin::ConnectAdmin;
pub use client::{ConnectClient, ConnectClientConfig};
pub use error::{ConnectError, Result};
pub use types::{ConnectorDescriptor, TaskDescriptor, TASK_STATE_RUNNING, TASK_STATE_UNASSIGNED};
