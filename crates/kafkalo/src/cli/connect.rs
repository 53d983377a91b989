//! Connect command - inspect connectors on the Connect cluster

use clap::Subcommand;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::cli::error::HelpfulError;
use crate::cli::output::{print_json, print_table};
use kafkalo::connect::{
    ConnectAdmin, ConnectClient, ConnectError, ConnectorDescriptor, TaskDescriptor,
};
use kafkalo::{Configuration, SensitiveKeys};

/// Subcommands for connector inspection
#[derive(Subcommand, Debug, Clone)]
pub enum ConnectAction {
    /// List configured connectors
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a connector: its configuration and tasks
    Describe {
        /// Connector name
        #[arg(long)]
        connector: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl ConnectAction {
    pub fn wants_json(&self) -> bool {
        match self {
            ConnectAction::List { json } | ConnectAction::Describe { json, .. } => *json,
        }
    }
}

#[derive(Debug, Serialize)]
struct ConnectorListItem<'a> {
    index: usize,
    name: &'a str,
}

/// Describe output: configuration with sensitive values masked, then tasks.
#[derive(Debug, Serialize, PartialEq)]
pub struct ConnectorReport {
    pub name: String,
    pub config: BTreeMap<String, String>,
    pub tasks: Vec<TaskDescriptor>,
}

/// Execute the connect command
pub fn run(action: ConnectAction, config_path: &Path) -> anyhow::Result<()> {
    let config = kafkalo::load(config_path).map_err(HelpfulError::from)?;
    let client = ConnectClient::new(&config.connect_client_config()).map_err(HelpfulError::from)?;
    info!(url = %client.base_url(), "Using Connect cluster");

    match action {
        ConnectAction::List { json } => list(&client, json),
        ConnectAction::Describe { connector, json } => describe(&client, &config, &connector, json),
    }
}

fn list(admin: &dyn ConnectAdmin, json: bool) -> anyhow::Result<()> {
    let names = admin.list_connectors().map_err(HelpfulError::from)?;

    if json {
        let items: Vec<ConnectorListItem<'_>> = names
            .iter()
            .enumerate()
            .map(|(index, name)| ConnectorListItem { index, name })
            .collect();
        return print_json(&items);
    }

    print_table(&["#", "Connector name"], connector_rows(&names));
    Ok(())
}

fn describe(
    admin: &dyn ConnectAdmin,
    config: &Configuration,
    connector: &str,
    json: bool,
) -> anyhow::Result<()> {
    let keys = SensitiveKeys::new(config.kafkalo.connectors_sensitive_keys.as_deref())
        .map_err(HelpfulError::from)?;
    let report = build_report(admin, connector, &keys).map_err(HelpfulError::from)?;

    if json {
        return print_json(&report);
    }

    println!("Connector: {}", report.name);
    print_table(&["Config name", "Config value"], config_rows(&report.config));
    print_table(&["ID", "STATUS", "WORKER", "Is running"], task_rows(&report.tasks));
    Ok(())
}

/// Query everything the describe view needs. The connector lookup must
/// succeed before tasks are requested.
pub fn build_report(
    admin: &dyn ConnectAdmin,
    connector: &str,
    keys: &SensitiveKeys,
) -> Result<ConnectorReport, ConnectError> {
    let ConnectorDescriptor { name, config } = admin.get_connector_info(connector)?;
    let tasks = admin.list_tasks_for_connector(connector)?;

    let config = config
        .into_iter()
        .map(|(key, value)| {
            let shown = keys.display(&key, &value).to_string();
            (key, shown)
        })
        .collect();

    Ok(ConnectorReport {
        name,
        config,
        tasks,
    })
}

/// `(index, name)` rows, numbered from zero in cluster order.
pub fn connector_rows(names: &[String]) -> Vec<Vec<String>> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| vec![i.to_string(), name.clone()])
        .collect()
}

pub fn config_rows(config: &BTreeMap<String, String>) -> Vec<Vec<String>> {
    config
        .iter()
        .map(|(key, value)| vec![key.clone(), value.clone()])
        .collect()
}

pub fn task_rows(tasks: &[TaskDescriptor]) -> Vec<Vec<String>> {
    tasks
        .iter()
        .map(|task| {
            vec![
                task.id.to_string(),
                task.status.clone(),
                task.worker_id.clone(),
                task.is_running.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafkalo::mask::MASK;
    use std::cell::RefCell;

    type FixtureConnector = (String, BTreeMap<String, String>, Vec<TaskDescriptor>);

    /// In-memory cluster: connectors with their config and tasks.
    struct FixtureAdmin {
        connectors: Vec<FixtureConnector>,
        calls: RefCell<Vec<String>>,
    }

    impl FixtureAdmin {
        fn new() -> Self {
            let config: BTreeMap<String, String> = [
                ("connector.class", "JdbcSinkConnector"),
                ("connection.password", "hunter2"),
                ("topics", "orders"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
            let tasks = vec![
                TaskDescriptor {
                    id: 0,
                    status: "RUNNING".to_string(),
                    worker_id: "w1:8083".to_string(),
                    is_running: true,
                },
                TaskDescriptor::unassigned(1),
            ];
            Self {
                connectors: vec![
                    ("connector-a".to_string(), config, tasks),
                    ("connector-b".to_string(), BTreeMap::new(), Vec::new()),
                ],
                calls: RefCell::new(Vec::new()),
            }
        }

        fn find(&self, name: &str) -> Result<&FixtureConnector, ConnectError> {
            self.connectors
                .iter()
                .find(|(n, _, _)| n == name)
                .ok_or_else(|| ConnectError::NotFound {
                    connector: name.to_string(),
                })
        }
    }

    impl ConnectAdmin for FixtureAdmin {
        fn list_connectors(&self) -> kafkalo::connect::Result<Vec<String>> {
            self.calls.borrow_mut().push("list".to_string());
            Ok(self.connectors.iter().map(|(n, _, _)| n.clone()).collect())
        }

        fn get_connector_info(&self, name: &str) -> kafkalo::connect::Result<ConnectorDescriptor> {
            self.calls.borrow_mut().push(format!("info:{}", name));
            let (name, config, _) = self.find(name)?;
            Ok(ConnectorDescriptor {
                name: name.clone(),
                config: config.clone(),
            })
        }

        fn list_tasks_for_connector(
            &self,
            name: &str,
        ) -> kafkalo::connect::Result<Vec<TaskDescriptor>> {
            self.calls.borrow_mut().push(format!("tasks:{}", name));
            Ok(self.find(name)?.2.clone())
        }
    }

    #[test]
    fn test_list_rows_are_indexed_from_zero() {
        let admin = FixtureAdmin::new();
        let names = admin.list_connectors().unwrap();
        assert_eq!(
            connector_rows(&names),
            vec![
                vec!["0".to_string(), "connector-a".to_string()],
                vec!["1".to_string(), "connector-b".to_string()],
            ]
        );
    }

    #[test]
    fn test_report_masks_sensitive_values() {
        let admin = FixtureAdmin::new();
        let keys = SensitiveKeys::new(Some("(?i)password")).unwrap();

        let report = build_report(&admin, "connector-a", &keys).unwrap();
        assert_eq!(report.name, "connector-a");
        assert_eq!(report.config["connection.password"], MASK);
        assert_eq!(report.config["topics"], "orders");
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks[1].status, "UNASSIGNED");
    }

    #[test]
    fn test_missing_connector_stops_before_tasks() {
        let admin = FixtureAdmin::new();
        let err = build_report(&admin, "missing", &SensitiveKeys::default()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(*admin.calls.borrow(), vec!["info:missing".to_string()]);
    }

    #[test]
    fn test_config_rows_sorted_by_key() {
        let admin = FixtureAdmin::new();
        let report = build_report(&admin, "connector-a", &SensitiveKeys::default()).unwrap();
        let keys: Vec<String> = config_rows(&report.config)
            .into_iter()
            .map(|row| row[0].clone())
            .collect();
        assert_eq!(keys, vec!["connection.password", "connector.class", "topics"]);
    }

    #[test]
    fn test_task_rows() {
        let admin = FixtureAdmin::new();
        let tasks = admin.list_tasks_for_connector("connector-a").unwrap();
        assert_eq!(
            task_rows(&tasks),
            vec![
                vec!["0", "RUNNING", "w1:8083", "true"],
                vec!["1", "UNASSIGNED", "", "false"],
            ]
        );
    }
}
