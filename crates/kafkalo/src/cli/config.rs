//! Config command - show the loaded settings with secrets masked

use std::path::Path;

use crate::cli::error::HelpfulError;
use crate::cli::output::print_table;
use kafkalo::mask::mask_passwords;
use kafkalo::Configuration;

/// Arguments for the config command
#[derive(Debug, clap::Args, Clone)]
pub struct ConfigArgs {
    /// Show the whole configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = kafkalo::load(config_path).map_err(HelpfulError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&masked_json(&config)?)?);
        return Ok(());
    }

    println!("KAFKALO CONFIGURATION");
    println!("=====================");
    println!("File: {}", config_path.display());
    println!();
    print_table(&["Setting", "Value"], summary_rows(&config));
    Ok(())
}

fn masked_json(config: &Configuration) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(config)?;
    mask_passwords(&mut value);
    Ok(value)
}

fn or_unset(value: Option<&str>) -> String {
    value.unwrap_or("(not set)").to_string()
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

fn summary_rows(config: &Configuration) -> Vec<Vec<String>> {
    let c = &config.connections;
    let brokers = if c.kafka.bootstrap_brokers.is_empty() {
        "(not set)".to_string()
    } else {
        c.kafka.bootstrap_brokers.join(", ")
    };
    let patterns = if config.input_patterns().is_empty() {
        "(none)".to_string()
    } else {
        config.input_patterns().join(", ")
    };

    let rows = [
        ("Kafka brokers", brokers),
        ("Kafka TLS", yes_no(c.kafka.ssl.enabled)),
        ("Kafka Kerberos", yes_no(c.kafka.kerberos.enabled)),
        ("Schema registry", or_unset(c.schemaregistry.url.as_deref())),
        ("MDS", or_unset(c.mds.url.as_deref())),
        ("Connect", or_unset(c.connect.url.as_deref())),
        ("Input patterns", patterns),
        ("Schema dir", or_unset(config.kafkalo.schema_dir.as_deref())),
        (
            "Sensitive connector keys",
            or_unset(config.kafkalo.connectors_sensitive_keys.as_deref()),
        ),
    ];
    rows.into_iter()
        .map(|(name, value)| vec![name.to_string(), value])
        .collect()
}
