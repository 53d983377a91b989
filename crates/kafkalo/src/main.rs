//! kafkalo
//!
//! Administer a Kafka ecosystem (topics, schemas, ACLs, connectors) from a
//! declarative settings file, which may be SOPS-encrypted.

use clap::{Parser, Subcommand};
use kafkalo_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "kafkalo", version, about = "Administer Kafka from a declarative settings file")]
struct Cli {
    /// Settings file (plaintext or SOPS-encrypted YAML)
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "KAFKALO_CONFIG",
        default_value = "kafkalo.yaml"
    )]
    config: PathBuf,

    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage Kafka Connect connectors
    Connect {
        #[command(subcommand)]
        action: cli::connect::ConnectAction,
    },

    /// Show the definition files resolved from kafkalo.input_dirs
    Inputs(cli::inputs::InputsArgs),

    /// Show the loaded settings (secrets masked)
    Config(cli::config::ConfigArgs),
}

fn command_wants_json(cmd: &Commands) -> bool {
    match cmd {
        Commands::Connect { action } => action.wants_json(),
        Commands::Inputs(args) => args.json,
        Commands::Config(args) => args.json,
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config;
    debug!(config = %config_path.display(), "Running command");

    match cli.command {
        Commands::Connect { action } => cli::connect::run(action, &config_path),
        Commands::Inputs(args) => cli::inputs::run(args, &config_path),
        Commands::Config(args) => cli::config::run(args, &config_path),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    let _log_guard = init_logging(LogConfig {
        app_name: "kafkalo",
        verbose: cli.verbose,
    });

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}
