//! Inputs command - show the definition files kafkalo would read

use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::error::HelpfulError;
use crate::cli::output::{print_json, print_table};

/// Arguments for the `inputs` command
#[derive(Debug, Args, Clone)]
pub struct InputsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InputsReport<'a> {
    patterns: &'a [String],
    schema_dir: &'a str,
    files: Vec<String>,
}

pub fn run(args: InputsArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = kafkalo::load(config_path).map_err(HelpfulError::from)?;
    let files = kafkalo::resolve(config.input_patterns()).map_err(HelpfulError::from)?;

    if args.json {
        return print_json(&InputsReport {
            patterns: config.input_patterns(),
            schema_dir: config.schema_dir(),
            files: files.iter().map(|f| f.display().to_string()).collect(),
        });
    }

    if files.is_empty() {
        println!("No input files matched kafkalo.input_dirs.");
        for pattern in config.input_patterns() {
            println!("  pattern: {}", pattern);
        }
        return Ok(());
    }

    print_table(&["#", "File"], file_rows(&files));
    Ok(())
}

fn file_rows(files: &[PathBuf]) -> Vec<Vec<String>> {
    files
        .iter()
        .enumerate()
        .map(|(i, file)| vec![i.to_string(), file.display().to_string()])
        .collect()
}
