// synthgen-cli - Command-line entry point
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # synthgen
//!
//! Generates a synthetic time-series dataset from a JSON config or a
//! built-in domain template, and writes it to CSV, JSON or (with the
//! `parquet-export` feature) Parquet.
//!
//! ## Usage
//!
//! ```bash
//! # From a config file
//! synthgen --config scenario.json --out dataset.csv
//!
//! # From a built-in template
//! synthgen --template agriculture --seed 42 --out farm.csv --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use synthgen_io::ExportFormat;
use synthgen_templates::Domain;

/// Synthetic time-series data generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file describing the generation run.
    #[arg(short, long, conflicts_with = "template")]
    config: Option<PathBuf>,

    /// Built-in domain template to use instead of a config file.
    #[arg(short, long, conflicts_with = "config")]
    template: Option<String>,

    /// Output dataset path.
    #[arg(short, long)]
    out: PathBuf,

    /// Output format: csv, json, or parquet (requires the parquet-export feature).
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// Random seed; overrides the config/template default when set.
    #[arg(long)]
    seed: Option<u64>,

    /// Optional path for the JSON metadata sidecar.
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::new(level.to_string())
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &Args) -> Result<(), String> {
    let mut config = load_config(args)?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let format = ExportFormat::from_str(&args.format).map_err(|e| e.to_string())?;

    info!(entities = config.entities.len(), seed = config.seed, "generating dataset");
    let result = synthgen_core::generate(&config).map_err(|e| e.to_string())?;
    for w in &result.warnings {
        warn!("{w}");
    }

    synthgen_io::write_table(&result.table, &args.out, format).map_err(|e| e.to_string())?;
    info!(path = %args.out.display(), rows = result.table.num_rows(), columns = result.table.num_columns(), "wrote dataset");

    if let Some(metadata_path) = &args.metadata {
        let metadata = synthgen_io::RunMetadata::from_run(&config, &result.table, chrono::Utc::now());
        metadata.write_to_file(metadata_path).map_err(|e| e.to_string())?;
        info!(path = %metadata_path.display(), "wrote metadata sidecar");
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<synthgen_core::model::GeneratorConfig, String> {
    if let Some(template_name) = &args.template {
        let domain = Domain::from_str(template_name)?;
        return Ok(synthgen_templates::build(domain, args.seed.unwrap_or(0)));
    }
    if let Some(config_path) = &args.config {
        let (config, warnings) = synthgen_config::load_from_file(config_path).map_err(|e| e.to_string())?;
        for w in &warnings {
            warn!("{w}");
        }
        return Ok(config);
    }
    Err("one of --config or --template is required".to_string())
}
