pub mod clean;
pub mod cli;
pub mod columns;
pub mod config;
pub mod data;
pub mod error;
pub mod io_utils;
pub mod normalize;
pub mod pipeline;
pub mod preview;
pub mod scan;
pub mod table;

use std::{env, path::Path, sync::OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::{Cli, Commands, InputArgs, ScanArgs},
    config::CleanConfig,
    scan::Scanner,
    table::Table,
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("player_stats_clean", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview::execute(&args),
        Commands::Columns(args) => columns::execute(&args),
        Commands::Scan(args) => handle_scan(&args),
        Commands::Clean(args) => clean::execute(&args),
    }
}

fn handle_scan(args: &ScanArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let columns = if args.columns.is_empty() {
        config.scan_columns.clone()
    } else {
        args.columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
    };
    debug!("Scan columns: {:?}", columns);
    let loaded = load_input(&args.source)?;
    let report = Scanner::new()
        .with_name_like_columns(config.name_like_columns.iter().cloned())
        .with_name_like_columns(args.name_like.iter().cloned())
        .scan(&loaded, &columns)
        .with_context(|| format!("Scanning {:?}", args.source.input))?;
    if args.json {
        let rendered = serde_json::to_string_pretty(&report).context("Serializing scan report")?;
        println!("{rendered}");
    } else {
        print!("{}", report.render());
    }
    info!(
        "Scanned {} column(s) across {} row(s)",
        report.len(),
        loaded.row_count()
    );
    Ok(())
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<CleanConfig> {
    match path {
        Some(path) => {
            CleanConfig::load(path).with_context(|| format!("Loading config from {path:?}"))
        }
        None => Ok(CleanConfig::default()),
    }
}

pub(crate) fn load_input(args: &InputArgs) -> Result<Table> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    info!(
        "Reading '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(delimiter)
    );
    io_utils::load_table(&args.input, delimiter, encoding)
}

pub(crate) fn printable_delimiter(delimiter: u8) -> String {
    match delimiter {
        b',' => ",".to_string(),
        b'\t' => "\\t".to_string(),
        b'\n' => "\\n".to_string(),
        other => (other as char).to_string(),
    }
}
