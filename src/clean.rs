use anyhow::{Context, Result};
use log::info;

use crate::{cli::CleanArgs, io_utils, pipeline, table};

pub fn execute(args: &CleanArgs) -> Result<()> {
    let mut config = crate::load_config(args.config.as_deref())?;
    config.drop_columns.extend(args.drop.iter().cloned());

    let input_delimiter =
        io_utils::resolve_input_delimiter(&args.source.input, args.source.delimiter);
    let output_encoding = io_utils::resolve_encoding(args.output_encoding.as_deref())?;
    let raw = crate::load_input(&args.source)?;

    if args.report {
        let report = pipeline::scan(&raw, &config).context("Scanning raw columns")?;
        info!("Scanned {} column(s) before cleaning", report.len());
    }

    let cleaned = pipeline::run(raw, &config).context("Applying cleaning steps")?;

    if args.table {
        table::print_table(&cleaned.headers(), &cleaned.preview_rows(args.rows));
        return Ok(());
    }

    let output_delimiter = io_utils::resolve_output_delimiter(
        args.output.as_deref(),
        args.output_delimiter,
        input_delimiter,
    );
    io_utils::write_table(
        &cleaned,
        args.output.as_deref(),
        output_delimiter,
        output_encoding,
    )?;

    let destination = args
        .output
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    info!(
        "Cleaned {} row(s) across {} column(s) -> {}",
        cleaned.row_count(),
        cleaned.column_count(),
        destination
    );
    Ok(())
}
