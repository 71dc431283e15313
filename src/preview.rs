use anyhow::Result;
use log::info;

use crate::{cli::PreviewArgs, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let loaded = crate::load_input(&args.source)?;
    let rows = loaded.preview_rows(args.rows);
    table::print_table(&loaded.headers(), &rows);
    info!(
        "Displayed {} of {} row(s) from {:?}",
        rows.len(),
        loaded.row_count(),
        args.source.input
    );
    Ok(())
}
