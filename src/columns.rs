//! Column listing for a CSV file.
//!
//! Renders each column's position, name, and number of missing cells as an
//! ASCII table.

use anyhow::Result;
use log::info;

use crate::{cli::ColumnsArgs, table::Table};

pub fn execute(args: &ColumnsArgs) -> Result<()> {
    let loaded = crate::load_input(&args.source)?;

    if loaded.column_count() == 0 {
        info!("{:?} does not define any columns", args.source.input);
        return Ok(());
    }

    let (headers, rows) = column_listing(&loaded);
    crate::table::print_table(&headers, &rows);
    info!(
        "Listed {} column(s) from {:?}",
        loaded.column_count(),
        args.source.input
    );
    Ok(())
}

pub fn column_listing(table: &Table) -> (Vec<String>, Vec<Vec<String>>) {
    let rows = table
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            vec![
                (idx + 1).to_string(),
                column.name.clone(),
                column.missing_count().to_string(),
            ]
        })
        .collect();
    let headers = vec!["#".to_string(), "name".to_string(), "missing".to_string()];
    (headers, rows)
}
