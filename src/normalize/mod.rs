//! Per-column normalizers.
//!
//! Each submodule owns one column family and exposes a cell-level parser that
//! returns [`Parsed`](crate::data::Parsed), plus a `normalize` function that
//! applies it to a [`Table`]. Cells that cannot be parsed collapse to a missing
//! sentinel; the only errors are structural ones such as an unknown column.

pub mod club;
pub mod height;
pub mod hits;
pub mod joined;
pub mod money;
pub mod weight;

use log::debug;

use crate::{
    data::{Cell, Parsed},
    error::TableError,
    table::Table,
};

/// Rewrites `column` cell by cell, keeping its name and position.
pub(crate) fn rewrite_column<F>(
    mut table: Table,
    column: &str,
    convert: F,
) -> Result<Table, TableError>
where
    F: Fn(&Cell) -> Cell,
{
    let before = table.require_column(column)?.missing_count();
    table.map_column(column, convert)?;
    let after = table.require_column(column)?.missing_count();
    log_collapsed(column, before, after);
    Ok(table)
}

/// Writes the converted cells of `source` to `target`, then removes `source`.
///
/// `target` is appended when new and replaced when it already exists. When the
/// two names match the column is rewritten in place instead.
pub(crate) fn derive_column<F>(
    mut table: Table,
    source: &str,
    target: &str,
    convert: F,
) -> Result<Table, TableError>
where
    F: Fn(&Cell) -> Cell,
{
    if source == target {
        return rewrite_column(table, source, convert);
    }
    let original = table.require_column(source)?;
    let before = original.missing_count();
    let cells = original.cells.iter().map(convert).collect::<Vec<_>>();
    let after = cells.iter().filter(|cell| cell.is_missing()).count();
    table.set_column(target, cells)?;
    table.drop_columns(&[source])?;
    log_collapsed(target, before, after);
    Ok(table)
}

/// NaN reads as a number but is a missing value for every consumer.
pub(crate) fn reject_nan(value: f64) -> Parsed<f64> {
    if value.is_nan() {
        Parsed::Unparseable
    } else {
        Parsed::Parsed(value)
    }
}

fn log_collapsed(column: &str, before: usize, after: usize) {
    let collapsed = after.saturating_sub(before);
    if collapsed > 0 {
        debug!("'{column}': {collapsed} unparseable cell(s) set to missing");
    }
}
