//! Hit counts such as `771`, `1,204`, or `1.2K`, read as whole numbers.

use crate::{
    data::{Cell, Parsed, parse_float, truncate_to_int},
    error::TableError,
    table::Table,
};

pub const DEFAULT_COLUMN: &str = "Hits";

const THOUSAND: f64 = 1_000.0;

pub fn parse_hits(value: &str) -> Parsed<i64> {
    if value == "-" {
        return Parsed::Unparseable;
    }
    let cleaned = value.trim().replace(',', "");
    match cleaned.strip_suffix('K') {
        Some(prefix) => parse_float(prefix)
            .map(|count| count * THOUSAND)
            .and_then(truncate_to_int),
        None => parse_float(&cleaned).and_then(truncate_to_int),
    }
}

pub fn hits_cell(cell: &Cell) -> Cell {
    match cell.string_form() {
        Some(value) => parse_hits(&value).into_cell(),
        None => Cell::Missing,
    }
}

pub fn normalize(table: Table, column: &str) -> Result<Table, TableError> {
    super::rewrite_column(table, column, hits_cell)
}
