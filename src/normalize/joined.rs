//! Join dates, parsed leniently; anything unreadable becomes
//! [`Cell::NotADate`].

use crate::{
    data::{Cell, parse_lenient_date},
    error::TableError,
    table::Table,
};

pub const DEFAULT_COLUMN: &str = "Joined";

pub fn join_date_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Date(date) => Cell::Date(*date),
        Cell::Text(value) => parse_lenient_date(value).into_cell_or(Cell::NotADate),
        _ => Cell::NotADate,
    }
}

pub fn normalize(table: Table, column: &str) -> Result<Table, TableError> {
    super::rewrite_column(table, column, join_date_cell)
}
