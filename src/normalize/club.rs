//! Club names: drop the stray digits, punctuation, and padding that precede
//! the name proper.

use std::sync::OnceLock;

use regex::Regex;

use crate::{data::Cell, error::TableError, table::Table};

pub const DEFAULT_COLUMN: &str = "Club";

static LEADING_NON_ALPHA: OnceLock<Regex> = OnceLock::new();

fn leading_non_alpha() -> &'static Regex {
    LEADING_NON_ALPHA
        .get_or_init(|| Regex::new(r"^[^\p{Alphabetic}]+").expect("club pattern compiles"))
}

/// Trims, strips the leading run of non-letters, and trims again.
///
/// Any Unicode letter ends the stripped run, not just `A-Z`/`a-z`, so names
/// opening with an accented letter keep it. Only the start of the name is
/// touched.
pub fn clean_club_name(value: &str) -> String {
    let trimmed = value.trim();
    leading_non_alpha().replace(trimmed, "").trim().to_string()
}

pub fn clean_club_cell(cell: &Cell) -> Cell {
    match cell.string_form() {
        Some(value) => Cell::Text(clean_club_name(&value)),
        None => Cell::Missing,
    }
}

pub fn normalize(table: Table, column: &str) -> Result<Table, TableError> {
    super::rewrite_column(table, column, clean_club_cell)
}
