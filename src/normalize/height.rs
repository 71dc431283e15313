//! Player height in centimetres, from either `175cm` or feet-and-inches
//! (`5'11"`) text.

use crate::{
    data::{Cell, Parsed, parse_float, round_to_places},
    error::TableError,
    table::Table,
};

pub const DEFAULT_COLUMN: &str = "Height";
pub const DEFAULT_TARGET: &str = "Height_cm";

const CM_PER_INCH: f64 = 2.54;
const INCHES_PER_FOOT: i64 = 12;

pub fn parse_height_cm(value: &str) -> Parsed<f64> {
    if value.contains("cm") {
        parse_float(&value.replace("cm", "")).and_then(super::reject_nan)
    } else if value.contains('\'') {
        parse_feet_inches(value)
    } else {
        Parsed::Unparseable
    }
}

fn parse_feet_inches(value: &str) -> Parsed<f64> {
    let cleaned = value.replace('"', "");
    let parts = cleaned.split('\'').collect::<Vec<_>>();
    let [feet, inches] = parts.as_slice() else {
        return Parsed::Unparseable;
    };
    let (Ok(feet), Ok(inches)) = (feet.trim().parse::<i64>(), inches.trim().parse::<i64>()) else {
        return Parsed::Unparseable;
    };
    feet.checked_mul(INCHES_PER_FOOT)
        .and_then(|total| total.checked_add(inches))
        .map(|total| round_to_places(total as f64 * CM_PER_INCH, 1))
        .into()
}

/// Only text cells carry a height; everything else is missing.
pub fn height_cell(cell: &Cell) -> Cell {
    match cell.as_text() {
        Some(value) => parse_height_cm(value).into_cell(),
        None => Cell::Missing,
    }
}

/// Adds `target` in centimetres and removes `column`.
pub fn normalize(table: Table, column: &str, target: &str) -> Result<Table, TableError> {
    super::derive_column(table, column, target, height_cell)
}
