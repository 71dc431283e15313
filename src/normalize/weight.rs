//! Player weight, reported in either kilograms or pounds, as whole kilograms.
//!
//! The two units round differently: kilogram values truncate toward zero while
//! converted pound values round half to even.

use crate::{
    data::{Cell, Parsed, parse_float, round_to_int, truncate_to_int},
    error::TableError,
    table::Table,
};

pub const DEFAULT_COLUMN: &str = "Weight";
pub const DEFAULT_TARGET: &str = "Weight_kg";

pub const KG_PER_LB: f64 = 0.453592;

pub fn parse_weight_kg(value: &str) -> Parsed<i64> {
    let w = value.trim().to_lowercase();
    if w.ends_with("kg") {
        parse_float(&w.replace("kg", "")).and_then(truncate_to_int)
    } else if w.ends_with("lbs") {
        parse_float(&w.replace("lbs", ""))
            .map(|lbs| lbs * KG_PER_LB)
            .and_then(round_to_int)
    } else {
        parse_float(&w).and_then(truncate_to_int)
    }
}

pub fn weight_cell(cell: &Cell) -> Cell {
    match cell.string_form() {
        Some(value) => parse_weight_kg(&value).into_cell(),
        None => Cell::Missing,
    }
}

/// Adds `target` in kilograms and removes `column`.
pub fn normalize(table: Table, column: &str, target: &str) -> Result<Table, TableError> {
    super::derive_column(table, column, target, weight_cell)
}
