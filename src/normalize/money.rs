//! Monetary values such as `€1.5M`, `€500K`, or `€0`, read as euros.
//!
//! The magnitude suffix scales a parsed mantissa by an explicit power of ten;
//! the text itself is never evaluated.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    data::{Cell, Parsed, parse_float},
    error::TableError,
    table::Table,
};

pub const DEFAULT_COLUMNS: &[&str] = &["Value", "Wage", "Release Clause"];
pub const DEFAULT_SUFFIX: &str = "_eur";
pub const CURRENCY_SYMBOL: char = '€';

static PLAIN_NUMBER: OnceLock<Regex> = OnceLock::new();
static SCIENTIFIC_NUMBER: OnceLock<Regex> = OnceLock::new();

fn plain_number() -> &'static Regex {
    PLAIN_NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("plain number pattern compiles")
    })
}

fn scientific_number() -> &'static Regex {
    SCIENTIFIC_NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$")
            .expect("scientific number pattern compiles")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Unit,
    Thousand,
    Million,
}

impl Magnitude {
    pub fn factor(self) -> f64 {
        match self {
            Magnitude::Unit => 1.0,
            Magnitude::Thousand => 1e3,
            Magnitude::Million => 1e6,
        }
    }

    /// Splits a trailing `K`/`M` marker off `value`.
    pub fn split(value: &str) -> (&str, Magnitude) {
        if let Some(mantissa) = value.strip_suffix('K') {
            (mantissa, Magnitude::Thousand)
        } else if let Some(mantissa) = value.strip_suffix('M') {
            (mantissa, Magnitude::Million)
        } else {
            (value, Magnitude::Unit)
        }
    }
}

pub fn parse_money(value: &str) -> Parsed<f64> {
    let stripped = value.replace(CURRENCY_SYMBOL, "");
    let (mantissa, magnitude) = Magnitude::split(stripped.trim());
    let shape = match magnitude {
        Magnitude::Unit => scientific_number(),
        Magnitude::Thousand | Magnitude::Million => plain_number(),
    };
    if !shape.is_match(mantissa) {
        return Parsed::Unparseable;
    }
    parse_float(mantissa)
        .map(|amount| amount * magnitude.factor())
        .and_then(super::reject_nan)
}

/// Only text cells carry an amount; everything else is missing.
pub fn money_cell(cell: &Cell) -> Cell {
    match cell.as_text() {
        Some(value) => parse_money(value).into_cell(),
        None => Cell::Missing,
    }
}

pub fn target_name(column: &str, suffix: &str) -> String {
    format!("{column}{suffix}")
}

/// Adds `<column><suffix>` for every column, then removes the originals.
pub fn normalize<S: AsRef<str>>(
    mut table: Table,
    columns: &[S],
    suffix: &str,
) -> Result<Table, TableError> {
    for column in columns {
        table.require_column(column.as_ref())?;
    }
    for column in columns {
        let column = column.as_ref();
        let target = target_name(column, suffix);
        if target == column {
            table = super::rewrite_column(table, column, money_cell)?;
            continue;
        }
        let cells = table
            .require_column(column)?
            .cells
            .iter()
            .map(money_cell)
            .collect::<Vec<_>>();
        table.set_column(&target, cells)?;
    }
    if !suffix.is_empty() {
        table.drop_columns(columns)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn applies_magnitude_suffixes() {
        assert_eq!(parse_money("€1.5M"), Parsed::Parsed(1_500_000.0));
        assert_eq!(parse_money("€500K"), Parsed::Parsed(500_000.0));
        assert_eq!(parse_money("€0"), Parsed::Parsed(0.0));
        assert_eq!(parse_money("€103.5M"), Parsed::Parsed(103_500_000.0));
    }

    #[test]
    fn rejects_anything_but_a_number() {
        assert_eq!(parse_money("€"), Parsed::Unparseable);
        assert_eq!(parse_money("€1,000"), Parsed::Unparseable);
        assert_eq!(parse_money("€1.5m"), Parsed::Unparseable);
        assert_eq!(parse_money("€1e3K"), Parsed::Unparseable);
        assert_eq!(parse_money("inf"), Parsed::Unparseable);
        assert_eq!(parse_money("__import__('os')"), Parsed::Unparseable);
    }

    #[test]
    fn non_text_cells_are_missing() {
        assert_eq!(money_cell(&Cell::Float(5.0)), Cell::Missing);
        assert_eq!(money_cell(&Cell::Missing), Cell::Missing);
    }

    #[test]
    fn normalize_renames_with_suffix() {
        let table = Table::new(vec![
            Column::from_text("Value", ["€1.5M", "€500K"]),
            Column::from_text("Wage", ["€0", "n/a"]),
            Column::from_text("Name", ["A", "B"]),
        ])
        .unwrap();
        let cleaned = normalize(table, &["Value", "Wage"], DEFAULT_SUFFIX).unwrap();
        assert_eq!(cleaned.headers(), vec!["Name", "Value_eur", "Wage_eur"]);
        assert_eq!(
            cleaned.cells("Value_eur").unwrap(),
            &[Cell::Float(1_500_000.0), Cell::Float(500_000.0)]
        );
        assert_eq!(
            cleaned.cells("Wage_eur").unwrap(),
            &[Cell::Float(0.0), Cell::Missing]
        );
    }

    #[test]
    fn normalize_checks_every_column_first() {
        let table = Table::new(vec![Column::from_text("Value", ["€1M"])]).unwrap();
        let err = normalize(table, &["Value", "Wage"], DEFAULT_SUFFIX).unwrap_err();
        assert_eq!(err, TableError::MissingColumn("Wage".to_string()));
    }
}
