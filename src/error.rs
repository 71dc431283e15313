//! Structural errors raised by table operations.
//!
//! Cell-level parse failures never show up here; they collapse to
//! [`Cell::Missing`](crate::data::Cell::Missing) inside the normalizers.
//! Everything in [`TableError`] points at an integration mistake by the
//! caller (unknown column, misaligned columns) and is always propagated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Column '{0}' not found in table")]
    MissingColumn(String),
    #[error("Column '{0}' appears more than once")]
    DuplicateColumn(String),
    #[error("Column '{column}' has {actual} row(s) but the table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("Row {row} has {actual} field(s) but the header declares {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
