//! In-memory column table and its ASCII rendering.
//!
//! A [`Table`] is an ordered list of named [`Column`]s whose cells are aligned
//! by row position. Every constructor and mutator keeps the columns the same
//! length and the names unique; violations surface as [`TableError`].

use std::borrow::Cow;
use std::collections::HashSet;
use std::iter;

use itertools::Itertools;

use crate::{data::Cell, error::TableError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a raw text column; empty strings become [`Cell::Missing`].
    pub fn from_text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells = values
            .into_iter()
            .map(|value| {
                let value = value.into();
                if value.is_empty() {
                    Cell::Missing
                } else {
                    Cell::Text(value)
                }
            })
            .collect();
        Self::new(name, cells)
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_missing()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
        }
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            if let Some(bad) = columns.iter().find(|c| c.cells.len() != expected) {
                return Err(TableError::LengthMismatch {
                    column: bad.name.clone(),
                    expected,
                    actual: bad.cells.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Builds a table from a header row and row-major cells.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        let width = headers.len();
        let mut columns = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect::<Vec<_>>();
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(TableError::RowWidth {
                    row: idx + 1,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }
        Self::new(columns)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn require_column(&self, name: &str) -> Result<&Column, TableError> {
        self.column(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    pub fn cells(&self, name: &str) -> Result<&[Cell], TableError> {
        self.require_column(name).map(|c| c.cells.as_slice())
    }

    /// Rewrites every cell of `name` in place.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<(), TableError>
    where
        F: FnMut(&Cell) -> Cell,
    {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        let column = &mut self.columns[idx];
        column.cells = column.cells.iter().map(&mut f).collect();
        Ok(())
    }

    /// Replaces the cells of `name`, or appends a new column when absent.
    pub fn set_column(&mut self, name: &str, cells: Vec<Cell>) -> Result<(), TableError> {
        if !self.columns.is_empty() && cells.len() != self.row_count() {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count(),
                actual: cells.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => self.columns[idx].cells = cells,
            None => self.columns.push(Column::new(name, cells)),
        }
        Ok(())
    }

    /// Removes every named column, or none when any name is unknown.
    pub fn drop_columns<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), TableError> {
        if let Some(unknown) = names.iter().find(|n| !self.has_column(n.as_ref())) {
            return Err(TableError::MissingColumn(unknown.as_ref().to_string()));
        }
        let doomed = names.iter().map(AsRef::as_ref).collect::<HashSet<&str>>();
        self.columns.retain(|c| !doomed.contains(c.name.as_str()));
        Ok(())
    }

    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[index]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.row_count()).map(move |idx| self.columns.iter().map(|c| &c.cells[idx]).collect())
    }

    /// First `limit` rows rendered for display.
    pub fn preview_rows(&self, limit: usize) -> Vec<Vec<String>> {
        self.rows()
            .take(limit)
            .map(|row| row.into_iter().map(Cell::preview_text).collect())
            .collect()
    }
}

/// Owned form of [`Table::drop_columns`].
pub fn drop_columns<S: AsRef<str>>(mut table: Table, names: &[S]) -> Result<Table, TableError> {
    table.drop_columns(names)?;
    Ok(table)
}

/// Left-aligned grid with a dashed rule under the headers.
///
/// Columns are separated by two spaces and sized by character count. Cells
/// beyond the header count are ignored.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let rule_widths = widths.iter().map(|w| (*w).max(3)).collect::<Vec<_>>();
    let rule = rule_widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>();
    iter::once(aligned_line(headers, &widths))
        .chain(iter::once(aligned_line(&rule, &rule_widths)))
        .chain(rows.iter().map(|row| aligned_line(row, &widths)))
        .fold(String::new(), |mut output, line| {
            output.push_str(&line);
            output.push('\n');
            output
        })
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| display_width(cell))
                .fold(display_width(header), usize::max)
                .max(1)
        })
        .collect()
}

fn aligned_line(values: &[String], widths: &[usize]) -> String {
    let line = values
        .iter()
        .zip(widths)
        .map(|(value, width)| {
            let cell = single_line(value);
            let padding = width.saturating_sub(display_width(&cell));
            format!("{cell}{}", " ".repeat(padding))
        })
        .join("  ");
    line.trim_end_matches(' ').to_string()
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Line breaks and tabs would break the grid.
fn single_line(value: &str) -> Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        Cow::Owned(value.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(value)
    }
}
