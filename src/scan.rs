//! Diagnostic scan of raw columns.
//!
//! Counts the formatting irregularities of each requested column without
//! touching the data. Name-like columns (the club column) are checked for
//! leading whitespace and embedded digits. Leading whitespace is any Unicode
//! whitespace, so the newline-padded club names of the export count alongside
//! space-padded ones. Every other column is treated as a measurement and
//! each present cell is attributed to at most one suffix category, tried in
//! the fixed order `m`, `k`, `kg`, `lbs`, then plain decimal.

use std::{
    collections::{BTreeMap, HashSet},
    fmt::Write as _,
    sync::OnceLock,
};

use itertools::Itertools;
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::TableError,
    table::{Column, Table},
};

const NAME_LIKE_COLUMNS: &[&str] = &["club"];

const NAME_CATEGORIES: &[Category] = &[
    Category::Missing,
    Category::LeadingWhitespace,
    Category::ContainsDigits,
];

const MEASUREMENT_CATEGORIES: &[Category] = &[
    Category::Missing,
    Category::EndsInM,
    Category::EndsInK,
    Category::EndsInKg,
    Category::EndsInLbs,
    Category::Decimal,
];

static DECIMAL_PATTERN: OnceLock<Regex> = OnceLock::new();
static DIGIT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn decimal_pattern() -> &'static Regex {
    DECIMAL_PATTERN.get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("decimal pattern compiles"))
}

fn digit_pattern() -> &'static Regex {
    DIGIT_PATTERN.get_or_init(|| Regex::new(r"\d").expect("digit pattern compiles"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Missing,
    LeadingWhitespace,
    ContainsDigits,
    EndsInM,
    EndsInK,
    EndsInKg,
    EndsInLbs,
    Decimal,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Missing => "missing",
            Category::LeadingWhitespace => "leading whitespace",
            Category::ContainsDigits => "contains digits",
            Category::EndsInM => "ends in m",
            Category::EndsInK => "ends in k",
            Category::EndsInKg => "ends in kg",
            Category::EndsInLbs => "ends in lbs",
            Category::Decimal => "decimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFamily {
    NameLike,
    Measurement,
}

impl ColumnFamily {
    /// Default family for a column, keyed on its case-insensitive name.
    pub fn for_column(name: &str) -> Self {
        if NAME_LIKE_COLUMNS
            .iter()
            .any(|candidate| name.eq_ignore_ascii_case(candidate))
        {
            ColumnFamily::NameLike
        } else {
            ColumnFamily::Measurement
        }
    }

    pub fn categories(self) -> &'static [Category] {
        match self {
            ColumnFamily::NameLike => NAME_CATEGORIES,
            ColumnFamily::Measurement => MEASUREMENT_CATEGORIES,
        }
    }
}

/// Attributes a measurement value to its first matching category.
pub fn classify_measurement(value: &str) -> Option<Category> {
    let v = value.trim().to_lowercase();
    if v.ends_with('m') {
        Some(Category::EndsInM)
    } else if v.ends_with('k') {
        Some(Category::EndsInK)
    } else if v.ends_with("kg") {
        Some(Category::EndsInKg)
    } else if v.ends_with("lbs") {
        Some(Category::EndsInLbs)
    } else if decimal_pattern().is_match(&v) {
        Some(Category::Decimal)
    } else {
        None
    }
}

/// Irregularities of a name-like value; a value may carry both.
pub fn classify_name(value: &str) -> Vec<Category> {
    let mut found = Vec::new();
    if value.starts_with(char::is_whitespace) {
        found.push(Category::LeadingWhitespace);
    }
    if digit_pattern().is_match(value) {
        found.push(Category::ContainsDigits);
    }
    found
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub column: String,
    pub family: ColumnFamily,
    pub counts: BTreeMap<Category, usize>,
}

impl ColumnReport {
    fn new(column: &str, family: ColumnFamily) -> Self {
        let counts = family
            .categories()
            .iter()
            .map(|category| (*category, 0))
            .collect();
        Self {
            column: column.to_string(),
            family,
            counts,
        }
    }

    fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Categories with at least one hit, in category order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| (*category, *count))
    }

    pub fn summary(&self) -> String {
        let parts = self
            .nonzero()
            .map(|(category, count)| format!("{}={count}", category.label()))
            .join(", ");
        if parts.is_empty() {
            "no irregularities".to_string()
        } else {
            parts
        }
    }
}

/// Per-column category counts, in the order the columns were requested.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnomalyReport {
    columns: Vec<ColumnReport>,
}

impl AnomalyReport {
    pub fn get(&self, column: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|report| report.column == column)
    }

    pub fn columns(&self) -> &[ColumnReport] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Human-readable summary listing only nonzero counts.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for report in &self.columns {
            let _ = writeln!(output, "--- {} ---", report.column);
            for (category, count) in report.nonzero() {
                let _ = writeln!(output, "{}: {count}", category.label());
            }
        }
        output
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    name_like: Vec<String>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats these columns as name-like in addition to the built-in ones.
    pub fn with_name_like_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_like.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn family_for(&self, column: &str) -> ColumnFamily {
        if self.name_like.iter().any(|name| name == column) {
            ColumnFamily::NameLike
        } else {
            ColumnFamily::for_column(column)
        }
    }

    pub fn scan<S: AsRef<str>>(
        &self,
        table: &Table,
        columns: &[S],
    ) -> Result<AnomalyReport, TableError> {
        let mut seen = HashSet::new();
        let mut reports = Vec::with_capacity(columns.len());
        for name in columns {
            let name = name.as_ref();
            let column = table.require_column(name)?;
            if !seen.insert(name) {
                continue;
            }
            let report = self.scan_column(column);
            info!("Scanned '{}': {}", report.column, report.summary());
            reports.push(report);
        }
        Ok(AnomalyReport { columns: reports })
    }

    pub fn scan_column(&self, column: &Column) -> ColumnReport {
        let family = self.family_for(&column.name);
        let mut report = ColumnReport::new(&column.name, family);
        for cell in &column.cells {
            let Some(value) = cell.string_form() else {
                report.record(Category::Missing);
                continue;
            };
            match family {
                ColumnFamily::NameLike => {
                    for category in classify_name(&value) {
                        report.record(category);
                    }
                }
                ColumnFamily::Measurement => {
                    if let Some(category) = classify_measurement(&value) {
                        report.record(category);
                    }
                }
            }
        }
        report
    }
}

pub fn scan<S: AsRef<str>>(table: &Table, columns: &[S]) -> Result<AnomalyReport, TableError> {
    Scanner::new().scan(table, columns)
}
