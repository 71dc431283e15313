//! Ordered application of the configured cleaning steps.

use std::fmt;

use log::info;

use crate::{
    config::CleanConfig,
    error::TableError,
    normalize::{club, height, hits, joined, money, weight},
    scan::{AnomalyReport, Scanner},
    table::Table,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Drop(Vec<String>),
    Club(String),
    Hits(String),
    Weight { column: String, target: String },
    Height { column: String, target: String },
    Joined(String),
    Money { columns: Vec<String>, suffix: String },
}

impl Step {
    pub fn apply(&self, table: Table) -> Result<Table, TableError> {
        match self {
            Step::Drop(columns) => crate::table::drop_columns(table, columns),
            Step::Club(column) => club::normalize(table, column),
            Step::Hits(column) => hits::normalize(table, column),
            Step::Weight { column, target } => weight::normalize(table, column, target),
            Step::Height { column, target } => height::normalize(table, column, target),
            Step::Joined(column) => joined::normalize(table, column),
            Step::Money { columns, suffix } => money::normalize(table, columns, suffix),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Drop(columns) => write!(f, "drop {}", columns.join(", ")),
            Step::Club(column) => write!(f, "club names in '{column}'"),
            Step::Hits(column) => write!(f, "hit counts in '{column}'"),
            Step::Weight { column, target } => write!(f, "weight '{column}' -> '{target}'"),
            Step::Height { column, target } => write!(f, "height '{column}' -> '{target}'"),
            Step::Joined(column) => write!(f, "join dates in '{column}'"),
            Step::Money { columns, suffix } => {
                write!(f, "money {} (suffix '{suffix}')", columns.join(", "))
            }
        }
    }
}

/// Steps implied by `config`, in execution order. Drops come first.
pub fn steps(config: &CleanConfig) -> Vec<Step> {
    let mut steps = Vec::new();
    if !config.drop_columns.is_empty() {
        steps.push(Step::Drop(config.drop_columns.clone()));
    }
    if let Some(column) = &config.club {
        steps.push(Step::Club(column.clone()));
    }
    if let Some(column) = &config.hits {
        steps.push(Step::Hits(column.clone()));
    }
    if let Some(derived) = &config.weight {
        steps.push(Step::Weight {
            column: derived.column.clone(),
            target: derived.target.clone(),
        });
    }
    if let Some(derived) = &config.height {
        steps.push(Step::Height {
            column: derived.column.clone(),
            target: derived.target.clone(),
        });
    }
    if let Some(column) = &config.joined {
        steps.push(Step::Joined(column.clone()));
    }
    if let Some(money) = &config.money
        && !money.columns.is_empty()
    {
        steps.push(Step::Money {
            columns: money.columns.clone(),
            suffix: money.suffix.clone(),
        });
    }
    steps
}

pub fn run(mut table: Table, config: &CleanConfig) -> Result<Table, TableError> {
    for step in steps(config) {
        table = step.apply(table)?;
        info!(
            "Applied {step}: {} row(s), {} column(s)",
            table.row_count(),
            table.column_count()
        );
    }
    Ok(table)
}

/// Scans the configured columns of a raw table.
pub fn scan(table: &Table, config: &CleanConfig) -> Result<AnomalyReport, TableError> {
    Scanner::new()
        .with_name_like_columns(config.name_like_columns.iter().cloned())
        .scan(table, &config.scan_columns)
}
