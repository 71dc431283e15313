//! Cleaning pipeline configuration.
//!
//! A [`CleanConfig`] names the columns each normalizer works on. Every field
//! has a default matching the player statistics export, so an empty file (or
//! no file at all) cleans the standard layout. Setting a normalizer to `null`
//! disables it.
//!
//! ```yaml
//! drop_columns: [photoUrl, playerUrl]
//! club: Club
//! hits: Hits
//! weight: { column: Weight, target: Weight_kg }
//! height: { column: Height, target: Height_cm }
//! joined: Joined
//! money:
//!   columns: [Value, Wage, Release Clause]
//!   suffix: _eur
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::normalize::{club, height, hits, joined, money, weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedColumn {
    pub column: String,
    pub target: String,
}

impl DerivedColumn {
    pub fn new(column: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyColumns {
    pub columns: Vec<String>,
    #[serde(default = "default_money_suffix")]
    pub suffix: String,
}

impl Default for MoneyColumns {
    fn default() -> Self {
        Self {
            columns: money::DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            suffix: default_money_suffix(),
        }
    }
}

fn default_money_suffix() -> String {
    money::DEFAULT_SUFFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Columns removed before any normalizer runs.
    pub drop_columns: Vec<String>,
    /// Columns covered by the diagnostic scan.
    pub scan_columns: Vec<String>,
    /// Extra columns scanned as names rather than measurements.
    pub name_like_columns: Vec<String>,
    pub club: Option<String>,
    pub hits: Option<String>,
    pub weight: Option<DerivedColumn>,
    pub height: Option<DerivedColumn>,
    pub joined: Option<String>,
    pub money: Option<MoneyColumns>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        let mut scan_columns = vec![
            club::DEFAULT_COLUMN.to_string(),
            hits::DEFAULT_COLUMN.to_string(),
            weight::DEFAULT_COLUMN.to_string(),
            height::DEFAULT_COLUMN.to_string(),
        ];
        scan_columns.extend(money::DEFAULT_COLUMNS.iter().map(|c| c.to_string()));
        Self {
            drop_columns: Vec::new(),
            scan_columns,
            name_like_columns: Vec::new(),
            club: Some(club::DEFAULT_COLUMN.to_string()),
            hits: Some(hits::DEFAULT_COLUMN.to_string()),
            weight: Some(DerivedColumn::new(
                weight::DEFAULT_COLUMN,
                weight::DEFAULT_TARGET,
            )),
            height: Some(DerivedColumn::new(
                height::DEFAULT_COLUMN,
                height::DEFAULT_TARGET,
            )),
            joined: Some(joined::DEFAULT_COLUMN.to_string()),
            money: Some(MoneyColumns::default()),
        }
    }
}

impl CleanConfig {
    /// A configuration with every normalizer disabled.
    pub fn empty() -> Self {
        Self {
            drop_columns: Vec::new(),
            scan_columns: Vec::new(),
            name_like_columns: Vec::new(),
            club: None,
            hits: None,
            weight: None,
            height: None,
            joined: None,
            money: None,
        }
    }

    /// Loads JSON when the extension is `.json`, YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening config file {path:?}"))?;
        let reader = BufReader::new(file);
        if is_json(path) {
            serde_json::from_reader(reader).context("Parsing config JSON")
        } else {
            serde_yaml::from_reader(reader).context("Parsing config YAML")
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Creating config file {path:?}"))?;
        let writer = BufWriter::new(file);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self).context("Writing config JSON")
        } else {
            serde_yaml::to_writer(writer, self).context("Writing config YAML")
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Serializing config to YAML string")
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_standard_layout() {
        let config = CleanConfig::default();
        assert_eq!(config.club.as_deref(), Some("Club"));
        assert_eq!(
            config.weight,
            Some(DerivedColumn::new("Weight", "Weight_kg"))
        );
        let money = config.money.expect("money defaults");
        assert_eq!(money.columns, vec!["Value", "Wage", "Release Clause"]);
        assert_eq!(money.suffix, "_eur");
        assert!(config.scan_columns.contains(&"Release Clause".to_string()));
    }

    #[test]
    fn yaml_fills_in_missing_fields_and_honours_null() {
        let yaml = "drop_columns: [photoUrl]\nclub: null\nmoney:\n  columns: [Wage]\n";
        let config: CleanConfig = serde_yaml::from_str(yaml).expect("parse config");
        assert_eq!(config.drop_columns, vec!["photoUrl"]);
        assert_eq!(config.club, None);
        assert_eq!(config.hits.as_deref(), Some("Hits"));
        let money = config.money.expect("money section");
        assert_eq!(money.columns, vec!["Wage"]);
        assert_eq!(money.suffix, "_eur");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<CleanConfig, _> = serde_yaml::from_str("clubs: Club\n");
        assert!(result.is_err());
    }

    #[test]
    fn yaml_round_trips_defaults() {
        let config = CleanConfig::default();
        let yaml = config.to_yaml_string().expect("serialize");
        let parsed: CleanConfig = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(parsed, config);
    }
}
