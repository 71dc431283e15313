use std::{borrow::Cow, fmt};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Tokens that load as [`Cell::Missing`] instead of text.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%Y %b %d",
];

/// Two-digit-year layouts, tried only after every four-digit layout fails.
const SHORT_YEAR_DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%d/%m/%y",
    "%d-%b-%y",
    "%b %d, %y",
    "%B %d, %y",
    "%d.%m.%y",
    "%d %b %y",
];

/// `%Y` also accepts one to three digits; such years are never meant literally.
const MIN_FULL_YEAR: i32 = 1000;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A single table cell.
///
/// Raw columns hold [`Cell::Text`] and [`Cell::Missing`]; normalized columns
/// hold numbers, dates, or one of the two missing sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Cell {
    #[default]
    Missing,
    /// A value that could not be read as a calendar date.
    NotADate,
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Both sentinels count as missing for downstream consumers.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing | Cell::NotADate)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// String form of a present value, or `None` for the missing sentinels.
    ///
    /// Floats keep a fractional part (`80.0`) so suffix and decimal checks see
    /// the same text a float column would print.
    pub fn string_form(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Missing | Cell::NotADate => None,
            Cell::Text(value) => Some(Cow::Borrowed(value)),
            Cell::Integer(i) => Some(Cow::Owned(i.to_string())),
            Cell::Float(f) => Some(Cow::Owned(float_string_form(*f))),
            Cell::Date(d) => Some(Cow::Owned(d.format("%Y-%m-%d").to_string())),
        }
    }

    pub fn as_display(&self) -> String {
        match self {
            Cell::Missing | Cell::NotADate => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Integer(i) => i.to_string(),
            Cell::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            }
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Rendering used by previews, where missing values must stay visible.
    pub fn preview_text(&self) -> String {
        match self {
            Cell::Missing => "<missing>".to_string(),
            Cell::NotADate => "<NaT>".to_string(),
            Cell::Float(f) => float_string_form(*f),
            other => other.as_display(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

/// Outcome of a single cell parse attempt.
///
/// Normalizers build on these and only collapse [`Parsed::Unparseable`] into a
/// missing sentinel at the column boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    Parsed(T),
    Unparseable,
}

impl<T> Parsed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Parsed(value) => Parsed::Parsed(f(value)),
            Parsed::Unparseable => Parsed::Unparseable,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Parsed<U>) -> Parsed<U> {
        match self {
            Parsed::Parsed(value) => f(value),
            Parsed::Unparseable => Parsed::Unparseable,
        }
    }
}

impl<T: Into<Cell>> Parsed<T> {
    /// Collapses to [`Cell::Missing`] when unparseable.
    pub fn into_cell(self) -> Cell {
        self.into_cell_or(Cell::Missing)
    }

    pub fn into_cell_or(self, sentinel: Cell) -> Cell {
        match self {
            Parsed::Parsed(value) => value.into(),
            Parsed::Unparseable => sentinel,
        }
    }
}

impl<T> From<Option<T>> for Parsed<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Parsed::Unparseable, Parsed::Parsed)
    }
}

impl<T, E> From<Result<T, E>> for Parsed<T> {
    fn from(value: Result<T, E>) -> Self {
        value.ok().into()
    }
}

pub fn is_missing_marker(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// Parses a decimal literal, ignoring surrounding whitespace.
///
/// Accepts the same spellings as a float literal: signs, exponents, `inf`,
/// and `nan`.
pub fn parse_float(value: &str) -> Parsed<f64> {
    value.trim().parse::<f64>().into()
}

/// Narrows a float to an integer by truncating toward zero.
pub fn truncate_to_int(value: f64) -> Parsed<i64> {
    if !value.is_finite() {
        return Parsed::Unparseable;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Parsed::Unparseable;
    }
    Parsed::Parsed(truncated as i64)
}

/// Rounds half to even, then narrows to an integer.
pub fn round_to_int(value: f64) -> Parsed<i64> {
    truncate_to_int(value.round_ties_even())
}

/// Rounds half to even at the given number of decimal places.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Best-effort calendar date parse over the common textual layouts.
pub fn parse_lenient_date(value: &str) -> Parsed<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Parsed::Unparseable;
    }
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    let full_year = |date: &NaiveDate| date.year() >= MIN_FULL_YEAR;
    if let Some(parsed) = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(&collapsed, fmt).ok())
        .find(full_year)
    {
        return Parsed::Parsed(parsed);
    }
    if let Some(parsed) = DATETIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(&collapsed, fmt).ok())
        .map(|datetime| datetime.date())
        .find(full_year)
    {
        return Parsed::Parsed(parsed);
    }
    if let Some(parsed) = SHORT_YEAR_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&collapsed, fmt).ok())
    {
        return Parsed::Parsed(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&collapsed) {
        return Parsed::Parsed(parsed.date_naive());
    }
    if collapsed.len() == 4 && collapsed.chars().all(|c| c.is_ascii_digit()) {
        return collapsed
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .into();
    }
    Parsed::Unparseable
}

fn float_string_form(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
