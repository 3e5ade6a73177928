//! Cell value types

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// Day number (counted from 0001-01-01 as day 1) of 1899-12-30, the spreadsheet date epoch
const SERIAL_EPOCH_DAYS_FROM_CE: i64 = 693_594;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a boolean to the numeral spreadsheet readers expect (`1` or `0`)
///
/// Every boolean cell is serialized through this function; the words
/// `TRUE`/`FALSE` are never written.
pub fn boolean_numeral(value: bool) -> u8 {
    if value {
        1
    } else {
        0
    }
}

/// Encode a timestamp as a spreadsheet date serial (days since 1899-12-30)
///
/// The fractional part carries the time of day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use ledger_sheets_core::cell::date_serial;
///
/// let noon = NaiveDate::from_ymd_opt(1970, 1, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert_eq!(date_serial(&noon), 25569.5);
/// ```
pub fn date_serial(timestamp: &NaiveDateTime) -> f64 {
    let days = timestamp.date().num_days_from_ce() as i64 - SERIAL_EPOCH_DAYS_FROM_CE;
    let seconds = timestamp.time().num_seconds_from_midnight() as f64;
    days as f64 + seconds / SECONDS_PER_DAY
}

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank placeholder (addressed and styled, no content)
    Blank,

    /// Text value
    Text(String),

    /// Numeric value
    Number(f64),

    /// Boolean value, serialized as the numeral 1 or 0
    Boolean(bool),

    /// Date serial (see [`date_serial`])
    Date(f64),

    /// Formula expression (e.g. "=F2*G2"), typed as a number.
    ///
    /// No literal value is stored; the consuming application computes it.
    Formula(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a new formula value
    pub fn formula<S: Into<String>>(expression: S) -> Self {
        CellValue::Formula(expression.into())
    }

    /// Create a date value from a timestamp
    pub fn date(timestamp: &NaiveDateTime) -> Self {
        CellValue::Date(date_serial(timestamp))
    }

    /// Check if the cell is a blank placeholder
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Get the formula text if this is a formula cell
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Formula(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a number (booleans as 1/0, dates as serials)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) | CellValue::Date(n) => Some(*n),
            CellValue::Boolean(b) => Some(boolean_numeral(*b) as f64),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Blank => "blank",
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Boolean(_) => "boolean",
            CellValue::Date(_) => "date",
            CellValue::Formula(_) => "formula",
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Blank
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Blank => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) | CellValue::Date(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", boolean_numeral(*b)),
            CellValue::Formula(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}
