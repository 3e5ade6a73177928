//! Column layout of the invoice sheet
//!
//! A layout is an ordered list of [`ColumnSpec`]s. Each column's semantic
//! [`ColumnKind`] decides which record field fills it and which style it
//! gets; the layout itself only fixes order, labels and widths.

use std::fmt;

use ledger_sheets_core::{ColumnWidth, MAX_COLS};

use crate::error::{Error, Result};

/// Which text field of a record a column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Customer first name
    First,
    /// Customer last name
    Last,
}

/// Semantic kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Invoice number, zero padded
    Identifier,
    /// Invoice date and time
    Timestamp,
    /// Free text
    Text(TextField),
    /// Boolean written as a numeral
    Flag,
    /// Units ordered
    Quantity,
    /// Price per unit
    UnitPrice,
    /// Quantity times unit price, computed by a formula
    Subtotal,
}

impl ColumnKind {
    /// Numeric columns have right-justified headers
    pub fn is_right_aligned(self) -> bool {
        matches!(
            self,
            ColumnKind::Quantity | ColumnKind::UnitPrice | ColumnKind::Subtotal
        )
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Identifier => "identifier",
            ColumnKind::Timestamp => "timestamp",
            ColumnKind::Text(TextField::First) => "text (first name)",
            ColumnKind::Text(TextField::Last) => "text (last name)",
            ColumnKind::Flag => "flag",
            ColumnKind::Quantity => "quantity",
            ColumnKind::UnitPrice => "unit price",
            ColumnKind::Subtotal => "subtotal",
        };
        f.write_str(name)
    }
}

/// One column of the layout
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Header text
    pub label: String,
    /// Semantic kind
    pub kind: ColumnKind,
    /// Width in character units
    pub width: f64,
    /// Width is fixed rather than a hint
    pub custom_width: bool,
}

impl ColumnSpec {
    /// Create a column with a fixed width
    pub fn new<S: Into<String>>(label: S, kind: ColumnKind, width: f64) -> Self {
        Self {
            label: label.into(),
            kind,
            width,
            custom_width: true,
        }
    }

    /// Set whether the width is fixed
    pub fn with_custom_width(mut self, custom_width: bool) -> Self {
        self.custom_width = custom_width;
        self
    }
}

/// Validated, ordered column list
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    columns: Vec<ColumnSpec>,
}

impl ColumnLayout {
    /// Validate a column list
    ///
    /// A layout needs at least three columns, exactly one quantity and one
    /// unit price column, and exactly one subtotal column in last position.
    /// It may not be wider than the sheet ([`MAX_COLS`] columns).
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        if columns.len() < 3 {
            return Err(Error::InvalidLayout(format!(
                "need at least 3 columns, got {}",
                columns.len()
            )));
        }
        if columns.len() > MAX_COLS as usize {
            return Err(Error::InvalidLayout(format!(
                "{} columns exceed the sheet width of {}",
                columns.len(),
                MAX_COLS
            )));
        }
        for kind in [
            ColumnKind::Quantity,
            ColumnKind::UnitPrice,
            ColumnKind::Subtotal,
        ] {
            let count = columns.iter().filter(|c| c.kind == kind).count();
            if count != 1 {
                return Err(Error::InvalidLayout(format!(
                    "need exactly one {} column, got {}",
                    kind, count
                )));
            }
        }
        if columns.last().map(|c| c.kind) != Some(ColumnKind::Subtotal) {
            return Err(Error::InvalidLayout(
                "subtotal must be the last column".into(),
            ));
        }
        if let Some(c) = columns.iter().find(|c| c.width.is_nan() || c.width <= 0.0) {
            return Err(Error::InvalidLayout(format!(
                "column '{}' has width {}",
                c.label, c.width
            )));
        }
        Ok(Self { columns })
    }

    /// The standard eight-column invoice layout
    pub fn invoice() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new("INVOICE#", ColumnKind::Identifier, 16.0),
                ColumnSpec::new("DATE", ColumnKind::Timestamp, 25.0),
                ColumnSpec::new("FIRST", ColumnKind::Text(TextField::First), 20.0),
                ColumnSpec::new("LAST", ColumnKind::Text(TextField::Last), 20.0),
                ColumnSpec::new("WILL PICKUP", ColumnKind::Flag, 15.0),
                ColumnSpec::new("QTY", ColumnKind::Quantity, 15.0),
                ColumnSpec::new("UNITPRICE", ColumnKind::UnitPrice, 15.0),
                ColumnSpec::new("SUBTOTAL", ColumnKind::Subtotal, 15.0),
            ],
        }
    }

    /// Columns in order
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a validated layout
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// 1-based position of the first column of a kind
    pub fn position(&self, kind: ColumnKind) -> Option<u32> {
        self.columns
            .iter()
            .position(|c| c.kind == kind)
            .map(|i| i as u32 + 1)
    }

    /// Width metadata for the packager
    pub fn column_widths(&self) -> Vec<ColumnWidth> {
        self.columns
            .iter()
            .zip(1u32..)
            .map(|(spec, column)| ColumnWidth {
                column,
                width: spec.width,
                custom_width: spec.custom_width,
            })
            .collect()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::invoice()
    }
}
