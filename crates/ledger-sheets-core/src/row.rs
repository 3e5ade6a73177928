//! Rows and the row builder
//!
//! A [`Row`] is produced by a [`RowBuilder`], which fixes the row index up
//! front and then lays cells out left to right starting at column A. Formula
//! cells are given as closures that receive the addresses of their sibling
//! cells, so a formula never hardcodes a reference.

use crate::cell::{Cell, CellAddress, CellValue};
use crate::error::{Error, Result};
use crate::style::CellFormatHandle;
use crate::{MAX_COLS, MAX_ROWS};

/// One row of addressed cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: u32,
    cells: Vec<Cell>,
}

impl Row {
    /// Row index (1-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by 1-based column number
    pub fn cell(&self, column: u32) -> Option<&Cell> {
        column
            .checked_sub(1)
            .and_then(|i| self.cells.get(i as usize))
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells in row
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Addresses of every cell in a row under construction
#[derive(Debug, Clone, Copy)]
pub struct RowAddresses<'r> {
    row: u32,
    addresses: &'r [CellAddress],
}

impl<'r> RowAddresses<'r> {
    /// Row index the addresses belong to
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Address of the cell at a 1-based column position
    pub fn column(&self, column: u32) -> Result<&'r CellAddress> {
        if column == 0 {
            return Err(Error::InvalidCoordinate {
                row: self.row,
                column,
            });
        }
        self.addresses
            .get(column as usize - 1)
            .ok_or(Error::MissingSibling {
                row: self.row,
                column,
            })
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

type FormulaFn<'a> = Box<dyn FnOnce(&RowAddresses<'_>) -> Result<String> + 'a>;

enum PendingValue<'a> {
    Literal(CellValue),
    Formula(FormulaFn<'a>),
}

/// Builds one [`Row`] at a fixed index
///
/// # Example
/// ```
/// use ledger_sheets_core::formula;
/// use ledger_sheets_core::{CellFormatHandle, RowBuilder};
///
/// let style = CellFormatHandle::DEFAULT;
/// let row = RowBuilder::new(2)
///     .unwrap()
///     .value(5.0, style)
///     .value(4.0, style)
///     .formula(style, |cells| Ok(formula::product(cells.column(1)?, cells.column(2)?)))
///     .build()
///     .unwrap();
///
/// assert_eq!(row.cell(3).unwrap().value.formula_text(), Some("=A2*B2"));
/// ```
pub struct RowBuilder<'a> {
    index: u32,
    pending: Vec<(PendingValue<'a>, CellFormatHandle)>,
}

impl<'a> RowBuilder<'a> {
    /// Start a row at a 1-based index, at most [`MAX_ROWS`]
    pub fn new(index: u32) -> Result<Self> {
        if index == 0 || index > MAX_ROWS {
            return Err(Error::InvalidCoordinate {
                row: index,
                column: 1,
            });
        }
        Ok(Self {
            index,
            pending: Vec::new(),
        })
    }

    /// Row index this builder was created with
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Append a literal value
    pub fn value<V: Into<CellValue>>(mut self, value: V, style: CellFormatHandle) -> Self {
        self.push_value(value, style);
        self
    }

    /// Append a blank placeholder
    pub fn blank(mut self, style: CellFormatHandle) -> Self {
        self.push_value(CellValue::Blank, style);
        self
    }

    /// Append a formula built from the row's addresses
    pub fn formula<F>(mut self, style: CellFormatHandle, build: F) -> Self
    where
        F: FnOnce(&RowAddresses<'_>) -> Result<String> + 'a,
    {
        self.push_formula(style, build);
        self
    }

    /// Append a literal value in place
    pub fn push_value<V: Into<CellValue>>(&mut self, value: V, style: CellFormatHandle) {
        self.pending
            .push((PendingValue::Literal(value.into()), style));
    }

    /// Append a formula in place
    pub fn push_formula<F>(&mut self, style: CellFormatHandle, build: F)
    where
        F: FnOnce(&RowAddresses<'_>) -> Result<String> + 'a,
    {
        self.pending
            .push((PendingValue::Formula(Box::new(build)), style));
    }

    /// Address every cell, evaluate formula closures, and produce the row
    pub fn build(self) -> Result<Row> {
        let addresses = (1..=self.pending.len() as u32)
            .map(|column| CellAddress::new(self.index, column))
            .collect::<Result<Vec<_>>>()?;

        let siblings = RowAddresses {
            row: self.index,
            addresses: &addresses,
        };

        let mut cells = Vec::with_capacity(self.pending.len());
        for ((pending, style), address) in self.pending.into_iter().zip(addresses.iter()) {
            let value = match pending {
                PendingValue::Literal(value) => value,
                PendingValue::Formula(build) => CellValue::Formula(build(&siblings)?),
            };
            cells.push(Cell::new(*address, value, style));
        }

        Ok(Row {
            index: self.index,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula;
    use pretty_assertions::assert_eq;

    const STYLE: CellFormatHandle = CellFormatHandle::DEFAULT;

    #[test]
    fn test_addresses_left_to_right() {
        let row = RowBuilder::new(7)
            .unwrap()
            .value("a", STYLE)
            .value(1.0, STYLE)
            .value(true, STYLE)
            .blank(STYLE)
            .build()
            .unwrap();

        let refs: Vec<String> = row.cells().iter().map(|c| c.address.to_string()).collect();
        assert_eq!(refs, vec!["A7", "B7", "C7", "D7"]);
        assert_eq!(row.index(), 7);
        assert!(row.cells().iter().all(|c| c.address.row() == 7));
    }

    #[test]
    fn test_formula_sees_sibling_addresses() {
        let row = RowBuilder::new(3)
            .unwrap()
            .value(2.0, STYLE)
            .value(5.0, STYLE)
            .formula(STYLE, |cells| {
                Ok(formula::product(cells.column(1)?, cells.column(2)?))
            })
            .build()
            .unwrap();

        assert_eq!(row.cell(3).unwrap().value, CellValue::formula("=A3*B3"));
    }

    #[test]
    fn test_formula_may_reference_later_columns() {
        let row = RowBuilder::new(4)
            .unwrap()
            .formula(STYLE, |cells| {
                Ok(formula::product(cells.column(2)?, cells.column(3)?))
            })
            .value(1.0, STYLE)
            .value(1.0, STYLE)
            .build()
            .unwrap();

        assert_eq!(row.cell(1).unwrap().value.formula_text(), Some("=B4*C4"));
    }

    #[test]
    fn test_missing_sibling() {
        let result = RowBuilder::new(2)
            .unwrap()
            .formula(STYLE, |cells| {
                Ok(formula::product(cells.column(1)?, cells.column(9)?))
            })
            .build();

        assert!(matches!(
            result,
            Err(Error::MissingSibling { row: 2, column: 9 })
        ));
    }

    #[test]
    fn test_row_zero_rejected() {
        assert!(matches!(
            RowBuilder::new(0),
            Err(Error::InvalidCoordinate { row: 0, .. })
        ));
    }

    #[test]
    fn test_row_past_sheet_end_rejected() {
        assert!(RowBuilder::new(MAX_ROWS).is_ok());
        assert!(matches!(
            RowBuilder::new(MAX_ROWS + 1),
            Err(Error::InvalidCoordinate { row: 1_048_577, .. })
        ));
    }

    #[test]
    fn test_row_width_limit() {
        let mut builder = RowBuilder::new(2).unwrap();
        for _ in 0..MAX_COLS {
            builder.push_value(1.0, STYLE);
        }
        let row = builder.build().unwrap();
        assert_eq!(row.cells().last().unwrap().address.to_string(), "XFD2");

        let mut builder = RowBuilder::new(2).unwrap();
        for _ in 0..=MAX_COLS {
            builder.push_value(1.0, STYLE);
        }
        assert!(matches!(
            builder.build(),
            Err(Error::InvalidCoordinate { row: 2, column: 16_385 })
        ));
    }

    #[test]
    fn test_cell_lookup() {
        let row = RowBuilder::new(1).unwrap().value("x", STYLE).build().unwrap();
        assert!(row.cell(0).is_none());
        assert!(row.cell(2).is_none());
        assert_eq!(row.cell(1).unwrap().value.as_text(), Some("x"));
    }
}
