//! Sheet: ordered rows plus column widths

use crate::cell::{CellAddress, CellRange};
use crate::column::ColumnWidth;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::{MAX_COLS, MAX_SHEET_NAME_LEN};

const FORBIDDEN_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// A single worksheet built top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
    columns: Vec<ColumnWidth>,
}

impl Sheet {
    /// Create an empty sheet
    ///
    /// Names must be 1 to 31 characters and may not contain `[ ] : * ? / \`.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        validate_sheet_name(&name)?;
        Ok(Self {
            name,
            rows: Vec::new(),
            columns: Vec::new(),
        })
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a row; its index must be greater than the last row's
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if let Some(previous) = self.rows.last() {
            if row.index() <= previous.index() {
                return Err(Error::RowOutOfOrder {
                    previous: previous.index(),
                    next: row.index(),
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Set the width of one column
    pub fn set_column_width(&mut self, width: ColumnWidth) -> Result<()> {
        if width.column == 0 || width.column > MAX_COLS {
            return Err(Error::InvalidColumn(width.column));
        }
        match self.columns.binary_search_by_key(&width.column, |c| c.column) {
            Ok(i) => self.columns[i] = width,
            Err(i) => self.columns.insert(i, width),
        }
        Ok(())
    }

    /// Rows in index order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by its 1-based index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows
            .binary_search_by_key(&index, |r| r.index())
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Column widths ordered by column
    pub fn columns(&self) -> &[ColumnWidth] {
        &self.columns
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Smallest range covering every cell, if any
    pub fn used_range(&self) -> Option<CellRange> {
        let first = self.rows.iter().find(|r| !r.is_empty())?;
        let last = self.rows.iter().rev().find(|r| !r.is_empty())?;
        let widest = self.rows.iter().map(Row::len).max()? as u32;

        let start = CellAddress::new(first.index(), 1).ok()?;
        let end = CellAddress::new(last.index(), widest).ok()?;
        Some(CellRange::new(start, end))
    }
}

fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("name is empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "'{}' is longer than {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }
    if let Some(c) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "'{}' contains '{}'",
            name, c
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(Error::InvalidSheetName(format!(
            "{:?} contains a control character",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RowBuilder;
    use crate::style::CellFormatHandle;

    fn row(index: u32, cells: usize) -> Row {
        let mut builder = RowBuilder::new(index).unwrap();
        for _ in 0..cells {
            builder.push_value(1.0, CellFormatHandle::DEFAULT);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_sheet_names() {
        assert!(Sheet::new("CompleteWorksheet").is_ok());
        assert!(Sheet::new("").is_err());
        assert!(Sheet::new("a".repeat(32)).is_err());
        assert!(Sheet::new("Q1/Q2").is_err());
        assert!(Sheet::new("[draft]").is_err());
        assert!(Sheet::new("Q1\u{1}").is_err());
    }

    #[test]
    fn test_rows_strictly_increasing() {
        let mut sheet = Sheet::new("Sheet1").unwrap();
        sheet.push_row(row(1, 2)).unwrap();
        sheet.push_row(row(2, 2)).unwrap();

        assert!(matches!(
            sheet.push_row(row(2, 2)),
            Err(Error::RowOutOfOrder { previous: 2, next: 2 })
        ));
        assert!(sheet.push_row(row(1, 2)).is_err());
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row(2).map(Row::index), Some(2));
        assert!(sheet.row(3).is_none());
    }

    #[test]
    fn test_column_widths_sorted_and_replaced() {
        let mut sheet = Sheet::new("Sheet1").unwrap();
        sheet.set_column_width(ColumnWidth::custom(3, 20.0)).unwrap();
        sheet.set_column_width(ColumnWidth::custom(1, 16.0)).unwrap();
        sheet.set_column_width(ColumnWidth::hint(3, 22.0)).unwrap();

        let columns: Vec<(u32, f64)> = sheet.columns().iter().map(|c| (c.column, c.width)).collect();
        assert_eq!(columns, vec![(1, 16.0), (3, 22.0)]);
        assert!(matches!(
            sheet.set_column_width(ColumnWidth::custom(0, 1.0)),
            Err(Error::InvalidColumn(0))
        ));
        assert!(sheet.set_column_width(ColumnWidth::custom(MAX_COLS, 9.0)).is_ok());
        assert!(matches!(
            sheet.set_column_width(ColumnWidth::custom(MAX_COLS + 1, 9.0)),
            Err(Error::InvalidColumn(16_385))
        ));
    }

    #[test]
    fn test_used_range() {
        let mut sheet = Sheet::new("Sheet1").unwrap();
        assert!(sheet.used_range().is_none());

        sheet.push_row(row(1, 8)).unwrap();
        sheet.push_row(row(2, 8)).unwrap();
        sheet.push_row(row(3, 8)).unwrap();
        assert_eq!(sheet.used_range().unwrap().to_string(), "A1:H3");
    }
}
