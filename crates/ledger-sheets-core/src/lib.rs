//! # ledger-sheets-core
//!
//! Core data structures for the ledger-sheets spreadsheet builder.
//!
//! This crate provides the fundamental types used throughout ledger-sheets:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing (1-based)
//! - [`StylePalette`] - Append-only style tables issuing stable handles
//! - [`RowBuilder`] and [`Row`] - Addressed, styled, optionally formula-bearing cells
//! - [`Sheet`] - Ordered rows plus column widths
//!
//! ## Example
//!
//! ```rust
//! use ledger_sheets_core::formula;
//! use ledger_sheets_core::{CellFormat, FontEntry, RowBuilder, Sheet, StylePalette};
//!
//! let mut palette = StylePalette::new();
//! let bold = palette.add_font(FontEntry::new().with_bold(true)).unwrap();
//! let style = palette.add_cell_format(CellFormat::new().with_font(bold)).unwrap();
//! let styles = palette.finalize().unwrap();
//!
//! let mut sheet = Sheet::new("Sheet1").unwrap();
//! let row = RowBuilder::new(1)
//!     .unwrap()
//!     .value(2.0, style)
//!     .value(3.0, style)
//!     .formula(style, |cells| Ok(formula::product(cells.column(1)?, cells.column(2)?)))
//!     .build()
//!     .unwrap();
//! sheet.push_row(row).unwrap();
//!
//! assert_eq!(styles.counts().cell_formats, 1);
//! assert_eq!(sheet.rows()[0].cells()[2].value.formula_text(), Some("=A1*B1"));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod formula;
pub mod row;
pub mod sheet;
pub mod style;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellRange, CellValue};
pub use column::ColumnWidth;
pub use error::{Error, Result};
pub use row::{Row, RowAddresses, RowBuilder};
pub use sheet::Sheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdges, BorderEntry, BorderHandle, BorderLineStyle, BorderSide, CellFormat,
    CellFormatHandle, FillEntry, FillHandle, FillPattern, FontEntry, FontHandle, HatchPattern,
    HorizontalAlignment, NumberFormatEntry, NumberFormatHandle, NumberFormatId, PaletteSnapshot,
    Rgb, StylePalette, StyleTable, TableCounts, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
