//! # ledger-sheets
//!
//! Build styled, formula-bearing invoice workbooks.
//!
//! An invoice sheet has a header row, one row per [`InvoiceRecord`], and a
//! footer with a grand total. Each data row ends in a subtotal formula
//! (`=F2*G2`) and the footer sums the subtotal column (`=SUM(H2:H4)`), so the
//! spreadsheet application computes the figures when the file is opened.
//!
//! ## Features
//!
//! - Column layouts driven by semantic [`ColumnKind`]s
//! - A fresh, append-only style palette per document
//! - Record validation with positions in error messages
//! - CSV record source
//! - XLSX output via `ledger-sheets-xlsx`
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ledger_sheets::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let record = InvoiceRecord {
//!     invoice_number: 1001,
//!     invoice_date: NaiveDate::from_ymd_opt(2024, 1, 2)
//!         .unwrap()
//!         .and_hms_opt(9, 0, 0)
//!         .unwrap(),
//!     first_name: "Paul".into(),
//!     last_name: "Swanson".into(),
//!     will_pick_up: true,
//!     quantity: Decimal::new(2, 0),
//!     unit_price: Decimal::new(300, 2),
//! };
//!
//! let document = Document::build(
//!     &ColumnLayout::invoice(),
//!     &[record],
//!     &BuildOptions::default(),
//! )
//! .unwrap();
//!
//! let footer = document.sheet().rows().last().unwrap();
//! assert_eq!(footer.cell(8).unwrap().value.formula_text(), Some("=SUM(H2:H2)"));
//!
//! // Save to file
//! // document.save("invoices.xlsx").unwrap();
//! ```

pub mod assembler;
pub mod document;
pub mod error;
pub mod layout;
pub mod options;
pub mod prelude;
pub mod record;
pub mod source;
pub mod styles;

pub use assembler::{assemble, SheetAssembler};
pub use document::Document;
pub use error::{Error, Result};
pub use layout::{ColumnKind, ColumnLayout, ColumnSpec, TextField};
pub use options::{BuildOptions, CsvSourceOptions};
pub use record::InvoiceRecord;
pub use source::{read_records, read_records_file, read_records_with};
pub use styles::InvoiceStyles;

// Re-export core types
pub use ledger_sheets_core::cell::column_letters;
pub use ledger_sheets_core::{
    Cell, CellAddress, CellFormatHandle, CellRange, CellValue, PaletteSnapshot, Row, Sheet,
    StylePalette,
};

// Re-export I/O types
pub use ledger_sheets_xlsx::{XlsxError, XlsxWriter};
