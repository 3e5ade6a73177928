//! # ledger-sheets-xlsx
//!
//! Serializes a [`Sheet`](ledger_sheets_core::Sheet) and a finalized
//! [`PaletteSnapshot`](ledger_sheets_core::PaletteSnapshot) into an XLSX
//! (Office Open XML) package.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
