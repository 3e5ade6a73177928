//! Error types for ledger-sheets-core

use thiserror::Error;

use crate::style::StyleTable;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ledger-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row or column outside the sheet (rows 1..=1048576, columns 1..=16384)
    #[error("Invalid coordinate: row {row}, column {column} (rows run 1-1048576, columns 1-16384)")]
    InvalidCoordinate { row: u32, column: u32 },

    /// Column number outside the sheet, with no row involved
    #[error("Invalid column {0} (columns run 1-16384)")]
    InvalidColumn(u32),

    /// Text that does not parse as an A1-style reference
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// A cell format references an entry past the end of its table
    #[error(
        "Cell format {cell_format} references {table} handle {handle}, but the table has {len} entries"
    )]
    DanglingStyleReference {
        cell_format: u32,
        table: StyleTable,
        handle: u32,
        len: usize,
    },

    /// Operation not permitted in the current state (e.g. adding to a finalized palette)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Number format ID inside the range reserved for built-in formats
    #[error("Number format ID {id} collides with the built-in range (custom IDs start at {floor})")]
    ReservedNumberFormatId { id: u32, floor: u32 },

    /// A formula referred to a column the row does not have
    #[error("Row {row} has no cell in column {column}")]
    MissingSibling { row: u32, column: u32 },

    /// Rows must be appended in strictly increasing index order
    #[error("Row {next} cannot follow row {previous}")]
    RowOutOfOrder { previous: u32, next: u32 },

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),
}

impl Error {
    /// Create an "invalid state" error with a message
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }
}
