//! Error types for invoice document builds

use thiserror::Error;

/// Result type for ledger-sheets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a document build
#[derive(Debug, Error)]
pub enum Error {
    /// A record failed validation or could not be parsed
    #[error("Record {position}: {field} {reason}")]
    Record {
        /// Zero-based record index
        position: usize,
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Column layout cannot produce a valid sheet
    #[error("Invalid column layout: {0}")]
    InvalidLayout(String),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core error
    #[error(transparent)]
    Core(#[from] ledger_sheets_core::Error),

    /// Packaging error
    #[error(transparent)]
    Xlsx(#[from] ledger_sheets_xlsx::XlsxError),
}

impl Error {
    pub(crate) fn record<S: Into<String>>(position: usize, field: &'static str, reason: S) -> Self {
        Error::Record {
            position,
            field,
            reason: reason.into(),
        }
    }
}
