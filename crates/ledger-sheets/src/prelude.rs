//! Prelude module - common imports for ledger-sheets users
//!
//! ```rust
//! use ledger_sheets::prelude::*;
//! ```

pub use crate::{
    // Building
    assemble,
    BuildOptions,
    // Layout
    ColumnKind,
    ColumnLayout,
    ColumnSpec,
    Document,
    // Error types
    Error,
    // Records
    InvoiceRecord,
    InvoiceStyles,
    Result,
    SheetAssembler,
    TextField,
};
