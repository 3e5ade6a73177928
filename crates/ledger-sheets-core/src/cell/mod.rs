//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "H7")
//! - [`CellRange`] - A column span (e.g., "H2:H8")
//! - [`Cell`] - An addressed, styled value

mod address;
mod value;

pub use address::{address, column_letters, column_number, CellAddress, CellRange};
pub use value::{boolean_numeral, date_serial, CellValue};

use crate::style::CellFormatHandle;

/// A single addressed cell with its value and cell format
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Where the cell lives
    pub address: CellAddress,
    /// What it holds
    pub value: CellValue,
    /// Index into the palette's cell format table
    pub style: CellFormatHandle,
}

impl Cell {
    /// Create a new cell
    pub fn new(address: CellAddress, value: CellValue, style: CellFormatHandle) -> Self {
        Self {
            address,
            value,
            style,
        }
    }
}
