//! Cell styling types
//!
//! This module contains the palette tables and their entries:
//! - [`StylePalette`] - Append-only tables issuing handles
//! - [`NumberFormatEntry`] - Custom number format codes
//! - [`FontEntry`] - Font settings
//! - [`FillEntry`] - Background fill
//! - [`BorderEntry`] - Cell borders
//! - [`CellFormat`] - Composite format referencing the above, plus [`Alignment`]

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod palette;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdges, BorderEntry, BorderLineStyle, BorderSide};
pub use color::Rgb;
pub use fill::{FillEntry, FillPattern, HatchPattern};
pub use font::FontEntry;
pub use number_format::{NumberFormatEntry, NumberFormatId, CUSTOM_NUMBER_FORMAT_FLOOR};
pub use palette::{
    BorderHandle, CellFormat, CellFormatHandle, FillHandle, FontHandle, NumberFormatHandle,
    PaletteSnapshot, StylePalette, StyleTable, TableCounts,
};
