//! Append-only style palette
//!
//! A [`StylePalette`] owns five tables: number formats, fonts, fills, borders
//! and the composite cell formats that reference them. Every `add_*` call
//! appends a new entry and returns a handle to it, even when an identical
//! entry already exists. Handles are positions in their table and never
//! change once issued.
//!
//! Number formats are the odd one out: a cell format refers to them by
//! *format ID* (see [`NumberFormatId`]), while fonts, fills and borders are
//! referred to by table index.
//!
//! Once [`StylePalette::finalize`] succeeds, the palette is locked and the
//! returned [`PaletteSnapshot`] is what gets serialized.

use std::fmt;

use log::debug;

use super::number_format::{NumberFormatEntry, NumberFormatId, CUSTOM_NUMBER_FORMAT_FLOOR};
use super::{Alignment, BorderEntry, FillEntry, FontEntry};
use crate::error::{Error, Result};

macro_rules! table_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw table index. Unchecked until the palette is finalized.
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Zero-based position in the owning table
            pub fn index(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

table_handle!(
    /// Index into the font table
    FontHandle
);
table_handle!(
    /// Index into the fill table
    FillHandle
);
table_handle!(
    /// Index into the border table
    BorderHandle
);
table_handle!(
    /// Index into the cell format table; this is what a cell's style refers to
    CellFormatHandle
);

impl CellFormatHandle {
    /// The first cell format, used for unstyled cells
    pub const DEFAULT: CellFormatHandle = CellFormatHandle(0);
}

/// Handle to a custom number format
///
/// Carries both the table position and the format ID; cell formats store the ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberFormatHandle {
    index: u32,
    id: NumberFormatId,
}

impl NumberFormatHandle {
    /// Zero-based position in the number format table
    pub fn index(self) -> u32 {
        self.index
    }

    /// Format ID to reference from cell formats
    pub fn id(self) -> NumberFormatId {
        self.id
    }
}

/// The five palette tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTable {
    NumberFormats,
    Fonts,
    Fills,
    Borders,
    CellFormats,
}

impl fmt::Display for StyleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleTable::NumberFormats => "number format",
            StyleTable::Fonts => "font",
            StyleTable::Fills => "fill",
            StyleTable::Borders => "border",
            StyleTable::CellFormats => "cell format",
        };
        f.write_str(name)
    }
}

/// Composite cell format
///
/// Each component is apply-if-present: a format without a font inherits the
/// default font, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellFormat {
    /// Number format ID (not a table index)
    pub number_format: Option<NumberFormatId>,
    /// Font table index
    pub font: Option<FontHandle>,
    /// Fill table index
    pub fill: Option<FillHandle>,
    /// Border table index
    pub border: Option<BorderHandle>,
    /// Alignment
    pub alignment: Alignment,
}

impl CellFormat {
    /// Create a cell format that applies nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a custom number format
    pub fn with_number_format(mut self, format: NumberFormatHandle) -> Self {
        self.number_format = Some(format.id());
        self
    }

    /// Apply a built-in number format by ID
    pub fn with_builtin_number_format(mut self, id: NumberFormatId) -> Self {
        self.number_format = Some(id);
        self
    }

    /// Apply a font
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = Some(font);
        self
    }

    /// Apply a fill
    pub fn with_fill(mut self, fill: FillHandle) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Apply a border
    pub fn with_border(mut self, border: BorderHandle) -> Self {
        self.border = Some(border);
        self
    }

    /// Apply an alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Entry count of each table, as recorded at finalize time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableCounts {
    pub number_formats: usize,
    pub fonts: usize,
    pub fills: usize,
    pub borders: usize,
    pub cell_formats: usize,
}

/// Builder for the five style tables of one document
#[derive(Debug)]
pub struct StylePalette {
    number_format_floor: u32,
    number_formats: Vec<NumberFormatEntry>,
    fonts: Vec<FontEntry>,
    fills: Vec<FillEntry>,
    borders: Vec<BorderEntry>,
    cell_formats: Vec<CellFormat>,
    finalized: bool,
}

impl StylePalette {
    /// Create an empty palette issuing custom number format IDs from 164
    pub fn new() -> Self {
        Self {
            number_format_floor: CUSTOM_NUMBER_FORMAT_FLOOR,
            number_formats: Vec::new(),
            fonts: Vec::new(),
            fills: Vec::new(),
            borders: Vec::new(),
            cell_formats: Vec::new(),
            finalized: false,
        }
    }

    /// Create an empty palette issuing custom number format IDs from `floor`
    ///
    /// The floor must not reach into the built-in range.
    pub fn with_number_format_floor(floor: u32) -> Result<Self> {
        if floor < CUSTOM_NUMBER_FORMAT_FLOOR {
            return Err(Error::ReservedNumberFormatId {
                id: floor,
                floor: CUSTOM_NUMBER_FORMAT_FLOOR,
            });
        }
        let mut palette = Self::new();
        palette.number_format_floor = floor;
        Ok(palette)
    }

    /// First ID issued to custom number formats
    pub fn number_format_floor(&self) -> u32 {
        self.number_format_floor
    }

    /// Check if [`finalize`](Self::finalize) has succeeded
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Append a custom number format, assigning it the next unused format ID
    pub fn add_number_format<S: Into<String>>(&mut self, pattern: S) -> Result<NumberFormatHandle> {
        self.ensure_open(StyleTable::NumberFormats)?;

        let index = next_index(self.number_formats.len(), StyleTable::NumberFormats)?;
        let id = self
            .number_format_floor
            .checked_add(index)
            .map(NumberFormatId)
            .ok_or_else(|| Error::invalid_state("number format ID space exhausted"))?;

        self.number_formats.push(NumberFormatEntry {
            id,
            pattern: pattern.into(),
        });
        Ok(NumberFormatHandle { index, id })
    }

    /// Append a font
    pub fn add_font(&mut self, font: FontEntry) -> Result<FontHandle> {
        self.ensure_open(StyleTable::Fonts)?;
        let index = next_index(self.fonts.len(), StyleTable::Fonts)?;
        self.fonts.push(font);
        Ok(FontHandle(index))
    }

    /// Append a fill
    pub fn add_fill(&mut self, fill: FillEntry) -> Result<FillHandle> {
        self.ensure_open(StyleTable::Fills)?;
        let index = next_index(self.fills.len(), StyleTable::Fills)?;
        self.fills.push(fill);
        Ok(FillHandle(index))
    }

    /// Append a border
    pub fn add_border(&mut self, border: BorderEntry) -> Result<BorderHandle> {
        self.ensure_open(StyleTable::Borders)?;
        let index = next_index(self.borders.len(), StyleTable::Borders)?;
        self.borders.push(border);
        Ok(BorderHandle(index))
    }

    /// Append a cell format
    ///
    /// Component handles are not checked here; a handle past the end of its
    /// table is reported by [`finalize`](Self::finalize).
    pub fn add_cell_format(&mut self, format: CellFormat) -> Result<CellFormatHandle> {
        self.ensure_open(StyleTable::CellFormats)?;
        let index = next_index(self.cell_formats.len(), StyleTable::CellFormats)?;
        self.cell_formats.push(format);
        Ok(CellFormatHandle(index))
    }

    /// Number of entries currently in a table
    pub fn len(&self, table: StyleTable) -> usize {
        match table {
            StyleTable::NumberFormats => self.number_formats.len(),
            StyleTable::Fonts => self.fonts.len(),
            StyleTable::Fills => self.fills.len(),
            StyleTable::Borders => self.borders.len(),
            StyleTable::CellFormats => self.cell_formats.len(),
        }
    }

    /// Validate every cell format reference and lock the palette
    ///
    /// Fails with [`Error::DanglingStyleReference`] if any cell format points
    /// past the end of a table, and with [`Error::InvalidState`] if the
    /// palette was already finalized.
    pub fn finalize(&mut self) -> Result<PaletteSnapshot> {
        if self.finalized {
            return Err(Error::invalid_state("style palette is already finalized"));
        }

        for (i, format) in self.cell_formats.iter().enumerate() {
            self.check_references(i as u32, format)?;
        }

        self.finalized = true;

        let counts = TableCounts {
            number_formats: self.number_formats.len(),
            fonts: self.fonts.len(),
            fills: self.fills.len(),
            borders: self.borders.len(),
            cell_formats: self.cell_formats.len(),
        };
        debug!(
            "Style palette finalized: {} number formats, {} fonts, {} fills, {} borders, {} cell formats",
            counts.number_formats, counts.fonts, counts.fills, counts.borders, counts.cell_formats
        );

        Ok(PaletteSnapshot {
            number_format_floor: self.number_format_floor,
            number_formats: self.number_formats.clone(),
            fonts: self.fonts.clone(),
            fills: self.fills.clone(),
            borders: self.borders.clone(),
            cell_formats: self.cell_formats.clone(),
            counts,
        })
    }

    fn ensure_open(&self, table: StyleTable) -> Result<()> {
        if self.finalized {
            return Err(Error::invalid_state(format!(
                "cannot add a {} to a finalized style palette",
                table
            )));
        }
        Ok(())
    }

    fn check_references(&self, cell_format: u32, format: &CellFormat) -> Result<()> {
        if let Some(id) = format.number_format {
            let issued = self.number_format_floor as u64 + self.number_formats.len() as u64;
            let known = id.is_reserved()
                || (id.get() >= self.number_format_floor && (id.get() as u64) < issued);
            if !known {
                return Err(Error::DanglingStyleReference {
                    cell_format,
                    table: StyleTable::NumberFormats,
                    handle: id.get(),
                    len: self.number_formats.len(),
                });
            }
        }

        let components = [
            (StyleTable::Fonts, format.font.map(FontHandle::index)),
            (StyleTable::Fills, format.fill.map(FillHandle::index)),
            (StyleTable::Borders, format.border.map(BorderHandle::index)),
        ];
        for (table, handle) in components {
            let Some(handle) = handle else { continue };
            let len = self.len(table);
            if handle as usize >= len {
                return Err(Error::DanglingStyleReference {
                    cell_format,
                    table,
                    handle,
                    len,
                });
            }
        }

        Ok(())
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        Self::new()
    }
}

fn next_index(len: usize, table: StyleTable) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::invalid_state(format!("{} table is full", table)))
}

/// Immutable view of a finalized palette, handed to the packager
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSnapshot {
    number_format_floor: u32,
    number_formats: Vec<NumberFormatEntry>,
    fonts: Vec<FontEntry>,
    fills: Vec<FillEntry>,
    borders: Vec<BorderEntry>,
    cell_formats: Vec<CellFormat>,
    counts: TableCounts,
}

impl PaletteSnapshot {
    /// Entry counts recorded when the palette was finalized
    pub fn counts(&self) -> TableCounts {
        self.counts
    }

    /// First custom number format ID
    pub fn number_format_floor(&self) -> u32 {
        self.number_format_floor
    }

    /// Custom number formats, in creation order
    pub fn number_formats(&self) -> &[NumberFormatEntry] {
        &self.number_formats
    }

    /// Fonts, in creation order
    pub fn fonts(&self) -> &[FontEntry] {
        &self.fonts
    }

    /// Fills, in creation order
    pub fn fills(&self) -> &[FillEntry] {
        &self.fills
    }

    /// Borders, in creation order
    pub fn borders(&self) -> &[BorderEntry] {
        &self.borders
    }

    /// Cell formats, in creation order
    pub fn cell_formats(&self) -> &[CellFormat] {
        &self.cell_formats
    }

    /// Look up a cell format by handle
    pub fn cell_format(&self, handle: CellFormatHandle) -> Option<&CellFormat> {
        self.cell_formats.get(handle.index() as usize)
    }

    /// Look up a custom number format by ID
    pub fn number_format(&self, id: NumberFormatId) -> Option<&NumberFormatEntry> {
        self.number_formats.iter().find(|entry| entry.id == id)
    }
}
