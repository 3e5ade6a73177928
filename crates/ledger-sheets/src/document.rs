//! Invoice documents

use std::io::{Seek, Write};
use std::path::Path;

use ledger_sheets_core::{PaletteSnapshot, Sheet, StylePalette};
use ledger_sheets_xlsx::XlsxWriter;
use log::debug;

use crate::assembler::assemble;
use crate::error::Result;
use crate::layout::ColumnLayout;
use crate::options::BuildOptions;
use crate::record::InvoiceRecord;
use crate::styles::InvoiceStyles;

/// A fully assembled sheet together with its finalized styles
///
/// Every build gets its own palette, so documents can be built on separate
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct Document {
    sheet: Sheet,
    styles: PaletteSnapshot,
}

impl Document {
    /// Build the palette, assemble the sheet, and finalize
    ///
    /// Nothing is returned unless every record is valid and every style
    /// reference resolves.
    pub fn build(
        layout: &ColumnLayout,
        records: &[InvoiceRecord],
        options: &BuildOptions,
    ) -> Result<Self> {
        let mut palette = StylePalette::with_number_format_floor(options.number_format_floor)?;
        let invoice_styles = InvoiceStyles::build(&mut palette)?;
        let styles = palette.finalize()?;

        let sheet = assemble(
            layout,
            &invoice_styles,
            records,
            &options.sheet_name,
            &options.footer_label,
        )?;
        debug!(
            "document '{}' built from {} records",
            sheet.name(),
            records.len()
        );
        Ok(Self { sheet, styles })
    }

    /// The assembled sheet
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// The finalized styles
    pub fn styles(&self) -> &PaletteSnapshot {
        &self.styles
    }

    /// Write the package to a writer
    pub fn write<W: Write + Seek>(&self, writer: W) -> Result<()> {
        XlsxWriter::write(&self.sheet, &self.styles, writer)?;
        Ok(())
    }

    /// Write the package into memory
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(XlsxWriter::to_bytes(&self.sheet, &self.styles)?)
    }

    /// Write the package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        XlsxWriter::write_file(&self.sheet, &self.styles, path)?;
        Ok(())
    }
}
