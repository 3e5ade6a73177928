//! Named styles of the invoice sheet

use ledger_sheets_core::{
    Alignment, BorderEntry, BorderLineStyle, CellFormat, CellFormatHandle, FillEntry, FontEntry,
    HatchPattern, Rgb, StylePalette,
};

use crate::layout::ColumnKind;

/// Date and time of an invoice
pub const DATETIME_PATTERN: &str = "mm/dd/yyyy hh:mm:ss";
/// Zero-padded invoice number
pub const INVOICE_NUMBER_PATTERN: &str = "00000000";
/// Whole quantity
pub const QUANTITY_PATTERN: &str = "#";
/// Dollar amount
pub const CURRENCY_PATTERN: &str = "$#.00";

const GOLD: Rgb = Rgb::new(0xF9, 0xDF, 0x02);
const GRAY: Rgb = Rgb::new(0xB4, 0xB4, 0xB4);

/// Cell format handles used by the assembler
///
/// Building the set appends every table entry the sheet needs to a fresh
/// palette, in the order the stylesheet lists them. Fill 0 is empty and
/// fill 1 is the gray125 hatch, as spreadsheet applications expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceStyles {
    pub default: CellFormatHandle,
    pub header_left: CellFormatHandle,
    pub header_right: CellFormatHandle,
    pub text: CellFormatHandle,
    pub date: CellFormatHandle,
    pub invoice_number: CellFormatHandle,
    pub will_pick_up: CellFormatHandle,
    pub quantity: CellFormatHandle,
    pub currency: CellFormatHandle,
    pub footer_label: CellFormatHandle,
    pub footer_total: CellFormatHandle,
}

impl InvoiceStyles {
    /// Append the invoice stylesheet to `palette`
    pub fn build(palette: &mut StylePalette) -> ledger_sheets_core::Result<Self> {
        let datetime = palette.add_number_format(DATETIME_PATTERN)?;
        let invoice_number = palette.add_number_format(INVOICE_NUMBER_PATTERN)?;
        let quantity = palette.add_number_format(QUANTITY_PATTERN)?;
        let currency = palette.add_number_format(CURRENCY_PATTERN)?;

        palette.add_font(FontEntry::new())?;
        let bold = palette.add_font(FontEntry::new().with_bold(true))?;
        let red_bold = palette.add_font(FontEntry::new().with_bold(true).with_color(Rgb::RED))?;

        palette.add_fill(FillEntry::none())?;
        palette.add_fill(FillEntry::hatch(HatchPattern::Gray125))?;
        let gold = palette.add_fill(FillEntry::solid(GOLD))?;
        let green = palette.add_fill(FillEntry::solid(Rgb::GREEN))?;

        palette.add_border(BorderEntry::new())?;
        let gray = palette.add_border(BorderEntry::all(BorderLineStyle::Thin, GRAY))?;

        let header = CellFormat::new()
            .with_font(red_bold)
            .with_fill(gold)
            .with_border(gray);
        let left = Alignment::top_left();
        let right = Alignment::top_right();

        Ok(Self {
            default: palette.add_cell_format(CellFormat::new())?,
            header_left: palette.add_cell_format(header.with_alignment(left))?,
            header_right: palette.add_cell_format(header.with_alignment(right))?,
            text: palette.add_cell_format(CellFormat::new().with_alignment(left))?,
            date: palette.add_cell_format(
                CellFormat::new()
                    .with_number_format(datetime)
                    .with_alignment(left),
            )?,
            invoice_number: palette.add_cell_format(
                CellFormat::new()
                    .with_number_format(invoice_number)
                    .with_alignment(left),
            )?,
            will_pick_up: palette.add_cell_format(CellFormat::new().with_alignment(left))?,
            quantity: palette.add_cell_format(
                CellFormat::new()
                    .with_number_format(quantity)
                    .with_alignment(right),
            )?,
            currency: palette.add_cell_format(
                CellFormat::new()
                    .with_number_format(currency)
                    .with_alignment(right),
            )?,
            footer_label: palette.add_cell_format(CellFormat::new().with_alignment(right))?,
            footer_total: palette.add_cell_format(
                CellFormat::new()
                    .with_number_format(currency)
                    .with_font(bold)
                    .with_fill(green)
                    .with_border(gray)
                    .with_alignment(right),
            )?,
        })
    }

    /// Header style for a column
    pub fn header(&self, kind: ColumnKind) -> CellFormatHandle {
        if kind.is_right_aligned() {
            self.header_right
        } else {
            self.header_left
        }
    }

    /// Data style for a column
    pub fn data(&self, kind: ColumnKind) -> CellFormatHandle {
        match kind {
            ColumnKind::Identifier => self.invoice_number,
            ColumnKind::Timestamp => self.date,
            ColumnKind::Text(_) => self.text,
            ColumnKind::Flag => self.will_pick_up,
            ColumnKind::Quantity => self.quantity,
            ColumnKind::UnitPrice | ColumnKind::Subtotal => self.currency,
        }
    }
}
