//! Sheet assembly: header, data rows, footer
//!
//! [`SheetAssembler`] moves strictly forward through three phases. The header
//! row is always row 1, each record takes the next row, and the footer closes
//! the sheet with a grand total over the subtotal column. The assembler keeps
//! track of the first and last data rows so the total formula covers exactly
//! the data, wherever it ends up.

use ledger_sheets_core::{formula, CellAddress, CellValue, Row, RowBuilder, Sheet};
use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::layout::{ColumnKind, ColumnLayout, TextField};
use crate::record::{decimal_value, InvoiceRecord};
use crate::styles::InvoiceStyles;

/// Row index of the header
pub const HEADER_ROW: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Header,
    Data,
    Footer,
}

/// Builds an invoice sheet row by row
#[derive(Debug)]
pub struct SheetAssembler<'a> {
    layout: &'a ColumnLayout,
    styles: &'a InvoiceStyles,
    sheet: Sheet,
    phase: Phase,
    next_row: u32,
    data_rows: Option<(u32, u32)>,
    records: usize,
}

impl<'a> SheetAssembler<'a> {
    /// Start a new sheet
    pub fn new(layout: &'a ColumnLayout, styles: &'a InvoiceStyles, sheet_name: &str) -> Result<Self> {
        let mut sheet = Sheet::new(sheet_name)?;
        for width in layout.column_widths() {
            sheet.set_column_width(width)?;
        }
        Ok(Self {
            layout,
            styles,
            sheet,
            phase: Phase::Header,
            next_row: HEADER_ROW,
            data_rows: None,
            records: 0,
        })
    }

    /// First and last data row, if any record was added
    pub fn data_rows(&self) -> Option<(u32, u32)> {
        self.data_rows
    }

    /// Emit the header row
    pub fn header(&mut self) -> Result<()> {
        self.expect_phase(Phase::Header, "emit the header")?;

        let mut builder = RowBuilder::new(self.next_row)?;
        for spec in self.layout.columns() {
            builder.push_value(spec.label.as_str(), self.styles.header(spec.kind));
        }
        self.push(builder.build()?)?;

        debug!("header emitted with {} columns", self.layout.len());
        self.phase = Phase::Data;
        Ok(())
    }

    /// Emit one data row
    ///
    /// The record is validated first; on failure nothing is added.
    pub fn record(&mut self, record: &InvoiceRecord) -> Result<()> {
        self.expect_phase(Phase::Data, "emit a data row")?;

        let position = self.records;
        record.validate(position)?;

        let quantity = self.column_of(ColumnKind::Quantity)?;
        let unit_price = self.column_of(ColumnKind::UnitPrice)?;

        let mut builder = RowBuilder::new(self.next_row)?;
        for spec in self.layout.columns() {
            let style = self.styles.data(spec.kind);
            match spec.kind {
                ColumnKind::Identifier => {
                    builder.push_value(record.invoice_number as f64, style)
                }
                ColumnKind::Timestamp => {
                    builder.push_value(CellValue::date(&record.invoice_date), style)
                }
                ColumnKind::Text(TextField::First) => {
                    builder.push_value(record.first_name.as_str(), style)
                }
                ColumnKind::Text(TextField::Last) => {
                    builder.push_value(record.last_name.as_str(), style)
                }
                ColumnKind::Flag => builder.push_value(record.will_pick_up, style),
                ColumnKind::Quantity => builder.push_value(
                    decimal_value(record.quantity, position, "quantity")?,
                    style,
                ),
                ColumnKind::UnitPrice => builder.push_value(
                    decimal_value(record.unit_price, position, "unit_price")?,
                    style,
                ),
                ColumnKind::Subtotal => builder.push_formula(style, move |cells| {
                    Ok(formula::product(
                        cells.column(quantity)?,
                        cells.column(unit_price)?,
                    ))
                }),
            }
        }
        let row = builder.build()?;
        let index = row.index();
        self.push(row)?;

        self.data_rows = Some(match self.data_rows {
            Some((first, _)) => (first, index),
            None => (index, index),
        });
        self.records += 1;
        trace!("data row {} from record {}", index, position);
        Ok(())
    }

    /// Emit the footer row and close the sheet
    ///
    /// With no data rows the total is `=SUM(0)`.
    pub fn footer(&mut self, label: &str) -> Result<()> {
        self.expect_phase(Phase::Data, "emit the footer")?;

        let subtotal = self.column_of(ColumnKind::Subtotal)?;
        let label_column = subtotal.saturating_sub(1);
        if label_column == 0 {
            return Err(Error::InvalidLayout(
                "no room for the footer label".into(),
            ));
        }

        let span = self.data_rows;
        if span.is_none() {
            warn!("no data rows; footer total is {}", formula::EMPTY_SUM);
        }

        let mut builder = RowBuilder::new(self.next_row)?;
        for _ in 1..label_column {
            builder.push_value(CellValue::Blank, self.styles.default);
        }
        builder.push_value(label, self.styles.footer_label);
        builder.push_formula(self.styles.footer_total, move |cells| {
            let column = cells.column(subtotal)?.column();
            match span {
                Some((first, last)) => Ok(formula::range_sum(
                    &CellAddress::new(first, column)?,
                    &CellAddress::new(last, column)?,
                )),
                None => Ok(formula::EMPTY_SUM.to_string()),
            }
        });
        self.push(builder.build()?)?;

        debug!(
            "footer emitted at row {} after {} records",
            self.next_row - 1,
            self.records
        );
        self.phase = Phase::Footer;
        Ok(())
    }

    /// Hand over the finished sheet
    pub fn finish(self) -> Result<Sheet> {
        self.expect_phase(Phase::Footer, "finish")?;
        Ok(self.sheet)
    }

    fn push(&mut self, row: Row) -> Result<()> {
        self.sheet.push_row(row)?;
        self.next_row += 1;
        Ok(())
    }

    fn column_of(&self, kind: ColumnKind) -> Result<u32> {
        self.layout
            .position(kind)
            .ok_or_else(|| Error::InvalidLayout(format!("layout has no {} column", kind)))
    }

    fn expect_phase(&self, expected: Phase, step: &str) -> Result<()> {
        if self.phase != expected {
            return Err(ledger_sheets_core::Error::invalid_state(format!(
                "cannot {} in {:?} phase",
                step, self.phase
            ))
            .into());
        }
        Ok(())
    }
}

/// Build a complete sheet from a layout and a record list
pub fn assemble(
    layout: &ColumnLayout,
    styles: &InvoiceStyles,
    records: &[InvoiceRecord],
    sheet_name: &str,
    footer_label: &str,
) -> Result<Sheet> {
    let mut assembler = SheetAssembler::new(layout, styles, sheet_name)?;
    assembler.header()?;
    for record in records {
        assembler.record(record)?;
    }
    debug!("{} data rows emitted", records.len());
    assembler.footer(footer_label)?;
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledger_sheets_core::StylePalette;
    use rust_decimal::Decimal;

    fn styles() -> InvoiceStyles {
        let mut palette = StylePalette::new();
        InvoiceStyles::build(&mut palette).unwrap()
    }

    fn record(n: i64) -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: n,
            invoice_date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            first_name: "Laura".into(),
            last_name: "Jameson".into(),
            will_pick_up: n % 2 == 0,
            quantity: Decimal::new(n, 0),
            unit_price: Decimal::new(250, 2),
        }
    }

    #[test]
    fn test_phases_move_forward_only() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let mut assembler = SheetAssembler::new(&layout, &styles, "Sheet1").unwrap();

        assert!(assembler.record(&record(1)).is_err());
        assert!(assembler.footer("Total:").is_err());

        assembler.header().unwrap();
        assert!(assembler.header().is_err());

        assembler.record(&record(1)).unwrap();
        assembler.footer("Total:").unwrap();
        assert!(assembler.record(&record(2)).is_err());
        assert!(assembler.footer("Total:").is_err());

        let sheet = assembler.finish().unwrap();
        assert_eq!(sheet.row_count(), 3);
    }

    #[test]
    fn test_finish_requires_footer() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let mut assembler = SheetAssembler::new(&layout, &styles, "Sheet1").unwrap();
        assembler.header().unwrap();
        assert!(matches!(
            assembler.finish(),
            Err(Error::Core(ledger_sheets_core::Error::InvalidState(_)))
        ));
    }

    #[test]
    fn test_data_rows_tracked() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let mut assembler = SheetAssembler::new(&layout, &styles, "Sheet1").unwrap();
        assembler.header().unwrap();
        assert_eq!(assembler.data_rows(), None);

        assembler.record(&record(1)).unwrap();
        assert_eq!(assembler.data_rows(), Some((2, 2)));
        assembler.record(&record(2)).unwrap();
        assembler.record(&record(3)).unwrap();
        assert_eq!(assembler.data_rows(), Some((2, 4)));
    }

    #[test]
    fn test_invalid_record_adds_nothing() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let mut assembler = SheetAssembler::new(&layout, &styles, "Sheet1").unwrap();
        assembler.header().unwrap();
        assembler.record(&record(1)).unwrap();

        let mut bad = record(2);
        bad.quantity = Decimal::new(-4, 0);
        assert!(matches!(
            assembler.record(&bad),
            Err(Error::Record { position: 1, field: "quantity", .. })
        ));
        assert_eq!(assembler.data_rows(), Some((2, 2)));

        assembler.record(&record(3)).unwrap();
        assert_eq!(assembler.data_rows(), Some((2, 3)));
    }

    #[test]
    fn test_rows_stop_at_sheet_end() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let mut assembler = SheetAssembler::new(&layout, &styles, "Sheet1").unwrap();
        assembler.header().unwrap();

        assembler.next_row = ledger_sheets_core::MAX_ROWS;
        assembler.record(&record(1)).unwrap();
        assert_eq!(
            assembler.data_rows(),
            Some((ledger_sheets_core::MAX_ROWS, ledger_sheets_core::MAX_ROWS))
        );

        assert!(matches!(
            assembler.record(&record(2)),
            Err(Error::Core(ledger_sheets_core::Error::InvalidCoordinate {
                row: 1_048_577,
                ..
            }))
        ));
        assert!(assembler.footer("Total:").is_err());
    }

    #[test]
    fn test_header_styles_by_alignment() {
        let layout = ColumnLayout::invoice();
        let styles = styles();
        let sheet = assemble(&layout, &styles, &[], "Sheet1", "Total:").unwrap();

        let header = &sheet.rows()[0];
        let left: Vec<bool> = header
            .cells()
            .iter()
            .map(|c| c.style == styles.header_left)
            .collect();
        assert_eq!(left, vec![true, true, true, true, true, false, false, false]);
    }
}
