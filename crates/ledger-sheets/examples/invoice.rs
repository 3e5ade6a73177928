//! Example: Build an invoice workbook from a few records

use chrono::NaiveDate;
use ledger_sheets::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let records: Vec<InvoiceRecord> = [(2, 300), (5, 400), (10, 100)]
        .into_iter()
        .zip(1i64..)
        .map(|((qty, cents), n)| InvoiceRecord {
            invoice_number: 1000 + n,
            invoice_date: day.and_hms_opt(9, 0, 0).unwrap(),
            first_name: "Mary".into(),
            last_name: "Johnson".into(),
            will_pick_up: n % 2 == 0,
            quantity: Decimal::new(qty, 0),
            unit_price: Decimal::new(cents, 2),
        })
        .collect();

    let document = Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default())?;

    // Show the formulas the spreadsheet will evaluate
    for row in document.sheet().rows() {
        if let Some(text) = row.cells().last().and_then(|c| c.value.formula_text()) {
            println!("row {}: {}", row.index(), text);
        }
    }

    // Save the file
    document.save("/tmp/invoices.xlsx")?;
    println!("Created /tmp/invoices.xlsx");

    Ok(())
}
