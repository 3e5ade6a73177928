//! End-to-end assembly tests (records -> sheet -> verify formulas and addresses)

use chrono::{Duration, NaiveDate, NaiveDateTime};
use ledger_sheets::prelude::*;
use ledger_sheets::{CellValue, Row, Sheet};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap()
}

fn record(n: i64, quantity: i64, cents: i64) -> InvoiceRecord {
    InvoiceRecord {
        invoice_number: n,
        invoice_date: start() + Duration::hours(n),
        first_name: "Leah".into(),
        last_name: "Farmer".into(),
        will_pick_up: n % 2 == 1,
        quantity: Decimal::new(quantity, 0),
        unit_price: Decimal::new(cents, 2),
    }
}

fn build(records: &[InvoiceRecord]) -> Sheet {
    Document::build(&ColumnLayout::invoice(), records, &BuildOptions::default())
        .unwrap()
        .sheet()
        .clone()
}

fn last_formula(row: &Row) -> &str {
    row.cells().last().unwrap().value.formula_text().unwrap()
}

/// Three records with quantities {2,5,10} and prices {3,4,1}
#[test]
fn test_three_records() {
    let records = vec![record(1, 2, 300), record(2, 5, 400), record(3, 10, 100)];
    let sheet = build(&records);

    assert_eq!(sheet.name(), "CompleteWorksheet");
    assert_eq!(sheet.row_count(), 5);

    let formulas: Vec<&str> = sheet.rows()[1..4].iter().map(last_formula).collect();
    assert_eq!(formulas, vec!["=F2*G2", "=F3*G3", "=F4*G4"]);
    assert_eq!(last_formula(&sheet.rows()[4]), "=SUM(H2:H4)");
}

/// Zero records: header, then a footer whose total is an empty sum
#[test]
fn test_zero_records() {
    let sheet = build(&[]);

    assert_eq!(sheet.row_count(), 2);
    let footer = &sheet.rows()[1];
    assert_eq!(footer.index(), 2);
    assert_eq!(last_formula(footer), "=SUM(0)");
    assert_eq!(footer.cell(7).unwrap().value.as_text(), Some("Total:"));
}

#[test]
fn test_one_record() {
    let sheet = build(&[record(1, 4, 250)]);

    assert_eq!(sheet.row_count(), 3);
    assert_eq!(last_formula(&sheet.rows()[1]), "=F2*G2");
    assert_eq!(last_formula(&sheet.rows()[2]), "=SUM(H2:H2)");
}

#[test]
fn test_hundred_records() {
    let records: Vec<InvoiceRecord> = (1..=100).map(|n| record(n, n % 7 + 1, 1100)).collect();
    let sheet = build(&records);

    assert_eq!(sheet.row_count(), 102);
    assert_eq!(last_formula(&sheet.rows()[100]), "=F101*G101");
    assert_eq!(last_formula(&sheet.rows()[101]), "=SUM(H2:H101)");
}

#[test]
fn test_addresses_unique_and_increasing() {
    let records: Vec<InvoiceRecord> = (1..=12).map(|n| record(n, 1, 100)).collect();
    let sheet = build(&records);

    let mut previous_row = 0;
    for row in sheet.rows() {
        assert!(row.index() > previous_row);
        previous_row = row.index();

        let mut previous_column = 0;
        for cell in row.cells() {
            assert_eq!(cell.address.row(), row.index());
            assert!(cell.address.column() > previous_column);
            previous_column = cell.address.column();
        }
        assert_eq!(previous_column, 8);
    }
}

#[test]
fn test_data_row_values() {
    let sheet = build(&[record(7, 3, 250)]);
    let row = &sheet.rows()[1];

    assert_eq!(row.cell(1).unwrap().value, CellValue::Number(7.0));
    assert_eq!(
        row.cell(2).unwrap().value,
        CellValue::date(&(start() + Duration::hours(7)))
    );
    assert_eq!(row.cell(3).unwrap().value.as_text(), Some("Leah"));
    assert_eq!(row.cell(4).unwrap().value.as_text(), Some("Farmer"));
    assert_eq!(row.cell(5).unwrap().value, CellValue::Boolean(true));
    assert_eq!(row.cell(6).unwrap().value, CellValue::Number(3.0));
    assert_eq!(row.cell(7).unwrap().value, CellValue::Number(2.5));
    assert!(row.cell(8).unwrap().value.is_formula());
}

#[test]
fn test_header_and_footer_cells() {
    let sheet = build(&[record(1, 1, 100)]);

    let labels: Vec<&str> = sheet.rows()[0]
        .cells()
        .iter()
        .filter_map(|c| c.value.as_text())
        .collect();
    assert_eq!(
        labels,
        vec!["INVOICE#", "DATE", "FIRST", "LAST", "WILL PICKUP", "QTY", "UNITPRICE", "SUBTOTAL"]
    );

    let footer = &sheet.rows()[2];
    assert!(footer.cells()[..6].iter().all(|c| c.value.is_blank()));
    assert_eq!(footer.cells()[6].address.to_string(), "G3");
    assert_eq!(footer.cells()[7].address.to_string(), "H3");
}

#[test]
fn test_invalid_record_aborts_build() {
    let mut bad = record(2, 1, 100);
    bad.unit_price = Decimal::new(-1, 2);
    let records = vec![record(1, 1, 100), bad, record(3, 1, 100)];

    let result = Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default());
    match result {
        Err(Error::Record { position, field, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(field, "unit_price");
        }
        other => panic!("expected a record error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_custom_layout_moves_formulas() {
    let layout = ColumnLayout::new(vec![
        ColumnSpec::new("PRICE", ColumnKind::UnitPrice, 12.0),
        ColumnSpec::new("WHO", ColumnKind::Text(TextField::Last), 20.0),
        ColumnSpec::new("QTY", ColumnKind::Quantity, 8.0),
        ColumnSpec::new("TOTAL", ColumnKind::Subtotal, 12.0),
    ])
    .unwrap();
    let options = BuildOptions::default()
        .with_sheet_name("Orders")
        .with_footer_label("Grand total");
    let records = vec![record(1, 2, 100), record(2, 3, 100)];

    let document = Document::build(&layout, &records, &options).unwrap();
    let sheet = document.sheet();

    assert_eq!(sheet.name(), "Orders");
    assert_eq!(last_formula(&sheet.rows()[1]), "=C2*A2");
    assert_eq!(last_formula(&sheet.rows()[3]), "=SUM(D2:D3)");
    assert_eq!(
        sheet.rows()[3].cell(3).unwrap().value.as_text(),
        Some("Grand total")
    );
}

#[test]
fn test_options_are_validated() {
    let low_floor = BuildOptions::default().with_number_format_floor(100);
    assert!(matches!(
        Document::build(&ColumnLayout::invoice(), &[], &low_floor),
        Err(Error::Core(_))
    ));

    let bad_name = BuildOptions::default().with_sheet_name("a/b");
    assert!(Document::build(&ColumnLayout::invoice(), &[], &bad_name).is_err());
}

#[test]
fn test_concurrent_builds_are_independent() {
    let handles: Vec<_> = (1..=4)
        .map(|count| {
            std::thread::spawn(move || {
                let records: Vec<InvoiceRecord> = (1..=count).map(|n| record(n, 1, 100)).collect();
                let document =
                    Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default())
                        .unwrap();
                (
                    document.styles().counts(),
                    last_formula(document.sheet().rows().last().unwrap()).to_string(),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, (counts, total)) in results.iter().enumerate() {
        assert_eq!(counts.cell_formats, 11);
        assert_eq!(counts.number_formats, 4);
        assert_eq!(total, &format!("=SUM(H2:H{})", i + 2));
    }
}

#[test]
fn test_widest_layout_fits_the_sheet() {
    let widest = |columns: usize| {
        let mut specs: Vec<ColumnSpec> = (0..columns - 3)
            .map(|_| ColumnSpec::new("NAME", ColumnKind::Text(TextField::First), 10.0))
            .collect();
        specs.push(ColumnSpec::new("QTY", ColumnKind::Quantity, 8.0));
        specs.push(ColumnSpec::new("PRICE", ColumnKind::UnitPrice, 8.0));
        specs.push(ColumnSpec::new("TOTAL", ColumnKind::Subtotal, 8.0));
        specs
    };

    let layout = ColumnLayout::new(widest(16_384)).unwrap();
    let document = Document::build(&layout, &[record(1, 1, 100)], &BuildOptions::default()).unwrap();
    let data = &document.sheet().rows()[1];
    assert_eq!(data.cells().last().unwrap().address.to_string(), "XFD2");
    assert_eq!(last_formula(data), "=XFB2*XFC2");

    assert!(matches!(
        ColumnLayout::new(widest(16_385)),
        Err(Error::InvalidLayout(_))
    ));
}

#[test]
fn test_invoice_number_above_exact_range_rejected() {
    let numbered = |n: i64| InvoiceRecord {
        invoice_number: n,
        ..record(1, 1, 100)
    };

    let sheet = build(&[numbered(1 << 53)]);
    assert_eq!(
        sheet.rows()[1].cell(1).unwrap().value,
        CellValue::Number(9_007_199_254_740_992.0)
    );

    let records = vec![record(1, 1, 100), numbered((1 << 53) + 1)];
    match Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default()) {
        Err(Error::Record { position, field, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(field, "invoice_number");
        }
        other => panic!("expected a record error, got {:?}", other.map(|_| ())),
    }
}
