//! Build documents and inspect the written package

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use ledger_sheets::prelude::*;
use ledger_sheets::read_records;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn records() -> Vec<InvoiceRecord> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    [(2, 300), (5, 400), (10, 100)]
        .iter()
        .enumerate()
        .map(|(i, &(quantity, cents))| InvoiceRecord {
            invoice_number: 1001 + i as i64,
            invoice_date: date.and_hms_opt(12, 0, 0).unwrap(),
            first_name: "Tom".into(),
            last_name: "Atkinson & Sons".into(),
            will_pick_up: i == 1,
            quantity: Decimal::new(quantity, 0),
            unit_price: Decimal::new(cents, 2),
        })
        .collect()
}

fn document() -> Document {
    Document::build(&ColumnLayout::invoice(), &records(), &BuildOptions::default()).unwrap()
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_package_sheet_part() {
    let bytes = document().to_bytes().unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<dimension ref=\"A1:H5\"/>"));
    assert!(sheet.contains("<col min=\"2\" max=\"2\" width=\"25\" customWidth=\"1\"/>"));
    assert!(sheet.contains("<c r=\"A1\" s=\"1\" t=\"inlineStr\"><is><t>INVOICE#</t></is></c>"));
    assert!(sheet.contains("<c r=\"H1\" s=\"2\" t=\"inlineStr\"><is><t>SUBTOTAL</t></is></c>"));
    assert!(sheet.contains("<c r=\"D2\" s=\"3\" t=\"inlineStr\"><is><t>Atkinson &amp; Sons</t></is></c>"));
    assert!(sheet.contains("<c r=\"E3\" s=\"6\" t=\"b\"><v>1</v></c>"));
    assert!(sheet.contains("<c r=\"H2\" s=\"8\"><f>F2*G2</f></c>"));
    assert!(sheet.contains("<c r=\"H4\" s=\"8\"><f>F4*G4</f></c>"));
    assert!(sheet.contains("<c r=\"A5\"/>"));
    assert!(sheet.contains("<c r=\"G5\" s=\"9\" t=\"inlineStr\"><is><t>Total:</t></is></c>"));
    assert!(sheet.contains("<c r=\"H5\" s=\"10\"><f>SUM(H2:H4)</f></c>"));
}

#[test]
fn test_package_workbook_and_styles() {
    let bytes = document().to_bytes().unwrap();

    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains("<sheet name=\"CompleteWorksheet\" sheetId=\"1\" r:id=\"rId1\"/>"));

    let styles = read_part(&bytes, "xl/styles.xml");
    assert!(styles.contains("<numFmts count=\"4\">"));
    assert!(styles.contains("<numFmt numFmtId=\"164\" formatCode=\"mm/dd/yyyy hh:mm:ss\"/>"));
    assert!(styles.contains("<numFmt numFmtId=\"167\" formatCode=\"$#.00\"/>"));
    assert!(styles.contains("<fonts count=\"3\">"));
    assert!(styles.contains("<fills count=\"4\">"));
    assert!(styles.contains("<borders count=\"2\">"));
    assert!(styles.contains("<cellXfs count=\"11\">"));
}

#[test]
fn test_empty_document_package() {
    let document =
        Document::build(&ColumnLayout::invoice(), &[], &BuildOptions::default()).unwrap();
    let bytes = document.to_bytes().unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<dimension ref=\"A1:H2\"/>"));
    assert!(sheet.contains("<c r=\"H2\" s=\"10\"><f>SUM(0)</f></c>"));
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoices.xlsx");

    let document = document();
    document.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        read_part(&bytes, "xl/worksheets/sheet1.xml"),
        read_part(&document.to_bytes().unwrap(), "xl/worksheets/sheet1.xml")
    );
}

#[test]
fn test_csv_to_package() {
    let csv = "invoice_number,invoice_date,first_name,last_name,will_pick_up,quantity,unit_price\n\
               1001,2024-01-01 12:00:00,Ana,Price,yes,2,3.00\n\
               1002,2024-01-01 14:03:35,Bo,Hill,no,5,4.00\n";
    let records = read_records(csv.as_bytes()).unwrap();
    let document =
        Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default()).unwrap();

    let mut buffer = Cursor::new(Vec::new());
    document.write(&mut buffer).unwrap();
    let sheet = read_part(buffer.get_ref(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<c r=\"H4\" s=\"10\"><f>SUM(H2:H3)</f></c>"));
    // 2024-01-01 12:00 is serial 45292.5
    assert!(sheet.contains("<c r=\"B2\" s=\"4\"><v>45292.5</v></c>"));
}

#[test]
fn test_control_characters_survive_as_escapes() {
    let mut records = records();
    records[0].first_name = "Tab\tBell\u{7}".into();
    records[1].last_name = "_x0041_".into();
    let document =
        Document::build(&ColumnLayout::invoice(), &records, &BuildOptions::default()).unwrap();
    let sheet = read_part(&document.to_bytes().unwrap(), "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<t>Tab\tBell_x0007_</t>"));
    assert!(sheet.contains("<t>_x005F_x0041_</t>"));
    assert!(!sheet.contains('\u{7}'));
}
