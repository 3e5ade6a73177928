//! CSV record source
//!
//! Reads a headed CSV with the columns
//! `invoice_number,invoice_date,first_name,last_name,will_pick_up,quantity,unit_price`.
//! Fields are read as text and parsed here so that a bad value is reported
//! with its record position and field name.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::CsvSourceOptions;
use crate::record::InvoiceRecord;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Deserialize)]
struct RawRecord {
    invoice_number: String,
    invoice_date: String,
    first_name: String,
    last_name: String,
    will_pick_up: String,
    quantity: String,
    unit_price: String,
}

/// Read records from a CSV file
pub fn read_records_file<P: AsRef<Path>>(path: P) -> Result<Vec<InvoiceRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

/// Read records from CSV with default options
pub fn read_records<R: Read>(reader: R) -> Result<Vec<InvoiceRecord>> {
    read_records_with(reader, &CsvSourceOptions::default())
}

/// Read records from CSV
pub fn read_records_with<R: Read>(
    reader: R,
    options: &CsvSourceOptions,
) -> Result<Vec<InvoiceRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (position, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        records.push(parse_record(raw, position)?);
    }
    Ok(records)
}

fn parse_record(raw: RawRecord, position: usize) -> Result<InvoiceRecord> {
    let invoice_number = raw
        .invoice_number
        .parse::<i64>()
        .map_err(|e| Error::record(position, "invoice_number", e.to_string()))?;

    Ok(InvoiceRecord {
        invoice_number,
        invoice_date: parse_datetime(&raw.invoice_date, position)?,
        first_name: raw.first_name,
        last_name: raw.last_name,
        will_pick_up: parse_flag(&raw.will_pick_up, position)?,
        quantity: parse_decimal(&raw.quantity, position, "quantity")?,
        unit_price: parse_decimal(&raw.unit_price, position, "unit_price")?,
    })
}

fn parse_datetime(field: &str, position: usize) -> Result<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(field, format) {
            return Ok(value);
        }
    }
    // A bare date means midnight
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            Error::record(
                position,
                "invoice_date",
                format!("'{}' is not a date or timestamp", field),
            )
        })
}

fn parse_flag(field: &str, position: usize) -> Result<bool> {
    match field.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(Error::record(
            position,
            "will_pick_up",
            format!("'{}' is not a boolean", field),
        )),
    }
}

fn parse_decimal(field: &str, position: usize, name: &'static str) -> Result<Decimal> {
    Decimal::from_str(field)
        .map_err(|e| Error::record(position, name, format!("'{}': {}", field, e)))
}
