//! Invoice records

use chrono::NaiveDateTime;
use ledger_sheets_core::cell::date_serial;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Longest text a single cell may hold
pub const MAX_TEXT_LEN: usize = 32_767;

/// Largest invoice number a cell stores exactly (2^53)
pub const MAX_INVOICE_NUMBER: i64 = 1 << 53;

// 1900-03-01; earlier serials are skewed by the phantom 1900-02-29
const FIRST_UNAMBIGUOUS_SERIAL: f64 = 61.0;

/// One line of the invoice listing
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    /// Invoice number
    pub invoice_number: i64,
    /// Invoice timestamp
    pub invoice_date: NaiveDateTime,
    /// Customer first name
    pub first_name: String,
    /// Customer last name
    pub last_name: String,
    /// Customer collects the order in person
    pub will_pick_up: bool,
    /// Units ordered
    pub quantity: Decimal,
    /// Price per unit
    pub unit_price: Decimal,
}

impl InvoiceRecord {
    /// Check the record can be written, reporting `position` on failure
    pub fn validate(&self, position: usize) -> Result<()> {
        if self.invoice_number < 0 {
            return Err(Error::record(position, "invoice_number", "must not be negative"));
        }
        if self.invoice_number > MAX_INVOICE_NUMBER {
            return Err(Error::record(
                position,
                "invoice_number",
                format!("{} is above {}", self.invoice_number, MAX_INVOICE_NUMBER),
            ));
        }
        if date_serial(&self.invoice_date) < FIRST_UNAMBIGUOUS_SERIAL {
            return Err(Error::record(
                position,
                "invoice_date",
                format!("{} is before 1900-03-01", self.invoice_date),
            ));
        }
        for (field, text) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ] {
            if text.chars().count() > MAX_TEXT_LEN {
                return Err(Error::record(
                    position,
                    field,
                    format!("is longer than {} characters", MAX_TEXT_LEN),
                ));
            }
        }
        if self.quantity < Decimal::ZERO {
            return Err(Error::record(position, "quantity", "must not be negative"));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(Error::record(position, "unit_price", "must not be negative"));
        }
        Ok(())
    }

    /// Quantity times unit price
    pub fn subtotal(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// Convert a decimal field to a cell number
pub(crate) fn decimal_value(value: Decimal, position: usize, field: &'static str) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::record(position, field, format!("{} cannot be stored as a number", value)))
}
