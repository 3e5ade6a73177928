//! Random sample records for trying out layouts without real data

use chrono::{Duration, NaiveDateTime};
use ledger_sheets::InvoiceRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const FIRST_NAMES: [&str; 14] = [
    "Jimmy", "Dale", "Jeff", "Richard", "Ryan", "Joey", "Brad", "Donald", "Barak", "George",
    "Bill", "Ronald", "Gerald", "Tricky",
];

const LAST_NAMES: [&str; 14] = [
    "Johnson",
    "Earnhardt",
    "Gordon",
    "Petty",
    "Preece",
    "Logano",
    "Keselowski",
    "Trump",
    "Obama",
    "Bush",
    "Clinton",
    "Reagan",
    "Ford",
    "Nixon",
];

/// Generates invoice records with consecutive numbers and advancing dates
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Generator with a fixed seed, for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Produce `count` records, the first dated `start`
    ///
    /// Every fifth record is followed by a gap of a little over a day; the
    /// others by about two hours.
    pub fn records(&mut self, count: usize, start: NaiveDateTime) -> Vec<InvoiceRecord> {
        let first_number: i64 = self.rng.gen_range(1..5000);
        let mut date = start;

        (0..count)
            .map(|i| {
                let record = InvoiceRecord {
                    invoice_number: first_number + i as i64,
                    invoice_date: date,
                    first_name: FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())].to_string(),
                    last_name: LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())].to_string(),
                    will_pick_up: self.rng.gen_bool(0.5),
                    quantity: Decimal::from(self.rng.gen_range(1..100i64)),
                    unit_price: Decimal::from(self.rng.gen_range(11..39i64)),
                };
                date += if i % 5 == 0 {
                    Duration::days(1) + Duration::hours(1) + Duration::minutes(2) + Duration::seconds(30)
                } else {
                    Duration::hours(2) + Duration::minutes(3) + Duration::seconds(35)
                };
                record
            })
            .collect()
    }
}
