//! Formula text builders
//!
//! Formulas are ASCII, start with `=`, and contain no whitespace, so they
//! read the same in every locale.

use crate::cell::{CellAddress, CellRange};

/// Formula for a sum over no cells; evaluates to zero
pub const EMPTY_SUM: &str = "=SUM(0)";

/// Product of two cells: `=F2*G2`
pub fn product(left: &CellAddress, right: &CellAddress) -> String {
    format!("={}*{}", left, right)
}

/// Sum over a range: `=SUM(H2:H8)`
pub fn range_sum(start: &CellAddress, end: &CellAddress) -> String {
    format!("=SUM({})", CellRange::new(*start, *end))
}
