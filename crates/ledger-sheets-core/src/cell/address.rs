//! Cell address and range types
//!
//! Rows and columns are 1-based throughout: row 1 is the first row and
//! column 1 is column "A". Column letters use bijective base-26, so there is
//! no zero digit: 26 is "Z" and 27 is "AA".

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a 1-based column number to its letter form (1 = A, 26 = Z, 27 = AA)
///
/// # Examples
/// ```
/// use ledger_sheets_core::cell::column_letters;
///
/// assert_eq!(column_letters(1).unwrap(), "A");
/// assert_eq!(column_letters(703).unwrap(), "AAA");
/// assert!(column_letters(0).is_err());
/// ```
pub fn column_letters(column: u32) -> Result<String> {
    if column == 0 {
        return Err(Error::InvalidColumn(column));
    }

    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}

/// Convert column letters back to a 1-based column number (A = 1, AA = 27)
///
/// Letters are case-insensitive.
pub fn column_number(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        column = column
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(format!("column '{}' is too wide", letters)))?;
    }

    Ok(column)
}

/// Format a 1-based (row, column) pair as an A1-style reference
pub fn address(row: u32, column: u32) -> Result<String> {
    CellAddress::new(row, column).map(|addr| addr.to_a1_string())
}

/// A cell address (e.g., "H7")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    row: u32,
    column: u32,
}

impl CellAddress {
    /// Create a new cell address inside the sheet bounds
    /// (rows 1..=[`MAX_ROWS`], columns 1..=[`MAX_COLS`])
    pub fn new(row: u32, column: u32) -> Result<Self> {
        if !(1..=MAX_ROWS).contains(&row) || !(1..=MAX_COLS).contains(&column) {
            return Err(Error::InvalidCoordinate { row, column });
        }
        Ok(Self { row, column })
    }

    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column number (1-based)
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use ledger_sheets_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("H7").unwrap();
    /// assert_eq!(addr.row(), 7);
    /// assert_eq!(addr.column(), 8);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());

        if split == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let column = column_number(&s[..split])?;

        let row_str = &s[split..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Self::new(row, column)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();
        // column >= 1 is guaranteed by construction
        if let Ok(letters) = column_letters(self.column) {
            result.push_str(&letters);
        }
        result.push_str(&self.row.to_string());
        result
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "H2:H8")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so `start` is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        let (start_row, end_row) = if start.row <= end.row {
            (start.row, end.row)
        } else {
            (end.row, start.row)
        };

        let (start_col, end_col) = if start.column <= end.column {
            (start.column, end.column)
        } else {
            (end.column, start.column)
        };

        Self {
            start: CellAddress {
                row: start_row,
                column: start_col,
            },
            end: CellAddress {
                row: end_row,
                column: end_col,
            },
        }
    }

    /// Create a range down a single column, from `first_row` to `last_row`
    pub fn column_span(column: u32, first_row: u32, last_row: u32) -> Result<Self> {
        Ok(Self::new(
            CellAddress::new(first_row, column)?,
            CellAddress::new(last_row, column)?,
        ))
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = CellAddress::parse(&s[..colon_pos])?;
            let end = CellAddress::parse(&s[colon_pos + 1..])?;
            Ok(Self::new(start, end))
        } else {
            let addr = CellAddress::parse(s)?;
            Ok(Self::new(addr, addr))
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.column >= self.start.column
            && addr.column <= self.end.column
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Format as `start:end`, always with both ends
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
