//! Number format types
//!
//! Number formats are addressed by *format ID*, not by their position in the
//! palette's number format table. IDs below [`CUSTOM_NUMBER_FORMAT_FLOOR`] are
//! reserved for formats the spreadsheet application defines itself.

use std::fmt;

/// First ID available for custom number formats in OOXML packages
pub const CUSTOM_NUMBER_FORMAT_FLOOR: u32 = 164;

/// A number format ID as stored in a cell format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumberFormatId(pub u32);

impl NumberFormatId {
    /// 0 - General
    pub const GENERAL: NumberFormatId = NumberFormatId(0);
    /// 1 - 0
    pub const NUMBER_INT: NumberFormatId = NumberFormatId(1);
    /// 2 - 0.00
    pub const NUMBER_DEC2: NumberFormatId = NumberFormatId(2);
    /// 14 - mm-dd-yy
    pub const DATE_SHORT: NumberFormatId = NumberFormatId(14);
    /// 22 - m/d/yy h:mm
    pub const DATETIME: NumberFormatId = NumberFormatId(22);
    /// 49 - @
    pub const TEXT: NumberFormatId = NumberFormatId(49);

    /// Raw ID value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Check if this ID falls in the range reserved for built-in formats
    pub fn is_reserved(self) -> bool {
        self.0 < CUSTOM_NUMBER_FORMAT_FLOOR
    }

    /// Format code of a built-in ID, if the ID is one the package defines
    pub fn builtin_pattern(self) -> Option<&'static str> {
        let code = match self.0 {
            0 => "General",
            1 => "0",
            2 => "0.00",
            3 => "#,##0",
            4 => "#,##0.00",
            9 => "0%",
            10 => "0.00%",
            11 => "0.00E+00",
            12 => "# ?/?",
            13 => "# ??/??",
            14 => "mm-dd-yy",
            15 => "d-mmm-yy",
            16 => "d-mmm",
            17 => "mmm-yy",
            18 => "h:mm AM/PM",
            19 => "h:mm:ss AM/PM",
            20 => "h:mm",
            21 => "h:mm:ss",
            22 => "m/d/yy h:mm",
            37 => "#,##0 ;(#,##0)",
            38 => "#,##0 ;[Red](#,##0)",
            39 => "#,##0.00;(#,##0.00)",
            40 => "#,##0.00;[Red](#,##0.00)",
            45 => "mm:ss",
            46 => "[h]:mm:ss",
            47 => "mmss.0",
            48 => "##0.0E+0",
            49 => "@",
            _ => return None,
        };
        Some(code)
    }
}

impl fmt::Display for NumberFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Custom number format table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberFormatEntry {
    /// Format ID (>= the palette's custom floor)
    pub id: NumberFormatId,
    /// Format code, e.g. "$#.00"
    pub pattern: String,
}
