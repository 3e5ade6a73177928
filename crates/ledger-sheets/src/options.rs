//! Build and source options

use ledger_sheets_core::style::CUSTOM_NUMBER_FORMAT_FLOOR;

/// Options for building an invoice document
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Worksheet name
    pub sheet_name: String,
    /// First ID handed to custom number formats (at least 164)
    pub number_format_floor: u32,
    /// Text placed next to the grand total
    pub footer_label: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            sheet_name: "CompleteWorksheet".to_string(),
            number_format_floor: CUSTOM_NUMBER_FORMAT_FLOOR,
            footer_label: "Total:".to_string(),
        }
    }
}

impl BuildOptions {
    /// Set the worksheet name
    pub fn with_sheet_name<S: Into<String>>(mut self, name: S) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set the custom number format floor
    pub fn with_number_format_floor(mut self, floor: u32) -> Self {
        self.number_format_floor = floor;
        self
    }

    /// Set the footer label
    pub fn with_footer_label<S: Into<String>>(mut self, label: S) -> Self {
        self.footer_label = label.into();
        self
    }
}

/// Options for reading records from CSV
#[derive(Debug, Clone)]
pub struct CsvSourceOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
}

impl Default for CsvSourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}
