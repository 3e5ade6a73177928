//! Column width metadata

/// Width of one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidth {
    /// Column number (1-based)
    pub column: u32,
    /// Width in character units
    pub width: f64,
    /// Width was set explicitly rather than computed by the application
    pub custom_width: bool,
}

impl ColumnWidth {
    /// Create an explicitly sized column
    pub fn custom(column: u32, width: f64) -> Self {
        Self {
            column,
            width,
            custom_width: true,
        }
    }

    /// Create a column whose width is only a hint
    pub fn hint(column: u32, width: f64) -> Self {
        Self {
            column,
            width,
            custom_width: false,
        }
    }
}
