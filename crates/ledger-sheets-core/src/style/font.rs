//! Font entries

use super::Rgb;

/// Font table entry
///
/// Face and size are left to the package's defaults; an entry only says
/// whether the text is bold and which color it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontEntry {
    /// Bold
    pub bold: bool,
    /// Font color (None = automatic)
    pub color: Option<Rgb>,
}

impl FontEntry {
    /// Create a new default font
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}
