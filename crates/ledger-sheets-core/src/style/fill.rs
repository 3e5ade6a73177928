//! Fill/background entries

use super::Rgb;

/// Fill table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FillEntry {
    /// Pattern kind
    pub pattern: FillPattern,
    /// Foreground color (used by solid fills)
    pub foreground: Option<Rgb>,
}

impl FillEntry {
    /// No fill (transparent)
    pub fn none() -> Self {
        Self::default()
    }

    /// Preset hatch pattern with no explicit colors
    pub fn hatch(pattern: HatchPattern) -> Self {
        Self {
            pattern: FillPattern::Hatch(pattern),
            foreground: None,
        }
    }

    /// Solid fill with the given color
    pub fn solid(color: Rgb) -> Self {
        Self {
            pattern: FillPattern::Solid,
            foreground: Some(color),
        }
    }
}

/// Fill pattern kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillPattern {
    /// No pattern
    #[default]
    None,
    /// One of the preset hatch patterns
    Hatch(HatchPattern),
    /// Solid (100% foreground)
    Solid,
}

/// Preset hatch patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatchPattern {
    /// 12.5% gray, the reserved second fill of every stylesheet
    Gray125,
}
