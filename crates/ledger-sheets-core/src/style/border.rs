//! Border entries

use super::Rgb;

/// Border table entry: one line style and color applied to a set of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderEntry {
    /// Edges that carry a line
    pub edges: BorderEdges,
    /// Line style for every edge in `edges`
    pub style: BorderLineStyle,
    /// Line color (None = automatic)
    pub color: Option<Rgb>,
}

impl BorderEntry {
    /// Create a border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Same line on all four edges
    pub fn all(style: BorderLineStyle, color: Rgb) -> Self {
        Self {
            edges: BorderEdges::ALL,
            style,
            color: Some(color),
        }
    }

    /// Check if no edge carries a line
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() || self.style == BorderLineStyle::None
    }
}

/// Set of cell edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BorderEdges {
    /// No edges
    pub const NONE: BorderEdges = BorderEdges {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    /// All four edges
    pub const ALL: BorderEdges = BorderEdges {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        !(self.left || self.right || self.top || self.bottom)
    }

    /// Check membership of one edge
    pub fn contains(&self, edge: BorderSide) -> bool {
        match edge {
            BorderSide::Left => self.left,
            BorderSide::Right => self.right,
            BorderSide::Top => self.top,
            BorderSide::Bottom => self.bottom,
        }
    }
}

/// A single edge of a cell, in serialization order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderSide {
    /// All edges in the order the package expects them
    pub const ALL: [BorderSide; 4] = [
        BorderSide::Left,
        BorderSide::Right,
        BorderSide::Top,
        BorderSide::Bottom,
    ];
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
}
