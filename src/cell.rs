//! Terminal cell representation
//!
//! Each cell in the grid contains:
//! - A character (or the blank sentinel if never written)
//! - Display attributes (colors, bold, italic, underline)

use serde::{Deserialize, Serialize};

/// Attributes that affect how a cell is rendered
///
/// A plain value type: two cells styled identically compare equal, and
/// attributes are copied into cells rather than shared, so no in-place
/// mutation ever reaches a cell retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellAttributes {
    /// Foreground color code
    pub fg: u32,
    /// Background color code
    pub bg: u32,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl CellAttributes {
    /// Create new default attributes (all colors and flags unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all attributes to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character stored in this cell
    ch: char,
    /// Display attributes
    pub attrs: CellAttributes,
}

impl Cell {
    /// Sentinel for a cell that has never been written. Distinct from a
    /// space: a cleared cell holds `' '`, an untouched cell holds `BLANK`.
    pub const BLANK: char = '\0';

    /// Create a new blank cell
    pub fn new() -> Self {
        Self {
            ch: Self::BLANK,
            attrs: CellAttributes::default(),
        }
    }

    /// Create a cell with a character
    pub fn with_char(c: char) -> Self {
        Self {
            ch: c,
            attrs: CellAttributes::default(),
        }
    }

    /// Create a cell with a character and attributes
    pub fn with_char_and_attrs(c: char, attrs: CellAttributes) -> Self {
        Self { ch: c, attrs }
    }

    /// Get the stored character
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Set the stored character
    pub fn set_char(&mut self, c: char) {
        self.ch = c;
    }

    /// Set the display attributes
    pub fn set_attrs(&mut self, attrs: CellAttributes) {
        self.attrs = attrs;
    }

    /// Check if the cell still holds the blank sentinel
    pub fn is_blank(&self) -> bool {
        self.ch == Self::BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
