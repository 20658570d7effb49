//! Error types for buffer addressing

use thiserror::Error;

/// Out-of-bounds access error
///
/// Direct positional reads fail hard when given an invalid index. Cursor
/// motion (`move_cursor`, `set_cursor_pos`) clamps instead and never produces
/// these.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Column index outside a line's fixed width
    #[error("column {col} out of range for line width {width}")]
    ColumnOutOfRange { col: usize, width: usize },

    /// Row index outside the screen
    #[error("row {row} out of range for screen height {height}")]
    RowOutOfRange { row: usize, height: usize },

    /// Scrollback index beyond the lines currently retained
    #[error("scrollback index {index} out of range ({len} lines retained)")]
    ScrollbackOutOfRange { index: usize, len: usize },
}

/// Result type for buffer operations
pub type Result<T> = std::result::Result<T, Error>;
