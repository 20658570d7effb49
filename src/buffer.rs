//! Terminal buffer - the main interface for terminal state
//!
//! The Buffer ties together the visible screen, the cursor, the current
//! write attributes, and the scrollback to provide the complete logical
//! state a renderer or escape-sequence interpreter drives.
//!
//! The screen is a fixed-size sliding window: it always holds exactly
//! `height` lines of `width` cells. When output runs past the bottom row,
//! the top line is evicted into scrollback and a fresh blank line is
//! appended at the bottom.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, CellAttributes};
use crate::error::{Error, Result};
use crate::line::Line;
use crate::scrollback::Scrollback;

/// Direction for relative cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The complete terminal buffer state
#[derive(Debug, Clone)]
pub struct Buffer {
    /// Number of columns
    width: usize,
    /// Number of rows
    height: usize,
    /// Cursor row, always in `[0, height)`
    cursor_row: usize,
    /// Cursor column, always in `[0, width)`
    cursor_col: usize,
    /// Attributes applied to newly written or inserted cells
    attrs: CellAttributes,
    /// Visible screen lines, row 0 is the top. Always exactly `height` lines.
    screen: Vec<Line>,
    /// History of lines evicted off the top of the screen
    scrollback: Scrollback,
}

impl Buffer {
    /// Create a new buffer with the given dimensions and scrollback capacity.
    /// The cursor starts at (0, 0), every cell is blank, and the scrollback
    /// is empty.
    pub fn new(width: usize, height: usize, scrollback_capacity: usize) -> Self {
        let screen = (0..height).map(|_| Line::new(width)).collect();
        Self {
            width,
            height,
            cursor_row: 0,
            cursor_col: 0,
            attrs: CellAttributes::default(),
            screen,
            scrollback: Scrollback::new(scrollback_capacity),
        }
    }

    /// Get the number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the maximum number of scrollback lines
    pub fn scrollback_capacity(&self) -> usize {
        self.scrollback.capacity()
    }

    /// Get the scrollback buffer
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Get the cursor row (0-indexed from the top)
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    /// Get the cursor column (0-indexed from the left)
    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    /// Get the current write attributes
    pub fn attributes(&self) -> CellAttributes {
        self.attrs
    }

    /// Replace the current write attributes wholesale. Affects only cells
    /// written or inserted afterwards, never retroactively.
    pub fn set_attributes(&mut self, attrs: CellAttributes) {
        self.attrs = attrs;
    }

    /// Write text at the cursor, overwriting cells in place.
    ///
    /// Characters are processed left to right. `'\n'` advances to the next
    /// line without occupying a cell; any other character lands at the
    /// cursor with the current attributes and advances the cursor, wrapping
    /// to the next line at the right edge.
    pub fn write(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.newline();
                continue;
            }
            let row = self.cursor_row;
            let col = self.cursor_col;
            let attrs = self.attrs;
            // Cursor stays in bounds by invariant
            if let Some(cell) = self.screen[row].get_mut(col) {
                cell.set_char(c);
                cell.set_attrs(attrs);
            }
            self.cursor_col += 1;
            if self.cursor_col >= self.width {
                self.newline();
            }
        }
    }

    /// Insert text at the cursor, shifting existing cells right.
    ///
    /// Like [`write`](Self::write), but each character is shift-inserted
    /// into the cursor line: cells from the cursor column onward move one
    /// step right and the rightmost cell of the row is discarded. Newline
    /// and wrap semantics are identical to `write`.
    pub fn insert(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.newline();
                continue;
            }
            let cell = Cell::with_char_and_attrs(c, self.attrs);
            // Cursor bounds are a struct invariant, so insert_at cannot fail.
            let _ = self.screen[self.cursor_row].insert_at(self.cursor_col, cell);
            self.cursor_col += 1;
            if self.cursor_col >= self.width {
                self.newline();
            }
        }
    }

    /// Advance to the start of the next line, scrolling at the bottom.
    ///
    /// Past the last row, the top screen line is evicted into scrollback
    /// (dropping the oldest scrollback line beyond capacity), a fresh blank
    /// line is appended at the bottom, and the cursor stays on the last row.
    pub fn newline(&mut self) {
        self.cursor_row += 1;
        self.cursor_col = 0;
        if self.cursor_row >= self.height {
            let evicted = self.screen.remove(0);
            self.scrollback.push(evicted);
            self.screen.push(Line::new(self.width));
            self.cursor_row = self.height - 1;
        }
    }

    /// Append a new blank line at the bottom of the screen, evicting the top
    /// line into scrollback. Independent of the cursor, which does not move.
    pub fn insert_empty_line_at_bottom(&mut self) {
        let evicted = self.screen.remove(0);
        self.scrollback.push(evicted);
        self.screen.push(Line::new(self.width));
    }

    /// Move the cursor by `n` cells in a direction, clamped to the screen.
    /// Never wraps and never triggers scrolling.
    pub fn move_cursor(&mut self, dir: CursorDirection, n: usize) {
        match dir {
            CursorDirection::Left => self.cursor_col = self.cursor_col.saturating_sub(n),
            CursorDirection::Right => {
                self.cursor_col = (self.cursor_col + n).min(self.width.saturating_sub(1))
            }
            CursorDirection::Up => self.cursor_row = self.cursor_row.saturating_sub(n),
            CursorDirection::Down => {
                self.cursor_row = (self.cursor_row + n).min(self.height.saturating_sub(1))
            }
        }
    }

    /// Move the cursor to an absolute position, silently clamping each
    /// coordinate into bounds.
    pub fn set_cursor_pos(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.height.saturating_sub(1));
        self.cursor_col = col.min(self.width.saturating_sub(1));
    }

    /// Get a screen line, `None` if the row is out of bounds
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.screen.get(row)
    }

    /// Get the cell at a screen position, failing on out-of-range indices
    pub fn screen_cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.screen
            .get(row)
            .ok_or(Error::RowOutOfRange {
                row,
                height: self.height,
            })?
            .cell(col)
    }

    /// Get the cell at a scrollback position, failing on out-of-range
    /// indices. Row 0 is the oldest retained line; an index at or beyond the
    /// current scrollback size is an error, not a clamp.
    pub fn scrollback_cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.scrollback
            .get(row)
            .ok_or(Error::ScrollbackOutOfRange {
                index: row,
                len: self.scrollback.len(),
            })?
            .cell(col)
    }

    /// Get a screen row as a string
    pub fn line_text(&self, row: usize) -> Result<String> {
        self.screen
            .get(row)
            .map(Line::text)
            .ok_or(Error::RowOutOfRange {
                row,
                height: self.height,
            })
    }

    /// Get a scrollback row as a string (0 = oldest)
    pub fn scrollback_line_text(&self, row: usize) -> Result<String> {
        self.scrollback
            .get(row)
            .map(Line::text)
            .ok_or(Error::ScrollbackOutOfRange {
                index: row,
                len: self.scrollback.len(),
            })
    }

    /// Get the entire screen as a string, one row per line, top to bottom
    pub fn screen_text(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for line in &self.screen {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }

    /// Get the scrollback (oldest first) followed by the screen as a string,
    /// one row per line
    pub fn screen_and_scrollback_text(&self) -> String {
        let mut out = String::new();
        for line in self.scrollback.iter() {
            out.push_str(&line.text());
            out.push('\n');
        }
        out.push_str(&self.screen_text());
        out
    }

    /// Fill every screen line with spaces. Attributes, scrollback, and the
    /// cursor are untouched.
    pub fn clear_screen(&mut self) {
        for line in &mut self.screen {
            line.clear();
        }
    }

    /// Clear the screen and discard all scrollback history
    pub fn clear_screen_and_scrollback(&mut self) {
        log::debug!(
            "clearing screen and discarding {} scrollback lines",
            self.scrollback.len()
        );
        self.clear_screen();
        self.scrollback.clear();
    }

    /// Fill a single screen row with one character, failing on an
    /// out-of-range row
    pub fn fill_line(&mut self, row: usize, c: char) -> Result<()> {
        let height = self.height;
        let line = self
            .screen
            .get_mut(row)
            .ok_or(Error::RowOutOfRange { row, height })?;
        line.fill(c);
        Ok(())
    }
}
