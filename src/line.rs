//! Terminal line representation
//!
//! A line is a fixed-width row of cells. The width is set at construction
//! and never changes; every operation preserves the cell count.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Error, Result};

/// A single line in the terminal grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Cells in this line. Boxed slice: the length is the width invariant.
    cells: Box<[Cell]>,
}

impl Line {
    /// Create a new blank line with the specified number of columns
    pub fn new(width: usize) -> Self {
        Self {
            cells: vec![Cell::new(); width].into_boxed_slice(),
        }
    }

    /// Get the fixed width of this line
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Get a reference to a cell, `None` if out of bounds
    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Get a mutable reference to a cell, `None` if out of bounds
    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    /// Get the cell at a column, failing on an out-of-range index
    pub fn cell(&self, col: usize) -> Result<&Cell> {
        self.cells.get(col).ok_or(Error::ColumnOutOfRange {
            col,
            width: self.cells.len(),
        })
    }

    /// Get the cell at a column mutably, failing on an out-of-range index
    pub fn cell_mut(&mut self, col: usize) -> Result<&mut Cell> {
        let width = self.cells.len();
        self.cells
            .get_mut(col)
            .ok_or(Error::ColumnOutOfRange { col, width })
    }

    /// Set every cell's character to `c`, leaving attributes untouched
    pub fn fill(&mut self, c: char) {
        for cell in self.cells.iter_mut() {
            cell.set_char(c);
        }
    }

    /// Fill the line with spaces
    pub fn clear(&mut self) {
        self.fill(' ');
    }

    /// Insert a cell at `col`, shifting cells in `[col, width-2]` one step
    /// right. The cell previously at `width-1` is discarded; the line never
    /// grows. Fails on an out-of-range column.
    pub fn insert_at(&mut self, col: usize, cell: Cell) -> Result<()> {
        if col >= self.cells.len() {
            return Err(Error::ColumnOutOfRange {
                col,
                width: self.cells.len(),
            });
        }
        for i in (col + 1..self.cells.len()).rev() {
            self.cells[i] = self.cells[i - 1];
        }
        self.cells[col] = cell;
        Ok(())
    }

    /// Get the text content of the line: exactly `width` characters, in
    /// order, with blank sentinels rendered literally (not stripped and not
    /// substituted with spaces).
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch()).collect()
    }

    /// Iterator over cells
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
