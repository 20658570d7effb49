//! Scrollback buffer for terminal history
//!
//! A ring buffer of lines that have scrolled off the top of the screen.
//! Pushing beyond capacity overwrites the oldest line.

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// Scrollback buffer using a ring buffer implementation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scrollback {
    /// Ring buffer of lines
    lines: Vec<Line>,
    /// Maximum number of lines to store
    capacity: usize,
    /// Start index in the ring buffer (position of the oldest line)
    start: usize,
    /// Number of lines currently stored
    len: usize,
}

impl Scrollback {
    /// Create a new scrollback buffer with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity.min(1000)), // Don't pre-allocate too much
            capacity,
            start: 0,
            len: 0,
        }
    }

    /// Get the maximum number of lines this buffer retains
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current number of lines
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the scrollback is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push a line to the scrollback buffer, dropping the oldest line when
    /// the buffer is at capacity. A zero-capacity buffer discards every push.
    pub fn push(&mut self, line: Line) {
        if self.capacity == 0 {
            return;
        }

        if self.lines.len() < self.capacity {
            // Ring not yet full, just append
            self.lines.push(line);
            self.len += 1;
        } else {
            let idx = (self.start + self.len) % self.capacity;
            self.lines[idx] = line;
            if self.len < self.capacity {
                self.len += 1;
            } else {
                // Oldest line is overwritten
                log::trace!("scrollback full ({} lines), dropping oldest", self.capacity);
                self.start = (self.start + 1) % self.capacity;
            }
        }
    }

    /// Get a line by index (0 = oldest, len-1 = newest)
    pub fn get(&self, index: usize) -> Option<&Line> {
        if index >= self.len {
            return None;
        }
        let actual_idx = (self.start + index) % self.lines.len();
        self.lines.get(actual_idx)
    }

    /// Clear the scrollback buffer
    pub fn clear(&mut self) {
        self.lines.clear();
        self.start = 0;
        self.len = 0;
    }

    /// Iterator over lines from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(text: &str) -> Line {
        let mut line = Line::new(text.len().max(5));
        for (i, c) in text.chars().enumerate() {
            line.cell_mut(i).unwrap().set_char(c);
        }
        line
    }

    #[test]
    fn test_scrollback_new() {
        let sb = Scrollback::new(100);
        assert_eq!(sb.capacity(), 100);
        assert_eq!(sb.len(), 0);
        assert!(sb.is_empty());
    }

    #[test]
    fn test_scrollback_push() {
        let mut sb = Scrollback::new(100);
        sb.push(make_line("line1"));
        sb.push(make_line("line2"));

        assert_eq!(sb.len(), 2);
        assert_eq!(sb.get(0).unwrap().text(), "line1");
        assert_eq!(sb.get(1).unwrap().text(), "line2");
    }

    #[test]
    fn test_scrollback_ring_drops_oldest() {
        let mut sb = Scrollback::new(3);
        sb.push(make_line("line1"));
        sb.push(make_line("line2"));
        sb.push(make_line("line3"));
        sb.push(make_line("line4")); // Should overwrite line1

        assert_eq!(sb.len(), 3);
        assert_eq!(sb.get(0).unwrap().text(), "line2");
        assert_eq!(sb.get(1).unwrap().text(), "line3");
        assert_eq!(sb.get(2).unwrap().text(), "line4");
    }

    #[test]
    fn test_scrollback_zero_capacity() {
        let mut sb = Scrollback::new(0);
        sb.push(make_line("line1"));

        assert!(sb.is_empty());
        assert!(sb.get(0).is_none());
    }

    #[test]
    fn test_scrollback_get_out_of_range() {
        let mut sb = Scrollback::new(10);
        sb.push(make_line("line1"));

        assert!(sb.get(1).is_none());
        assert!(sb.get(100).is_none());
    }

    #[test]
    fn test_scrollback_clear() {
        let mut sb = Scrollback::new(100);
        sb.push(make_line("line1"));
        sb.push(make_line("line2"));

        sb.clear();

        assert!(sb.is_empty());
        assert_eq!(sb.len(), 0);
    }

    #[test]
    fn test_scrollback_iter() {
        let mut sb = Scrollback::new(100);
        sb.push(make_line("line1"));
        sb.push(make_line("line2"));
        sb.push(make_line("line3"));

        let texts: Vec<_> = sb.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_scrollback_iter_after_wraparound() {
        let mut sb = Scrollback::new(2);
        sb.push(make_line("line1"));
        sb.push(make_line("line2"));
        sb.push(make_line("line3"));

        let texts: Vec<_> = sb.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["line2", "line3"]);
    }
}
