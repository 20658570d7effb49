//! termbuf - Logical terminal screen model
//!
//! This crate provides the backend data model of a character-grid terminal
//! display:
//! - A fixed-size visible screen of styled cells
//! - Cursor position and current write attributes
//! - A bounded scrollback of lines evicted off the top
//!
//! It is driven by an external escape-sequence interpreter or renderer; it
//! does not parse input streams, render pixels, or manage process I/O.
//!
//! The model is deterministic: given the same sequence of operations, it
//! always produces the same state. All operations are synchronous and
//! single-threaded; a `Buffer` is not designed for concurrent access.
//!
//! # Example
//!
//! ```
//! use termbuf::Buffer;
//!
//! let mut buffer = Buffer::new(5, 3, 2);
//! buffer.write("hello");
//! assert_eq!(buffer.line_text(0).unwrap(), "hello");
//! assert_eq!(buffer.cursor_row(), 1);
//! ```

mod buffer;
mod cell;
mod error;
mod line;
mod scrollback;
mod snapshot;

pub use buffer::{Buffer, CursorDirection};
pub use cell::{Cell, CellAttributes};
pub use error::{Error, Result};
pub use line::Line;
pub use scrollback::Scrollback;
pub use snapshot::Snapshot;
