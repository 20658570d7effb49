//! Buffer snapshot for testing and debugging
//!
//! Provides a serializable representation of buffer state.

use serde::{Deserialize, Serialize};

use crate::buffer::Buffer;
use crate::line::Line;

/// A complete snapshot of buffer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Screen dimensions
    pub dimensions: SnapshotDimensions,
    /// Cursor position
    pub cursor: SnapshotCursor,
    /// Screen content (rows of text with attribute spans)
    pub screen: Vec<SnapshotLine>,
    /// Scrollback content, oldest first (if included)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollback: Option<Vec<SnapshotLine>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDimensions {
    pub width: usize,
    pub height: usize,
    pub scrollback_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotLine {
    /// Text content of the line (blank sentinels rendered as spaces)
    pub text: String,
    /// Attribute spans (for detailed comparison)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<SnapshotAttrSpan>,
}

/// A run of consecutive cells sharing non-default attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotAttrSpan {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
}

impl Snapshot {
    /// Create a snapshot from a buffer
    pub fn from_buffer(buffer: &Buffer, include_scrollback: bool) -> Self {
        let screen: Vec<SnapshotLine> = (0..buffer.height())
            .filter_map(|row| buffer.line(row))
            .map(snapshot_line)
            .collect();

        let scrollback = if include_scrollback {
            Some(buffer.scrollback().iter().map(snapshot_line).collect())
        } else {
            None
        };

        Self {
            dimensions: SnapshotDimensions {
                width: buffer.width(),
                height: buffer.height(),
                scrollback_capacity: buffer.scrollback_capacity(),
            },
            cursor: SnapshotCursor {
                row: buffer.cursor_row(),
                col: buffer.cursor_col(),
            },
            screen,
            scrollback,
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a simple text representation of the screen
    pub fn screen_text(&self) -> String {
        self.screen
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn snapshot_line(line: &Line) -> SnapshotLine {
    // Render blanks as spaces so the JSON stays human-readable
    let text = line
        .iter()
        .map(|c| if c.is_blank() { ' ' } else { c.ch() })
        .collect();
    SnapshotLine {
        text,
        attrs: extract_attr_spans(line),
    }
}

/// Extract attribute spans from a line
fn extract_attr_spans(line: &Line) -> Vec<SnapshotAttrSpan> {
    let mut spans: Vec<SnapshotAttrSpan> = Vec::new();
    let mut current: Option<SnapshotAttrSpan> = None;

    for (i, cell) in line.iter().enumerate() {
        let attrs = &cell.attrs;
        let has_attrs =
            attrs.bold || attrs.italic || attrs.underline || attrs.fg != 0 || attrs.bg != 0;

        if !has_attrs {
            if let Some(mut span) = current.take() {
                span.end = i;
                spans.push(span);
            }
            continue;
        }

        let fg = (attrs.fg != 0).then_some(attrs.fg);
        let bg = (attrs.bg != 0).then_some(attrs.bg);

        if let Some(span) = &current {
            if span.fg == fg
                && span.bg == bg
                && span.bold == attrs.bold
                && span.italic == attrs.italic
                && span.underline == attrs.underline
            {
                // Same attributes, continue span
                continue;
            }
        }
        if let Some(mut span) = current.take() {
            span.end = i;
            spans.push(span);
        }

        current = Some(SnapshotAttrSpan {
            start: i,
            end: i, // Updated when the span closes
            fg,
            bg,
            bold: attrs.bold,
            italic: attrs.italic,
            underline: attrs.underline,
        });
    }

    if let Some(mut span) = current {
        span.end = line.width();
        spans.push(span);
    }

    spans
}
