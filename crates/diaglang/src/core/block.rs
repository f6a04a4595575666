//! Text blocks: the universal rendering output
//!
//! Every renderer produces a `TextBlock`, an ordered sequence of lines
//! that may differ in length. Composition treats a block as opaque
//! except for its geometry: width is the widest line, the center column
//! is `width / 2`, and the middle row is `height / 2`. Downstream code
//! composes blocks through this geometry instead of re-scanning glyphs.

use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Display width of a line in terminal columns
pub fn display_width(line: &str) -> usize {
    UnicodeWidthStr::width(line)
}

/// A multi-line text value with attached geometry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    /// The empty block; dropped by the orchestrator rather than emitted
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a block from embedded-newline text
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Row count
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| display_width(l)).max().unwrap_or(0)
    }

    /// Column connectors align on: `floor(width / 2)`
    pub fn center_column(&self) -> usize {
        self.width() / 2
    }

    /// Row horizontal connectors attach at: `floor(height / 2)`
    pub fn middle_row(&self) -> usize {
        self.height() / 2
    }

    /// Shift the whole block right by prefixing every line with spaces
    pub fn pad_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        let pad = " ".repeat(columns);
        for line in &mut self.lines {
            *line = format!("{}{}", pad, line);
        }
    }

    /// Append another block below this one
    pub fn extend(&mut self, other: TextBlock) {
        self.lines.extend(other.lines);
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
