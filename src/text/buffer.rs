//! Text buffer: the ordered lines of a text box.
//!
//! Edits are addressed by a [`CursorPosition`] and return the position the
//! cursor should move to, so the caller can update buffer and cursor as one
//! step.

use super::cursor::CursorPosition;
use super::parser;
use crate::buffer::{Style, StyledCell};

/// An ordered run of styled cells with no line break inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    cells: Vec<StyledCell>,
}

impl Line {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of cells in the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the line has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells of the line.
    #[inline]
    pub fn cells(&self) -> &[StyledCell] {
        &self.cells
    }

    /// The characters of the line, style discarded.
    pub fn text(&self) -> String {
        self.cells.iter().map(StyledCell::ch).collect()
    }
}

impl From<&[StyledCell]> for Line {
    fn from(cells: &[StyledCell]) -> Self {
        debug_assert!(
            cells.iter().all(|c| c.ch() != '\n'),
            "a line must not contain a line break"
        );
        Self {
            cells: cells.to_vec(),
        }
    }
}

/// The lines of a text box.
///
/// Never empty: there is always at least one, possibly zero-length, line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Line>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a buffer holding one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// All lines, in order.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at 1-indexed `row`, if it exists.
    #[inline]
    pub fn line(&self, row: usize) -> Option<&Line> {
        row.checked_sub(1).and_then(|index| self.lines.get(index))
    }

    /// Length of the line at 1-indexed `row`, or 0 if it does not exist.
    #[inline]
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, Line::len)
    }

    /// Clamp `at` into the buffer: row to `[1, line_count]`, then column to
    /// `[1, len + 1]` of that row.
    pub fn clamp(&self, at: CursorPosition) -> CursorPosition {
        let row = at.row.clamp(1, self.line_count());
        let column = at.column.clamp(1, self.line_len(row) + 1);
        CursorPosition::new(row, column)
    }

    /// Parse `raw` with `style` and insert it at `at`.
    ///
    /// Returns the cursor position just past the inserted content.
    pub fn insert_text(&mut self, at: CursorPosition, raw: &str, style: Style) -> CursorPosition {
        let cells = parser::parse(raw, style);
        self.insert_cells(at, &cells)
    }

    /// Insert already styled cells at `at`, splitting them on `'\n'`.
    ///
    /// The text after the cursor moves to the end of the last inserted line.
    /// An `at` outside the buffer is clamped first. Returns the cursor
    /// position just past the inserted content.
    pub fn insert_cells(&mut self, at: CursorPosition, cells: &[StyledCell]) -> CursorPosition {
        let at = self.clamp(at);
        let candidates = parser::split(cells, '\n');
        let inserted = candidates.len();
        let last_len = candidates.last().map_or(0, |line| line.len());

        let index = at.row - 1;
        let after = self.lines[index].cells.split_off(at.column - 1);

        let mut candidates = candidates.into_iter();
        if let Some(first) = candidates.next() {
            self.lines[index].cells.extend_from_slice(first);
        }
        self.lines
            .splice(index + 1..index + 1, candidates.map(Line::from));

        let last = index + inserted - 1;
        self.lines[last].cells.extend(after);

        if inserted > 1 {
            CursorPosition::new(at.row + inserted - 1, last_len + 1)
        } else {
            CursorPosition::new(at.row, at.column + last_len)
        }
    }

    /// Delete the cell left of `at`, merging lines at column 1.
    ///
    /// An `at` outside the buffer is clamped first. Returns the new cursor
    /// position. At (1, 1) nothing changes.
    pub fn backspace(&mut self, at: CursorPosition) -> CursorPosition {
        let at = self.clamp(at);
        if at == CursorPosition::ORIGIN {
            return at;
        }

        let index = at.row - 1;
        if at.column == 1 {
            let current = self.lines.remove(index);
            let previous = &mut self.lines[index - 1];
            let previous_len = previous.len();
            previous.cells.extend(current.cells);
            CursorPosition::new(at.row - 1, previous_len + 1)
        } else {
            self.lines[index].cells.remove(at.column - 2);
            CursorPosition::new(at.row, at.column - 1)
        }
    }

    /// Reset to a single empty line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(Line::new());
    }

    /// All characters, style discarded, lines joined with `'\n'`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(line.cells.iter().map(StyledCell::ch));
        }
        text
    }
}
