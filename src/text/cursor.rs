//! Cursor: the logical insertion point of a text box.
//!
//! Positions are 1-indexed. Every move is clamped against the current shape
//! of the [`TextBuffer`]: the row first, then the column on the clamped row.

use super::buffer::TextBuffer;

/// A 1-indexed (row, column) insertion point.
///
/// `column == line length + 1` is the append position at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Line number, starting at 1.
    pub row: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl CursorPosition {
    /// The start of the buffer, (1, 1).
    pub const ORIGIN: Self = Self::new(1, 1);

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Check the position against the bounds of `text`.
    pub fn is_within(&self, text: &TextBuffer) -> bool {
        (1..=text.line_count()).contains(&self.row)
            && (1..=text.line_len(self.row) + 1).contains(&self.column)
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Owns the cursor position and keeps it inside the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorController {
    position: CursorPosition,
}

impl CursorController {
    /// Create a controller at (1, 1).
    pub const fn new() -> Self {
        Self {
            position: CursorPosition::ORIGIN,
        }
    }

    /// The current position.
    #[inline]
    pub const fn position(&self) -> CursorPosition {
        self.position
    }

    /// Place the cursor at a position produced by an edit of `text`.
    pub(crate) fn set(&mut self, position: CursorPosition, text: &TextBuffer) {
        debug_assert!(
            position.is_within(text),
            "edit produced out-of-range cursor {position:?}"
        );
        self.position = position;
    }

    /// Move to (`column`, `row`), clamped to the text.
    ///
    /// The row is clamped to `[1, line_count]` first; the column is then
    /// clamped to `[1, len + 1]` of that row.
    pub fn move_cursor(&mut self, column: isize, row: isize, text: &TextBuffer) {
        let row = clamp_index(row, text.line_count());
        let column = clamp_index(column, text.line_len(row) + 1);
        self.position = CursorPosition::new(row, column);
    }

    /// Move one column left. Stays put at column 1.
    pub fn move_left(&mut self, text: &TextBuffer) {
        let (column, row) = self.signed();
        self.move_cursor(column - 1, row, text);
    }

    /// Move one column right. Stays put at the end of the line.
    pub fn move_right(&mut self, text: &TextBuffer) {
        let (column, row) = self.signed();
        self.move_cursor(column + 1, row, text);
    }

    /// Move one line up, keeping the column where the line allows.
    pub fn move_up(&mut self, text: &TextBuffer) {
        let (column, row) = self.signed();
        self.move_cursor(column, row - 1, text);
    }

    /// Move one line down, keeping the column where the line allows.
    pub fn move_down(&mut self, text: &TextBuffer) {
        let (column, row) = self.signed();
        self.move_cursor(column, row + 1, text);
    }

    fn signed(&self) -> (isize, isize) {
        (
            isize::try_from(self.position.column).unwrap_or(isize::MAX),
            isize::try_from(self.position.row).unwrap_or(isize::MAX),
        )
    }
}

/// Clamp a signed 1-indexed coordinate to `[1, max]`.
fn clamp_index(value: isize, max: usize) -> usize {
    usize::try_from(value).unwrap_or(0).clamp(1, max.max(1))
}
