//! Text Box Widget: Multi-line text with a cursor.
//!
//! A bordered, multi-line text box with cursor-addressed insertion,
//! backspace, clamped navigation and optional column wrapping. Used both as
//! an editable input and as an output pane that receives streamed text
//! through [`TextBox::insert_text`].
//!
//! All calls are synchronous and leave the buffer non-empty and the cursor
//! inside it.

use super::block::Block;
use super::renderer::{RenderConfig, RenderStats, Renderer};
use super::traits::Widget;
use crate::buffer::{Color, Grid, Modifiers, Style};
use crate::input::{InputEvent, KeyCode};
use crate::layout::Rect;
use crate::text::{CursorController, CursorPosition, Line, TextBuffer};
use tracing::{debug, trace};

/// Default styles for a text box, supplied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoxTheme {
    /// Style of plain inserted text.
    pub text: Style,
    /// Style of the cell under the cursor.
    pub cursor: Style,
}

impl Default for TextBoxTheme {
    fn default() -> Self {
        Self {
            text: Style::DEFAULT.with_fg(Color::WHITE),
            cursor: Style::new(Color::WHITE, Color::Reset, Modifiers::REVERSED),
        }
    }
}

/// A multi-line text box.
#[derive(Debug, Clone)]
pub struct TextBox {
    /// Identifier the host uses to route focus and output.
    id: String,
    /// Widget bounds, including the block decoration.
    bounds: Rect,
    /// Border and title.
    block: Block,
    /// Rendering options.
    config: RenderConfig,
    /// Content.
    text: TextBuffer,
    /// Insertion point.
    cursor: CursorController,
    /// Needs redraw flag.
    dirty: bool,
}

impl TextBox {
    /// Create an empty text box with the default theme.
    pub fn new(bounds: Rect) -> Self {
        Self::with_theme(bounds, TextBoxTheme::default())
    }

    /// Create an empty text box with a custom theme.
    pub fn with_theme(bounds: Rect, theme: TextBoxTheme) -> Self {
        Self {
            id: String::new(),
            bounds,
            block: Block::default(),
            config: RenderConfig::from(theme),
            text: TextBuffer::new(),
            cursor: CursorController::new(),
            dirty: true,
        }
    }

    /// Set the identifier (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the block decoration (builder pattern).
    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }

    /// The identifier given by the host.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendering options.
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Mutable rendering options. Marks the widget dirty.
    pub fn config_mut(&mut self) -> &mut RenderConfig {
        self.dirty = true;
        &mut self.config
    }

    /// The block decoration.
    pub const fn block(&self) -> &Block {
        &self.block
    }

    /// Mutable block decoration. Marks the widget dirty.
    pub fn block_mut(&mut self) -> &mut Block {
        self.dirty = true;
        &mut self.block
    }

    /// The content area inside the block.
    pub const fn inner(&self) -> Rect {
        self.block.inner(self.bounds)
    }

    /// The lines of content.
    pub fn lines(&self) -> &[Line] {
        self.text.lines()
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.text.line_count()
    }

    /// The cursor position, 1-indexed.
    pub const fn cursor(&self) -> CursorPosition {
        self.cursor.position()
    }

    /// Insert text at the cursor, moving the cursor past it.
    ///
    /// Inline `[text](fg:red)` markers are applied; everything else takes
    /// the theme's text style.
    pub fn insert_text(&mut self, raw: &str) {
        let at = self.cursor.position();
        let next = self.text.insert_text(at, raw, self.config.text_style);
        self.cursor.set(next, &self.text);
        trace!(
            id = %self.id,
            bytes = raw.len(),
            row = next.row,
            column = next.column,
            "inserted text"
        );
        self.touched();
    }

    /// Delete the character left of the cursor, joining lines at column 1.
    pub fn backspace(&mut self) {
        let at = self.cursor.position();
        let next = self.text.backspace(at);
        self.cursor.set(next, &self.text);
        self.touched();
    }

    /// Remove all text and return the cursor to (1, 1).
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.cursor = CursorController::new();
        debug!(id = %self.id, "cleared text");
        self.touched();
    }

    /// Replace all text.
    pub fn set_text(&mut self, raw: &str) {
        self.clear_text();
        self.insert_text(raw);
        debug!(id = %self.id, lines = self.text.line_count(), "set text");
    }

    /// All text without styles, lines joined with `'\n'`.
    pub fn get_text(&self) -> String {
        self.text.text()
    }

    /// Move the cursor to (`column`, `row`), clamped to the text.
    pub fn move_cursor(&mut self, column: isize, row: isize) {
        self.cursor.move_cursor(column, row, &self.text);
        self.touched();
    }

    /// Move the cursor one column left, stopping at column 1.
    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.text);
        self.touched();
    }

    /// Move the cursor one column right, stopping at the line end.
    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.text);
        self.touched();
    }

    /// Move the cursor one line up.
    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.text);
        self.touched();
    }

    /// Move the cursor one line down.
    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.text);
        self.touched();
    }

    /// Draw the block over the bounds and the text inside it.
    pub fn draw(&self, grid: &mut dyn Grid) -> RenderStats {
        self.block.draw(grid, self.bounds);
        let inner = self.inner();
        let stats = Renderer::new(&self.text, self.cursor.position(), &self.config).draw(grid, inner);
        trace!(
            id = %self.id,
            rows = stats.rows_painted,
            cells = stats.cells_painted,
            clipped = stats.clipped,
            "drew text box"
        );
        stats
    }

    fn touched(&mut self) {
        self.dirty = true;
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(self.text.line_count() >= 1, "text box lost its last line");
        debug_assert!(
            self.cursor.position().is_within(&self.text),
            "cursor {:?} escaped the text",
            self.cursor.position()
        );
    }

    /// Move the cursor to the start of the current line.
    fn cursor_home(&mut self) {
        let row = isize::try_from(self.cursor().row).unwrap_or(isize::MAX);
        self.move_cursor(1, row);
    }

    /// Move the cursor to the end of the current line.
    fn cursor_end(&mut self) {
        let row = isize::try_from(self.cursor().row).unwrap_or(isize::MAX);
        self.move_cursor(isize::MAX, row);
    }
}

impl Widget for TextBox {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, grid: &mut dyn Grid) {
        self.draw(grid);
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Char(c) if !modifiers.control && !modifiers.alt => {
                    let mut utf8 = [0u8; 4];
                    self.insert_text(c.encode_utf8(&mut utf8));
                    true
                }
                KeyCode::Enter => {
                    self.insert_text("\n");
                    true
                }
                KeyCode::Backspace => {
                    self.backspace();
                    true
                }
                KeyCode::Left => {
                    self.move_left();
                    true
                }
                KeyCode::Right => {
                    self.move_right();
                    true
                }
                KeyCode::Up => {
                    self.move_up();
                    true
                }
                KeyCode::Down => {
                    self.move_down();
                    true
                }
                KeyCode::Home => {
                    self.cursor_home();
                    true
                }
                KeyCode::End => {
                    self.cursor_end();
                    true
                }
                _ => false,
            },
            InputEvent::Paste(text) => {
                self.insert_text(text);
                true
            }
            InputEvent::Resize { .. } => false,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
