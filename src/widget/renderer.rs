//! Renderer: paints text box content into a grid region.
//!
//! Logical lines are optionally wrapped to the region width, painted top to
//! bottom, and clipped at the region's bottom edge. There is no scroll
//! offset: content below the region is simply not drawn.
//!
//! The cursor is overlaid last with a read-modify-write of its cell, so the
//! character underneath stays visible in the cursor style.

use super::textbox::TextBoxTheme;
use crate::buffer::{Grid, Style, StyledCell};
use crate::layout::Rect;
use crate::text::{parser, CursorPosition, TextBuffer};

/// Rendering options for a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap lines at the region width.
    pub wrap_text: bool,
    /// Style applied to inserted text without markers.
    pub text_style: Style,
    /// Style the cursor cell is drawn with.
    pub cursor_style: Style,
    /// Draw the cursor.
    pub show_cursor: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(TextBoxTheme::default())
    }
}

impl From<TextBoxTheme> for RenderConfig {
    /// Wrapping and cursor display start off.
    fn from(theme: TextBoxTheme) -> Self {
        Self {
            wrap_text: false,
            text_style: theme.text,
            cursor_style: theme.cursor,
            show_cursor: false,
        }
    }
}

/// Statistics about a draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Visual rows painted.
    pub rows_painted: usize,
    /// Cells written (excluding the cursor overlay).
    pub cells_painted: usize,
    /// Whether content was cut off at the bottom or right edge.
    pub clipped: bool,
    /// Whether the cursor overlay was drawn.
    pub cursor_drawn: bool,
}

/// Paints a [`TextBuffer`] and its cursor into a grid.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    text: &'a TextBuffer,
    cursor: CursorPosition,
    config: &'a RenderConfig,
}

impl<'a> Renderer<'a> {
    /// Create a renderer for one frame.
    pub const fn new(text: &'a TextBuffer, cursor: CursorPosition, config: &'a RenderConfig) -> Self {
        Self {
            text,
            cursor,
            config,
        }
    }

    /// The visual rows for a region `width` columns wide.
    ///
    /// With wrapping off every logical line is one visual row.
    pub fn visual_lines(&self, width: u16) -> Vec<&'a [StyledCell]> {
        let wrap_width = if self.config.wrap_text {
            usize::from(width)
        } else {
            0
        };

        let mut rows = Vec::with_capacity(self.text.line_count());
        for line in self.text.lines() {
            for segment in parser::wrap(line.cells(), wrap_width) {
                // Lines never hold '\n'; split anyway so a stray break can't
                // smear a row.
                rows.extend(parser::split(segment, '\n'));
            }
        }
        rows
    }

    /// Paint into `inner`, touching no cell outside it.
    pub fn draw(&self, grid: &mut dyn Grid, inner: Rect) -> RenderStats {
        let mut stats = RenderStats::default();
        if inner.is_empty() {
            return stats;
        }

        let height = usize::from(inner.height);
        let rows = self.visual_lines(inner.width);
        if rows.len() > height {
            stats.clipped = true;
        }

        for (row, cells) in rows.into_iter().take(height).enumerate() {
            Self::paint_row(grid, inner, row, cells, &mut stats);
            stats.rows_painted += 1;
        }

        if self.config.show_cursor {
            stats.cursor_drawn = self.overlay_cursor(grid, inner);
        }
        stats
    }

    fn paint_row(
        grid: &mut dyn Grid,
        inner: Rect,
        row: usize,
        cells: &[StyledCell],
        stats: &mut RenderStats,
    ) {
        let width = usize::from(inner.width);
        let mut x = 0;
        for cell in cells {
            let advance = cell.width();
            if x + advance > width {
                stats.clipped = true;
                break;
            }
            // x < width and row < height, both bounded by u16 sizes
            #[allow(clippy::cast_possible_truncation)]
            let point = inner.origin().offset(x as u16, row as u16);
            grid.set(point, *cell);
            stats.cells_painted += 1;
            x += advance;
        }
    }

    /// Restyle the cell under the cursor. Returns `false` if it falls outside.
    ///
    /// The cursor's x is the display width of the cells before it on its
    /// line, so it lands on the glyph under it rather than on the column a
    /// wide character covers.
    fn overlay_cursor(&self, grid: &mut dyn Grid, inner: Rect) -> bool {
        let CursorPosition { row, column } = self.cursor;
        let Some(line) = self.text.line(row) else {
            return false;
        };
        let Some(before) = column.checked_sub(1).and_then(|n| line.cells().get(..n)) else {
            return false;
        };

        let x: usize = before.iter().map(StyledCell::width).sum();
        let y = row - 1;
        if x >= usize::from(inner.width) || y >= usize::from(inner.height) {
            return false;
        }

        #[allow(clippy::cast_possible_truncation)]
        let point = inner.origin().offset(x as u16, y as u16);
        let cell = grid.get(point);
        grid.set(point, cell.with_style(self.config.cursor_style));
        true
    }
}
