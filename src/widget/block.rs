//! Block: optional border and title drawn around a widget's content.

use crate::buffer::{Grid, Style, StyledCell};
use crate::layout::{Point, Rect};

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Border and title decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Draw a single-line border around the area.
    pub border: bool,
    /// Title drawn on the top border. Ignored without a border.
    pub title: String,
    /// Style of the border lines.
    pub border_style: Style,
    /// Style of the title text.
    pub title_style: Style,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            border: true,
            title: String::new(),
            border_style: Style::DEFAULT,
            title_style: Style::DEFAULT,
        }
    }
}

impl Block {
    /// A block that draws nothing; the inner area is the whole area.
    pub fn borderless() -> Self {
        Self {
            border: false,
            ..Self::default()
        }
    }

    /// Set the title (builder pattern).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The content area inside the decoration.
    pub const fn inner(&self, area: Rect) -> Rect {
        if self.border {
            area.shrink(1)
        } else {
            area
        }
    }

    /// Draw the border and title within `area`.
    pub fn draw(&self, grid: &mut dyn Grid, area: Rect) {
        if !self.border || area.width < 2 || area.height < 2 {
            return;
        }

        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        let edge = |ch| StyledCell::new(ch, self.border_style);

        for x in area.x + 1..right {
            grid.set(Point::new(x, area.y), edge(HORIZONTAL));
            grid.set(Point::new(x, bottom), edge(HORIZONTAL));
        }
        for y in area.y + 1..bottom {
            grid.set(Point::new(area.x, y), edge(VERTICAL));
            grid.set(Point::new(right, y), edge(VERTICAL));
        }
        grid.set(Point::new(area.x, area.y), edge(TOP_LEFT));
        grid.set(Point::new(right, area.y), edge(TOP_RIGHT));
        grid.set(Point::new(area.x, bottom), edge(BOTTOM_LEFT));
        grid.set(Point::new(right, bottom), edge(BOTTOM_RIGHT));

        // Title sits after the corner and one rule cell, inside the top edge.
        let title_width = usize::from(area.width.saturating_sub(3));
        let mut offset = 0;
        for ch in self.title.chars() {
            let cell = StyledCell::new(ch, self.title_style);
            let advance = cell.width();
            if offset + advance > title_width {
                break;
            }
            #[allow(clippy::cast_possible_truncation)]
            let x = area.x + 2 + offset as u16;
            grid.set(Point::new(x, area.y), cell);
            offset += advance;
        }
    }
}
