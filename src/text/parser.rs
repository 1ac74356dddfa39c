//! Style parser: raw text to styled cells, plus line splitting and wrapping.

use super::markup::{tokenize, Token};
use crate::buffer::{Style, StyledCell};

/// Convert raw text into styled cells.
///
/// Every character gets `default_style`, except inside a style marker where
/// the marker's spec is applied over `default_style`. Malformed markers are
/// kept as literal characters.
pub fn parse(raw: &str, default_style: Style) -> Vec<StyledCell> {
    let mut cells = Vec::with_capacity(raw.len());
    let mut style = default_style;

    for token in tokenize(raw) {
        match token {
            Token::Literal(text) => {
                cells.extend(text.chars().map(|ch| StyledCell::new(ch, style)));
            }
            Token::Push(spec) => style = spec.apply(default_style),
            Token::Pop => style = default_style,
        }
    }
    cells
}

/// Split cells on every occurrence of `delimiter`.
///
/// `n` delimiters always produce `n + 1` segments, so input without the
/// delimiter (including empty input) comes back as a single segment.
pub fn split(cells: &[StyledCell], delimiter: char) -> Vec<&[StyledCell]> {
    cells.split(|cell| cell.ch() == delimiter).collect()
}

/// Break cells into segments at most `width` display columns wide.
///
/// Column based, not word aware: for single-width text every `width` cells
/// start a new segment, and a wide character that would straddle the edge
/// moves to the next segment. A segment always holds at least one cell. A
/// `width` of 0 disables wrapping and an empty input yields one empty
/// segment.
pub fn wrap(cells: &[StyledCell], width: usize) -> Vec<&[StyledCell]> {
    if width == 0 || cells.is_empty() {
        return vec![cells];
    }

    let mut segments = Vec::new();
    let mut start = 0;
    let mut columns = 0;
    for (i, cell) in cells.iter().enumerate() {
        let advance = cell.width();
        if columns + advance > width && i > start {
            segments.push(&cells[start..i]);
            start = i;
            columns = 0;
        }
        columns += advance;
    }
    segments.push(&cells[start..]);
    segments
}
