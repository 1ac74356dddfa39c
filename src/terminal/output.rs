//! Frame output: turn a [`Buffer`] into terminal escape sequences.
//!
//! A frame is built into one byte vector with crossterm commands and then
//! flushed in a single write, so the terminal never shows a half-drawn
//! frame.

use crate::buffer::{Buffer, Color, Modifiers, Style};
use crossterm::cursor::{Hide, MoveTo};
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::queue;
use std::io::{self, Write};

const ATTRIBUTES: [(Modifiers, Attribute); 8] = [
    (Modifiers::BOLD, Attribute::Bold),
    (Modifiers::DIM, Attribute::Dim),
    (Modifiers::ITALIC, Attribute::Italic),
    (Modifiers::UNDERLINE, Attribute::Underlined),
    (Modifiers::BLINK, Attribute::SlowBlink),
    (Modifiers::REVERSED, Attribute::Reverse),
    (Modifiers::HIDDEN, Attribute::Hidden),
    (Modifiers::STRIKETHROUGH, Attribute::CrossedOut),
];

/// Map a cell color to crossterm's color type.
pub const fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Indexed(index) => TermColor::AnsiValue(index),
        Color::Rgb(rgb) => TermColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
    }
}

/// Queue the commands that switch the terminal to `style`.
///
/// Attributes are reset first; SGR has no per-attribute "off" that works
/// everywhere.
fn queue_style(output: &mut Vec<u8>, style: Style) -> io::Result<()> {
    queue!(
        output,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg)),
    )?;
    for (modifier, attribute) in ATTRIBUTES {
        if style.modifiers.contains(modifier) {
            queue!(output, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Build a full redraw of `buffer` into `output`.
///
/// Style changes are only emitted when the style differs from the previous
/// cell. Cells hidden under a wide character are skipped.
///
/// # Errors
///
/// Returns an error if a command fails to encode.
pub fn render_frame(buffer: &Buffer, output: &mut Vec<u8>) -> io::Result<()> {
    queue!(output, Hide)?;

    let mut last: Option<Style> = None;
    for (y, row) in (0u16..).zip(buffer.rows()) {
        queue!(output, MoveTo(0, y))?;
        let mut skip = 0;
        for cell in row {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if last != Some(cell.style()) {
                queue_style(output, cell.style())?;
                last = Some(cell.style());
            }
            queue!(output, Print(cell.ch()))?;
            skip = cell.width() - 1;
        }
    }

    queue!(output, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Draw `buffer` to `writer` in a single write.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn present<W: Write>(buffer: &Buffer, writer: &mut W) -> io::Result<()> {
    let mut output = Vec::with_capacity(buffer.len() * 4);
    render_frame(buffer, &mut output)?;
    writer.write_all(&output)?;
    writer.flush()
}
