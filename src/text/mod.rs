//! Text module: the editable content behind a text box.
//!
//! - [`markup`]: tokenizer for inline `[text](fg:red)` style markers
//! - [`parser`]: styled-cell parsing, line splitting and column wrapping
//! - [`TextBuffer`]: the ordered lines, edited at a [`CursorPosition`]
//! - [`CursorController`]: clamped cursor movement

mod buffer;
mod cursor;
pub mod markup;
pub mod parser;

pub use buffer::{Line, TextBuffer};
pub use cursor::{CursorController, CursorPosition};
pub use markup::StyleSpec;
