//! # Textbox
//!
//! A multi-line text box widget for terminal UIs.
//!
//! Text goes in through a cursor, optionally carrying inline style markers
//! like `[error](fg:red,mod:bold)`, and comes out as styled cells painted
//! into a character grid inside a bordered, titled region.
//!
//! ## Core Concepts
//!
//! - **Styled cells**: every character carries its own foreground, background and modifiers
//! - **Never-empty buffer**: there is always at least one line, and the cursor is always inside it
//! - **Clamped navigation**: cursor moves saturate at the text edges instead of failing
//! - **Grid capability**: rendering targets the [`Grid`] trait, not a concrete screen
//!
//! ## Example
//!
//! ```rust
//! use textbox::{Buffer, Rect, TextBox};
//!
//! let mut input = TextBox::new(Rect::new(0, 0, 12, 3));
//! input.insert_text("hello");
//! input.move_left();
//! input.backspace();
//! assert_eq!(input.get_text(), "helo");
//!
//! let mut buffer = Buffer::new(12, 3);
//! input.draw(&mut buffer);
//! assert_eq!(buffer.row_text(1).as_deref(), Some("│helo      │"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Color, Grid, Modifiers, Rgb, SparseGrid, Style, StyledCell};
pub use input::{convert_event, InputEvent, KeyCode, KeyModifiers};
pub use layout::{Point, Rect};
pub use text::{CursorPosition, TextBuffer};
pub use widget::{Block, RenderConfig, TextBox, TextBoxTheme, Widget};
