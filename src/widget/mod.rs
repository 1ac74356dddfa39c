//! Text box widget and the pieces it is drawn with.
//!
//! A [`TextBox`] owns a [`TextBuffer`](crate::text::TextBuffer) and a
//! cursor, decorates itself with a [`Block`], and paints through a
//! [`Renderer`] into any [`Grid`](crate::buffer::Grid).
//!
//! # Example
//!
//! ```rust
//! use textbox::buffer::Buffer;
//! use textbox::layout::Rect;
//! use textbox::widget::TextBox;
//!
//! let mut output = TextBox::new(Rect::new(0, 0, 20, 4));
//! output.insert_text("build [ok](fg:green)\n");
//!
//! let mut buffer = Buffer::new(20, 4);
//! output.draw(&mut buffer);
//! assert_eq!(buffer.row_text(1).as_deref(), Some("│build ok          │"));
//! ```

mod block;
mod renderer;
mod textbox;
mod traits;

pub use block::Block;
pub use renderer::{RenderConfig, RenderStats, Renderer};
pub use textbox::{TextBox, TextBoxTheme};
pub use traits::Widget;
