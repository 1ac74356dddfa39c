//! Layout module: geometry shared by grids and widgets.
//!
//! Window layout itself belongs to the host; widgets only receive a
//! [`Rect`] to draw into.

mod rect;

pub use rect::{Point, Rect};
