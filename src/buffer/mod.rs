//! Buffer module: cells, styles and the surfaces they are drawn on.
//!
//! This module contains:
//! - [`StyledCell`]: one character plus its [`Style`]
//! - [`Grid`]: the read/write capability widgets draw through
//! - [`Buffer`]: a dense screen-sized grid
//! - [`SparseGrid`]: a map-backed grid holding only written cells

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
mod grid;

pub use buffer::Buffer;
pub use cell::{Color, Modifiers, Rgb, Style, StyledCell, UnknownStyleName};
pub use grid::{Grid, SparseGrid};
