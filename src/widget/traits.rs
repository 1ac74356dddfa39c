//! Widget trait shared by text box style components.

use crate::buffer::Grid;
use crate::input::InputEvent;
use crate::layout::Rect;

/// A UI component that can be rendered to a grid and handle input.
///
/// Hosts own layout and focus; they assign bounds, route input to the
/// focused widget and ask dirty widgets to render.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given grid.
    ///
    /// The widget only writes to cells within its bounds.
    fn render(&self, grid: &mut dyn Grid);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate to other widgets.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
