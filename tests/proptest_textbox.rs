//! Property-based tests for text box editing and rendering invariants.

use proptest::prelude::*;
use textbox::{Buffer, CursorPosition, Grid, Point, Rect, SparseGrid, TextBox};

// ============================================================================
// Strategies
// ============================================================================

/// Plain text with line breaks and no markup brackets.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:\n]{0,80}"
}

/// Plain text with wide characters mixed in.
fn mixed_width_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", " ", "\n", "日", "本", "é"]),
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Backspace,
    Move(isize, isize),
    Left,
    Right,
    Up,
    Down,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => plain_text().prop_map(Op::Insert),
        3 => Just(Op::Backspace),
        2 => (-5isize..40, -5isize..10).prop_map(|(c, r)| Op::Move(c, r)),
        1 => Just(Op::Left),
        1 => Just(Op::Right),
        1 => Just(Op::Up),
        1 => Just(Op::Down),
        1 => Just(Op::Clear),
    ]
}

fn apply(textbox: &mut TextBox, op: &Op) {
    match op {
        Op::Insert(text) => textbox.insert_text(text),
        Op::Backspace => textbox.backspace(),
        Op::Move(column, row) => textbox.move_cursor(*column, *row),
        Op::Left => textbox.move_left(),
        Op::Right => textbox.move_right(),
        Op::Up => textbox.move_up(),
        Op::Down => textbox.move_down(),
        Op::Clear => textbox.clear_text(),
    }
}

fn cursor_in_bounds(textbox: &TextBox) -> bool {
    let CursorPosition { row, column } = textbox.cursor();
    row >= 1
        && row <= textbox.line_count()
        && column >= 1
        && column <= textbox.lines()[row - 1].len() + 1
}

// ============================================================================
// Editing Properties
// ============================================================================

proptest! {
    /// The buffer never loses its last line and the cursor never leaves it.
    #[test]
    fn edits_keep_buffer_and_cursor_valid(ops in prop::collection::vec(op(), 0..40)) {
        let mut textbox = TextBox::new(Rect::new(0, 0, 30, 8));
        for op in &ops {
            apply(&mut textbox, op);
            prop_assert!(textbox.line_count() >= 1);
            prop_assert!(cursor_in_bounds(&textbox), "cursor {:?} after {:?}", textbox.cursor(), op);
        }
    }

    /// Setting marker-free text reads back unchanged.
    #[test]
    fn set_text_round_trips(text in plain_text()) {
        let mut textbox = TextBox::new(Rect::new(0, 0, 30, 8));
        textbox.set_text(&text);
        prop_assert_eq!(textbox.get_text(), text);
    }

    /// Line count is one more than the number of line breaks inserted.
    #[test]
    fn line_count_follows_breaks(text in mixed_width_text()) {
        let mut textbox = TextBox::new(Rect::new(0, 0, 30, 8));
        textbox.set_text(&text);
        prop_assert_eq!(textbox.line_count(), text.matches('\n').count() + 1);
    }

    /// Inserting one character and deleting it restores text and cursor.
    #[test]
    fn insert_then_backspace_is_identity(
        text in plain_text(),
        ch in "[a-z]",
        column in 1isize..40,
        row in 1isize..10,
    ) {
        let mut textbox = TextBox::new(Rect::new(0, 0, 30, 8));
        textbox.set_text(&text);
        textbox.move_cursor(column, row);
        let before = textbox.cursor();

        textbox.insert_text(&ch);
        textbox.backspace();

        prop_assert_eq!(textbox.get_text(), text);
        prop_assert_eq!(textbox.cursor(), before);
    }

    /// Moving far out of range lands on the text's corners.
    #[test]
    fn move_cursor_saturates(text in plain_text()) {
        let mut textbox = TextBox::new(Rect::new(0, 0, 30, 8));
        textbox.set_text(&text);

        textbox.move_cursor(isize::MIN, isize::MIN);
        prop_assert_eq!(textbox.cursor(), CursorPosition::ORIGIN);

        textbox.move_cursor(isize::MAX, isize::MAX);
        let last = textbox.lines().last().map_or(0, |line| line.len());
        prop_assert_eq!(textbox.cursor(), CursorPosition::new(textbox.line_count(), last + 1));
    }
}

// ============================================================================
// Rendering Properties
// ============================================================================

proptest! {
    /// Drawing never touches a cell outside the widget bounds.
    #[test]
    fn draw_stays_within_bounds(
        text in mixed_width_text(),
        x in 0u16..10,
        y in 0u16..10,
        width in 0u16..12,
        height in 0u16..8,
        wrap in any::<bool>(),
    ) {
        let bounds = Rect::new(x, y, width, height);
        let mut textbox = TextBox::new(bounds);
        textbox.config_mut().wrap_text = wrap;
        textbox.config_mut().show_cursor = true;
        textbox.set_text(&text);

        let mut grid = SparseGrid::new();
        textbox.draw(&mut grid);

        for (point, _) in grid.iter() {
            prop_assert!(bounds.contains(point), "{:?} outside {:?}", point, bounds);
        }
    }

    /// With wrapping on and enough height, every character is painted.
    #[test]
    fn wrapped_text_is_fully_painted(text in "[a-z]{0,40}", width in 1u16..10) {
        let mut textbox = TextBox::new(Rect::new(0, 0, width + 2, 44));
        textbox.config_mut().wrap_text = true;
        textbox.set_text(&text);

        let mut buffer = Buffer::new(width + 2, 44);
        let stats = textbox.draw(&mut buffer);

        prop_assert_eq!(stats.cells_painted, text.len());
        prop_assert!(!stats.clipped);
        if let Some(first) = text.chars().next() {
            prop_assert_eq!(buffer.get(1, 1).map(|cell| cell.ch()), Some(first));
            prop_assert_eq!(Grid::get(&buffer, Point::new(1, 1)).ch(), first);
        }
    }
}
