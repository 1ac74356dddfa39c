//! End-to-end text box scenarios: editing, streaming output and presentation.

use std::sync::Once;
use textbox::terminal::present;
use textbox::{
    Block, Buffer, Color, CursorPosition, InputEvent, KeyCode, Modifiers, Rect, Style,
    TextBox, TextBoxTheme, Widget,
};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

fn rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.height())
        .filter_map(|y| buffer.row_text(y))
        .collect()
}

fn type_str(textbox: &mut TextBox, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' {
            KeyCode::Enter
        } else {
            KeyCode::Char(ch)
        };
        assert!(textbox.handle_input(&InputEvent::key(code)));
    }
}

#[test]
fn test_editor_session() {
    setup_test_logging();
    let mut editor = TextBox::new(Rect::new(0, 0, 16, 5))
        .with_id("editor")
        .with_block(Block::default().with_title("Input"));
    editor.config_mut().show_cursor = true;

    type_str(&mut editor, "fn main\n{}");
    editor.handle_input(&InputEvent::key(KeyCode::Left));
    type_str(&mut editor, "\n");
    editor.handle_input(&InputEvent::key(KeyCode::Up));
    editor.handle_input(&InputEvent::key(KeyCode::End));
    type_str(&mut editor, " ok");

    assert_eq!(editor.get_text(), "fn main\n{ ok\n}");
    assert_eq!(editor.cursor(), CursorPosition::new(2, 5));

    let mut buffer = Buffer::new(16, 5);
    let stats = editor.draw(&mut buffer);
    assert!(stats.cursor_drawn);
    assert_eq!(
        rows(&buffer),
        vec![
            "┌─Input────────┐",
            "│fn main       │",
            "│{ ok          │",
            "│}             │",
            "└──────────────┘",
        ]
    );
    let cursor = buffer.get(5, 2).copied().unwrap_or_default();
    assert_eq!(cursor.style(), TextBoxTheme::default().cursor);
}

#[test]
fn test_output_pane_streaming() {
    setup_test_logging();
    let mut output = TextBox::new(Rect::new(0, 0, 12, 4)).with_id("output");

    for chunk in ["compil", "ing...\n", "[done](fg:green)", "\n"] {
        output.insert_text(chunk);
    }

    assert_eq!(output.get_text(), "compiling...\ndone\n");
    assert_eq!(output.line_count(), 3);
    assert_eq!(output.cursor(), CursorPosition::new(3, 1));

    let done = output.lines()[1].cells()[0];
    assert_eq!(done.style().fg, Color::GREEN);

    // Inner area is 10 wide; the first line is clipped on the right.
    let mut buffer = Buffer::new(12, 4);
    let stats = output.draw(&mut buffer);
    assert!(stats.clipped);
    assert_eq!(buffer.row_text(1).as_deref(), Some("│compiling.│"));
    assert_eq!(buffer.row_text(2).as_deref(), Some("│done      │"));
}

#[test]
fn test_wrapped_output_pane() {
    setup_test_logging();
    let mut output = TextBox::new(Rect::new(0, 0, 7, 5));
    output.config_mut().wrap_text = true;
    output.set_text("abcdefgh\nij");

    let mut buffer = Buffer::new(7, 5);
    let stats = output.draw(&mut buffer);

    assert!(!stats.clipped);
    assert_eq!(stats.rows_painted, 3);
    assert_eq!(
        rows(&buffer),
        vec!["┌─────┐", "│abcde│", "│fgh  │", "│ij   │", "└─────┘"]
    );
}

#[test]
fn test_custom_theme() {
    setup_test_logging();
    let theme = TextBoxTheme {
        text: Style::DEFAULT.with_fg(Color::CYAN),
        cursor: Style::DEFAULT.with_bg(Color::YELLOW),
    };
    let mut textbox = TextBox::with_theme(Rect::new(0, 0, 10, 3), theme);
    textbox.insert_text("hi [there](mod:underline)");

    let cells = textbox.lines()[0].cells();
    assert_eq!(cells[0].style(), theme.text);
    let styled = cells[3].style();
    assert_eq!(styled.fg, Color::CYAN);
    assert!(styled.modifiers.contains(Modifiers::UNDERLINE));
    assert_eq!(textbox.config().cursor_style, theme.cursor);
}

#[test]
fn test_presented_frame_matches_widget() {
    setup_test_logging();
    let mut textbox = TextBox::new(Rect::new(0, 0, 14, 4));
    textbox.set_text("[error](fg:red,mod:bold): disk\nretrying");

    let mut buffer = Buffer::new(14, 4);
    textbox.draw(&mut buffer);

    let mut bytes = Vec::new();
    present(&buffer, &mut bytes).unwrap();
    let mut parser = vt100::Parser::new(4, 14, 0);
    parser.process(&bytes);
    let screen = parser.screen();

    assert_eq!(
        screen.contents(),
        "┌────────────┐\n│error: disk │\n│retrying    │\n└────────────┘"
    );
    let error = screen.cell(1, 1).unwrap();
    assert_eq!(error.contents(), "e");
    assert_eq!(error.fgcolor(), vt100::Color::Idx(1));
    assert!(error.bold());
    let colon = screen.cell(1, 6).unwrap();
    assert_eq!(colon.fgcolor(), vt100::Color::Idx(7));
    assert!(!colon.bold());
}

#[test]
fn test_resize_moves_drawing() {
    setup_test_logging();
    let mut textbox = TextBox::new(Rect::new(0, 0, 6, 3));
    textbox.set_text("x");
    textbox.clear_redraw();

    textbox.set_bounds(Rect::new(2, 1, 6, 3));
    assert!(textbox.needs_redraw());

    let mut buffer = Buffer::new(10, 5);
    textbox.render(&mut buffer);
    assert_eq!(buffer.get(3, 2).map(|cell| cell.ch()), Some('x'));
    assert_eq!(buffer.get(1, 1).map(|cell| cell.ch()), Some(' '));
}

#[test]
fn test_presented_cursor_after_wide_char() {
    setup_test_logging();
    let mut textbox = TextBox::new(Rect::new(0, 0, 8, 3));
    textbox.config_mut().show_cursor = true;
    textbox.set_text("日x");
    textbox.move_cursor(2, 1);

    let mut buffer = Buffer::new(8, 3);
    textbox.draw(&mut buffer);

    let mut bytes = Vec::new();
    present(&buffer, &mut bytes).unwrap();
    let mut parser = vt100::Parser::new(3, 8, 0);
    parser.process(&bytes);
    let screen = parser.screen();

    let cursor = screen.cell(1, 3).unwrap();
    assert_eq!(cursor.contents(), "x");
    assert!(cursor.inverse());
    assert!(!screen.cell(1, 1).unwrap().inverse());
}

#[test]
fn test_wrapped_wide_text_is_all_drawn() {
    setup_test_logging();
    let mut textbox = TextBox::new(Rect::new(0, 0, 6, 5));
    textbox.config_mut().wrap_text = true;
    textbox.set_text("日本語日本語");

    let mut buffer = Buffer::new(6, 5);
    let stats = textbox.draw(&mut buffer);

    assert_eq!(stats.cells_painted, 6);
    assert!(!stats.clipped);
    assert_eq!(stats.rows_painted, 3);
}
