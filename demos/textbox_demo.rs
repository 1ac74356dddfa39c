//! Text Box Demo: an editor pane above a streaming output pane.
//!
//! Demonstrates:
//! - Editing with cursor movement, Enter and Backspace
//! - Styled output streamed from a background thread
//! - Wrapping toggled at runtime
//!
//! Keyboard:
//!   Type        → Edit the input pane
//!   Ctrl+S      → Send input to the output pane
//!   Ctrl+W      → Toggle wrapping in the output pane
//!   ESC         → Exit

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use crossterm::event;
use std::io;
use std::thread;
use std::time::Duration;
use textbox::terminal::{present, TerminalSession};
use textbox::{convert_event, Block, Buffer, InputEvent, KeyCode, Rect, TextBox, Widget};

const STATUS: [&str; 4] = [
    "[ok](fg:green) fetched index",
    "[warn](fg:yellow) slow response from mirror",
    "[ok](fg:green,mod:bold) resolved 42 packages",
    "[err](fg:red,mod:bold) checksum mismatch, retrying",
];

fn spawn_input(sender: Sender<InputEvent>) {
    thread::spawn(move || loop {
        match event::poll(Duration::from_millis(50)) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if let Some(input) = convert_event(event) {
                        if sender.send(input).is_err() {
                            break;
                        }
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {}
            Err(_) => break,
        }
    });
}

fn spawn_stream(sender: Sender<String>) {
    thread::spawn(move || {
        for i in 0.. {
            thread::sleep(Duration::from_millis(400));
            let line = format!("{:>4} {}\n", i, STATUS[i % STATUS.len()]);
            if sender.send(line).is_err() {
                break;
            }
        }
    });
}

fn layout(width: u16, height: u16) -> (Rect, Rect) {
    Rect::new(0, 0, width, height).split_vertical(height / 3)
}

fn render(buffer: &mut Buffer, editor: &TextBox, output: &TextBox) -> io::Result<()> {
    buffer.clear();
    editor.render(buffer);
    output.render(buffer);
    present(buffer, &mut io::stdout())
}

fn main() -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let (editor_area, output_area) = layout(session.width(), session.height());

    let mut editor = TextBox::new(editor_area)
        .with_id("editor")
        .with_block(Block::default().with_title("Input (Ctrl+S send, Esc quit)"));
    editor.config_mut().show_cursor = true;

    let mut output = TextBox::new(output_area)
        .with_id("output")
        .with_block(Block::default().with_title("Output"));

    let mut buffer = Buffer::new(session.width(), session.height());

    let (input_tx, input_rx): (Sender<InputEvent>, Receiver<InputEvent>) = bounded(64);
    let (stream_tx, stream_rx) = bounded::<String>(16);
    spawn_input(input_tx);
    spawn_stream(stream_tx);
    let frames = tick(Duration::from_millis(33));

    render(&mut buffer, &editor, &output)?;

    loop {
        select! {
            recv(input_rx) -> event => {
                let Ok(event) = event else { break };
                match &event {
                    InputEvent::Key { code: KeyCode::Esc, .. } => break,
                    InputEvent::Key { code: KeyCode::Char('s'), modifiers } if modifiers.control => {
                        let text = editor.get_text();
                        if !text.is_empty() {
                            output.insert_text(&format!("[>](fg:cyan) {text}\n"));
                            editor.clear_text();
                        }
                    }
                    InputEvent::Key { code: KeyCode::Char('w'), modifiers } if modifiers.control => {
                        let wrap = !output.config().wrap_text;
                        output.config_mut().wrap_text = wrap;
                    }
                    InputEvent::Resize { width, height } => {
                        session.resize(*width, *height);
                        buffer.resize(*width, *height);
                        let (editor_area, output_area) = layout(*width, *height);
                        editor.set_bounds(editor_area);
                        output.set_bounds(output_area);
                    }
                    _ => {
                        editor.handle_input(&event);
                    }
                }
            }
            recv(stream_rx) -> line => {
                if let Ok(line) = line {
                    // No scrollback: start over once the pane is full.
                    if output.line_count() > usize::from(output.inner().height) {
                        output.clear_text();
                    }
                    output.insert_text(&line);
                }
            }
            recv(frames) -> _ => {
                if editor.needs_redraw() || output.needs_redraw() {
                    render(&mut buffer, &editor, &output)?;
                    editor.clear_redraw();
                    output.clear_redraw();
                }
            }
        }
    }

    drop(session);
    Ok(())
}
