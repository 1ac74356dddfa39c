//! Text box benchmark: Measure streaming insert, markup parsing and draw cost.
//!
//! Target: a full 80x24 draw well under one frame at 60fps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textbox::terminal::output::render_frame;
use textbox::text::parser;
use textbox::{Buffer, Rect, Style, TextBox};

const LOG_LINE: &str = "[INFO](fg:green) request served in [12ms](fg:cyan,mod:bold)\n";

fn filled_textbox(lines: usize, wrap: bool) -> TextBox {
    let mut textbox = TextBox::new(Rect::new(0, 0, 80, 24));
    textbox.config_mut().wrap_text = wrap;
    for _ in 0..lines {
        textbox.insert_text(LOG_LINE);
    }
    textbox
}

fn parse_markup(c: &mut Criterion) {
    c.bench_function("parse_plain_line", |b| {
        b.iter(|| parser::parse(black_box("plain log output without any markers"), Style::DEFAULT))
    });

    c.bench_function("parse_marked_line", |b| {
        b.iter(|| parser::parse(black_box(LOG_LINE), Style::DEFAULT))
    });
}

fn stream_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_insert");

    for lines in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            b.iter(|| black_box(filled_textbox(lines, false)));
        });
    }

    group.finish();
}

fn edit_mid_text(c: &mut Criterion) {
    let mut textbox = filled_textbox(200, false);
    textbox.move_cursor(10, 100);

    c.bench_function("insert_backspace_mid_text", |b| {
        b.iter(|| {
            textbox.insert_text(black_box("x"));
            textbox.backspace();
        });
    });
}

fn draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_80x24");

    for wrap in [false, true] {
        let textbox = filled_textbox(100, wrap);
        let mut buffer = Buffer::new(80, 24);
        group.bench_with_input(BenchmarkId::new("wrap", wrap), &wrap, |b, _| {
            b.iter(|| black_box(textbox.draw(&mut buffer)));
        });
    }

    group.finish();
}

fn present_frame(c: &mut Criterion) {
    let textbox = filled_textbox(30, false);
    let mut buffer = Buffer::new(80, 24);
    textbox.draw(&mut buffer);
    let mut output = Vec::with_capacity(16 * 1024);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            output.clear();
            render_frame(black_box(&buffer), &mut output)
        });
    });
}

criterion_group!(
    benches,
    parse_markup,
    stream_insert,
    edit_mid_text,
    draw,
    present_frame,
);
criterion_main!(benches);
