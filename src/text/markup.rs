//! Markup tokenizer for inline style markers.
//!
//! Text may carry markers of the form `[text](fg:red,bg:blue,mod:bold)`.
//! [`tokenize`] turns raw input into a flat sequence of [`Token`]s so that
//! the parser can apply styles uniformly, without scanning strings itself.
//!
//! Anything that does not form a complete, valid marker is returned as
//! literal text. Tokenizing never fails.

use crate::buffer::{Color, Modifiers, Style, UnknownStyleName};
use std::str::FromStr;

/// A partial style carried by a marker, applied over a base style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSpec {
    /// Replacement foreground color, if given.
    pub fg: Option<Color>,
    /// Replacement background color, if given.
    pub bg: Option<Color>,
    /// Modifiers added to the base style.
    pub modifiers: Modifiers,
}

impl StyleSpec {
    /// Resolve this spec against `base`.
    pub fn apply(&self, base: Style) -> Style {
        Style {
            fg: self.fg.unwrap_or(base.fg),
            bg: self.bg.unwrap_or(base.bg),
            modifiers: base.modifiers | self.modifiers,
        }
    }
}

impl FromStr for StyleSpec {
    type Err = UnknownStyleName;

    /// Parse a comma separated `key:value` list (`fg`, `bg`, `mod`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(UnknownStyleName(String::new()));
        }

        let mut spec = Self::default();
        for entry in s.split(',') {
            let (key, value) = entry
                .split_once(':')
                .ok_or_else(|| UnknownStyleName(entry.trim().to_string()))?;
            match key.trim() {
                "fg" => spec.fg = Some(value.parse()?),
                "bg" => spec.bg = Some(value.parse()?),
                "mod" => spec.modifiers |= value.parse::<Modifiers>()?,
                other => return Err(UnknownStyleName(other.to_string())),
            }
        }
        Ok(spec)
    }
}

/// One unit of tokenized markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of text drawn in the current style.
    Literal(&'a str),
    /// Switch to the base style with this spec applied.
    Push(StyleSpec),
    /// Return to the base style.
    Pop,
}

/// Split `input` into literal runs and style changes.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        // '[' is ASCII, so a byte match is always a char boundary.
        if bytes[i] == b'[' {
            if let Some(marker) = match_marker(input, i) {
                if literal_start < i {
                    tokens.push(Token::Literal(&input[literal_start..i]));
                }
                tokens.push(Token::Push(marker.spec));
                tokens.push(Token::Literal(marker.text));
                tokens.push(Token::Pop);
                i = marker.end;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&input[literal_start..]));
    }
    tokens
}

struct Marker<'a> {
    text: &'a str,
    spec: StyleSpec,
    /// Byte offset just past the closing `)`.
    end: usize,
}

/// Try to read a complete marker starting at the `[` at `start`.
fn match_marker(input: &str, start: usize) -> Option<Marker<'_>> {
    let body = &input[start + 1..];
    let close = body.find(']')?;
    let text = &body[..close];
    if text.is_empty() || text.contains('[') {
        return None;
    }

    let rest = body[close + 1..].strip_prefix('(')?;
    let paren = rest.find(')')?;
    let spec = rest[..paren].parse().ok()?;

    // '[' + text + ']' + '(' + style + ')'
    let end = start + 1 + close + 2 + paren + 1;
    Some(Marker { text, spec, end })
}
