//! Cell: The atomic unit of text box content and grid display.
//!
//! A [`StyledCell`] pairs one `char` with a [`Style`]. Cells are small `Copy`
//! values so that lines, wrapped segments and grids can all hold them
//! directly without indirection.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  StyledCell                                  │
//! ├──────────┬───────────────────────────────────┤
//! │  ch      │  style                            │
//! │  char    │  fg: Color │ bg: Color │ Modifiers │
//! └──────────┴───────────────────────────────────┘
//! ```

use bitflags::bitflags;
use std::str::FromStr;
use unicode_width::UnicodeWidthChar;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Reset,
    /// An entry of the 256-color palette (0-7 are the basic ANSI colors).
    Indexed(u8),
    /// A 24-bit color.
    Rgb(Rgb),
}

impl Color {
    /// ANSI black.
    pub const BLACK: Self = Self::Indexed(0);
    /// ANSI red.
    pub const RED: Self = Self::Indexed(1);
    /// ANSI green.
    pub const GREEN: Self = Self::Indexed(2);
    /// ANSI yellow.
    pub const YELLOW: Self = Self::Indexed(3);
    /// ANSI blue.
    pub const BLUE: Self = Self::Indexed(4);
    /// ANSI magenta.
    pub const MAGENTA: Self = Self::Indexed(5);
    /// ANSI cyan.
    pub const CYAN: Self = Self::Indexed(6);
    /// ANSI white.
    pub const WHITE: Self = Self::Indexed(7);
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// Error returned when a color or modifier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleName(pub String);

impl std::fmt::Display for UnknownStyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown style name `{}`", self.0)
    }
}

impl std::error::Error for UnknownStyleName {}

impl FromStr for Color {
    type Err = UnknownStyleName;

    /// Parse a color name, palette index or `#rrggbb` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let color = match name.to_ascii_lowercase().as_str() {
            "clear" | "default" | "reset" => Self::Reset,
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "yellow" => Self::YELLOW,
            "blue" => Self::BLUE,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "white" => Self::WHITE,
            other => {
                if let Some(hex) = other.strip_prefix('#') {
                    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                        return Err(UnknownStyleName(name.to_string()));
                    }
                    let value = u32::from_str_radix(hex, 16)
                        .map_err(|_| UnknownStyleName(name.to_string()))?;
                    Self::Rgb(Rgb::from_u32(value))
                } else {
                    let index = other
                        .parse::<u8>()
                        .map_err(|_| UnknownStyleName(name.to_string()))?;
                    Self::Indexed(index)
                }
            }
        };
        Ok(color)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use textbox::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl FromStr for Modifiers {
    type Err = UnknownStyleName;

    /// Parse one or more modifier names joined with `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Self::empty();
        for name in s.split('|') {
            let name = name.trim();
            modifiers |= match name.to_ascii_lowercase().as_str() {
                "bold" => Self::BOLD,
                "dim" => Self::DIM,
                "italic" => Self::ITALIC,
                "underline" => Self::UNDERLINE,
                "blink" => Self::BLINK,
                "reverse" | "reversed" => Self::REVERSED,
                "hidden" => Self::HIDDEN,
                "strikethrough" => Self::STRIKETHROUGH,
                _ => return Err(UnknownStyleName(name.to_string())),
            };
        }
        Ok(modifiers)
    }
}

/// Rendering attributes for a cell: colors plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text modifiers (bold, italic, etc.).
    pub modifiers: Modifiers,
}

impl Style {
    /// The terminal default style: default colors, no modifiers.
    pub const DEFAULT: Self = Self::new(Color::Reset, Color::Reset, Modifiers::empty());

    /// Create a new style.
    #[inline]
    pub const fn new(fg: Color, bg: Color, modifiers: Modifiers) -> Self {
        Self { fg, bg, modifiers }
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Replace the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add modifiers on top of the existing ones (builder pattern).
    #[inline]
    #[must_use]
    pub const fn add_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }
}

/// One displayable character paired with its rendering style.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyledCell {
    ch: char,
    style: Style,
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl StyledCell {
    /// An empty cell (space character with the default style).
    pub const EMPTY: Self = Self::new(' ', Style::DEFAULT);

    /// Create a new cell.
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// The character displayed by this cell.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// The style of this cell.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Replace the style, keeping the character (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Number of terminal columns this cell occupies.
    ///
    /// Wide CJK characters take 2 columns. Control and zero-width characters
    /// are counted as 1 so that every cell stays addressable.
    #[inline]
    pub fn width(&self) -> usize {
        self.ch.width().unwrap_or(1).max(1)
    }
}

impl std::fmt::Debug for StyledCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledCell")
            .field("ch", &self.ch)
            .field("fg", &self.style.fg)
            .field("bg", &self.style.bg)
            .field("modifiers", &self.style.modifiers)
            .finish()
    }
}
