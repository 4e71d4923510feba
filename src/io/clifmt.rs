//! The CLI formatting system shared by the IO backends and the widgets:
//!
//! - [`Format`], the common ANSI formatting options
//! - [`Text`] and [`Cell`], which apply a `Format` to a string and a `char` respectively
//! - [`text!`][crate::text!] and friends, which construct them tersely
//!
//! `Text` and `Cell` are then used by [`Surface`][super::output::Surface] and the widgets.

/// The color of a piece of formatted text. The numeric values are the ANSI color codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Default = 9,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

impl Default for Color {
    fn default() -> Self {
        Self::Default
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Format {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub underline: bool,
    pub invert: bool,
}

impl Format {
    pub const NONE: Self = Format {
        fg: Color::Default,
        bg: Color::Default,
        bold: false,
        underline: false,
        invert: false,
    };
}

macro_rules! fmt_fn {
    ( $( $name:ident => $field:ident = $val:expr ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self) -> Self {
            self.fmt_mut().$field = $val;
            self
        }
    )* };
}

pub trait Formatted {
    fn fmt(&self) -> &Format;
    fn fmt_mut(&mut self) -> &mut Format;
}

pub trait FormattedExt: Formatted + Sized {
    #[must_use]
    fn fg(mut self, c: Color) -> Self {
        self.fmt_mut().fg = c;
        self
    }
    #[must_use]
    fn bg(mut self, c: Color) -> Self {
        self.fmt_mut().bg = c;
        self
    }
    #[must_use]
    fn fmt_of(mut self, rhs: &dyn Formatted) -> Self {
        *self.fmt_mut() = *rhs.fmt();
        self
    }
    fmt_fn! {
        black => fg = Color::Black,
        red => fg = Color::Red,
        green => fg = Color::Green,
        yellow => fg = Color::Yellow,
        blue => fg = Color::Blue,
        magenta => fg = Color::Magenta,
        cyan => fg = Color::Cyan,
        white => fg = Color::White,
        bright_black => fg = Color::BrightBlack,
        bright_red => fg = Color::BrightRed,
        bright_green => fg = Color::BrightGreen,
        bright_yellow => fg = Color::BrightYellow,
        bright_blue => fg = Color::BrightBlue,
        bright_cyan => fg = Color::BrightCyan,
        bright_white => fg = Color::BrightWhite,
        on_black => bg = Color::Black,
        on_red => bg = Color::Red,
        on_green => bg = Color::Green,
        on_yellow => bg = Color::Yellow,
        on_blue => bg = Color::Blue,
        on_cyan => bg = Color::Cyan,
        on_white => bg = Color::White,
        on_bright_red => bg = Color::BrightRed,
        on_bright_green => bg = Color::BrightGreen,
        on_bright_white => bg = Color::BrightWhite,
        underline => underline = true,
        bold => bold = true,
        invert => invert = true,
    }
}

impl<F: Formatted> FormattedExt for F {}

/// A single run of formatted text. The API is designed to be used through
/// [`text!`][crate::text!] rather than directly.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Text {
    pub text: String,
    fmt: Format,
}

impl Text {
    pub fn of(text: String) -> Self {
        Self {
            text,
            fmt: Format::NONE,
        }
    }

    pub fn plain(s: &str) -> Text {
        Text::of(s.into())
    }

    pub(super) fn with_text(&self, new_text: String) -> Text {
        Text {
            text: new_text,
            fmt: self.fmt,
        }
    }
}

impl Formatted for Text {
    fn fmt(&self) -> &Format {
        &self.fmt
    }
    fn fmt_mut(&mut self) -> &mut Format {
        &mut self.fmt
    }
}

/// A single formatted character; only really meant to exist inside a
/// [`Surface`][super::output::Surface].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fmt: Format,
}

impl Cell {
    pub const BLANK: Cell = Cell::of(' ');

    pub const fn of(ch: char) -> Self {
        Self {
            ch,
            fmt: Format::NONE,
        }
    }
}

impl Formatted for Cell {
    fn fmt(&self) -> &Format {
        &self.fmt
    }
    fn fmt_mut(&mut self) -> &mut Format {
        &mut self.fmt
    }
}

/// Build a single [`Text`]: `text1!(red bold "score: {}"(points))`.
#[macro_export]
macro_rules! text1 {
    (
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ) => {
        {
            #[allow(unused_imports)]
            use $crate::io::clifmt::FormattedExt as _;
            $crate::io::clifmt::Text::of(
                format!( $text $(, $( $arg ),* )? )
            ) $( . $name () )*
        }
    };
}

/// Build a `Vec<Text>` of formatted runs: `text!("plain ", red "and {}"(dyn_part))`.
#[macro_export]
macro_rules! text {
    ( $(
        $( $name:ident )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ),+ $(,)? ) => {
        vec![ $( $crate::text1!( $($name)* $text $(( $($arg),* ))? ) ),+ ]
    };
}
