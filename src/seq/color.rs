//! Color sequences: the 16-color palette as constants, 256-color and
//! 24-bit truecolor as builders.

use std::fmt::Display;

use super::Sequence;

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";

pub const FG_BRIGHT_BLACK: &str = "\x1b[90m";
pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_BRIGHT_GREEN: &str = "\x1b[92m";
pub const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
pub const FG_BRIGHT_BLUE: &str = "\x1b[94m";
pub const FG_BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const FG_BRIGHT_CYAN: &str = "\x1b[96m";
pub const FG_BRIGHT_WHITE: &str = "\x1b[97m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_RED: &str = "\x1b[101m";
pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
pub const BG_BRIGHT_YELLOW: &str = "\x1b[103m";
pub const BG_BRIGHT_BLUE: &str = "\x1b[104m";
pub const BG_BRIGHT_MAGENTA: &str = "\x1b[105m";
pub const BG_BRIGHT_CYAN: &str = "\x1b[106m";
pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";

/// Foreground from the 256-color palette: `CSI 38;5;n m`.
///
/// `n` is not range-checked.
pub fn fg_256(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[38;5;{n}m"))
}

/// Background from the 256-color palette: `CSI 48;5;n m`.
pub fn bg_256(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[48;5;{n}m"))
}

/// 24-bit foreground: `CSI 38;2;r;g;b m`.
pub fn fg_rgb(r: impl Display, g: impl Display, b: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[38;2;{r};{g};{b}m"))
}

/// 24-bit background: `CSI 48;2;r;g;b m`.
pub fn bg_rgb(r: impl Display, g: impl Display, b: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[48;2;{r};{g};{b}m"))
}

/// A terminal color, for callers that pick colors at runtime.
///
/// Named hues resolve to the fixed constants above without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
    /// 24-bit RGB
    Rgb(u8, u8, u8),
}

impl Color {
    /// Sequence selecting this color as the foreground.
    pub fn fg(self) -> Sequence {
        let fixed = match self {
            Color::Black => FG_BLACK,
            Color::Red => FG_RED,
            Color::Green => FG_GREEN,
            Color::Yellow => FG_YELLOW,
            Color::Blue => FG_BLUE,
            Color::Magenta => FG_MAGENTA,
            Color::Cyan => FG_CYAN,
            Color::White => FG_WHITE,
            Color::BrightBlack => FG_BRIGHT_BLACK,
            Color::BrightRed => FG_BRIGHT_RED,
            Color::BrightGreen => FG_BRIGHT_GREEN,
            Color::BrightYellow => FG_BRIGHT_YELLOW,
            Color::BrightBlue => FG_BRIGHT_BLUE,
            Color::BrightMagenta => FG_BRIGHT_MAGENTA,
            Color::BrightCyan => FG_BRIGHT_CYAN,
            Color::BrightWhite => FG_BRIGHT_WHITE,
            Color::Indexed(n) => return fg_256(n),
            Color::Rgb(r, g, b) => return fg_rgb(r, g, b),
        };
        Sequence::fixed(fixed)
    }

    /// Sequence selecting this color as the background.
    pub fn bg(self) -> Sequence {
        let fixed = match self {
            Color::Black => BG_BLACK,
            Color::Red => BG_RED,
            Color::Green => BG_GREEN,
            Color::Yellow => BG_YELLOW,
            Color::Blue => BG_BLUE,
            Color::Magenta => BG_MAGENTA,
            Color::Cyan => BG_CYAN,
            Color::White => BG_WHITE,
            Color::BrightBlack => BG_BRIGHT_BLACK,
            Color::BrightRed => BG_BRIGHT_RED,
            Color::BrightGreen => BG_BRIGHT_GREEN,
            Color::BrightYellow => BG_BRIGHT_YELLOW,
            Color::BrightBlue => BG_BRIGHT_BLUE,
            Color::BrightMagenta => BG_BRIGHT_MAGENTA,
            Color::BrightCyan => BG_BRIGHT_CYAN,
            Color::BrightWhite => BG_BRIGHT_WHITE,
            Color::Indexed(n) => return bg_256(n),
            Color::Rgb(r, g, b) => return bg_rgb(r, g, b),
        };
        Sequence::fixed(fixed)
    }
}
