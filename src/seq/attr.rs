//! SGR (Select Graphic Rendition) text attributes.
//!
//! Each constant switches exactly one attribute on or off, except
//! [`RESET`] which clears all of them and [`NO_BOLD_DIM`] which SGR defines
//! as the shared "normal intensity" code for both bold and dim.

/// Reset all attributes and colors (SGR 0).
pub const RESET: &str = "\x1b[0m";

/// Bold, or bright on terminals that render it that way (SGR 1).
pub const BOLD: &str = "\x1b[1m";
/// SGR 2.
pub const DIM: &str = "\x1b[2m";
/// SGR 3.
pub const ITALIC: &str = "\x1b[3m";
/// SGR 4.
pub const UNDERLINE: &str = "\x1b[4m";
/// Swap foreground and background (SGR 7).
pub const REVERSE: &str = "\x1b[7m";
/// SGR 8.
pub const HIDDEN: &str = "\x1b[8m";
/// SGR 9.
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// Normal intensity: clears both bold and dim (SGR 22).
pub const NO_BOLD_DIM: &str = "\x1b[22m";
pub const NO_ITALIC: &str = "\x1b[23m";
pub const NO_UNDERLINE: &str = "\x1b[24m";
pub const NO_REVERSE: &str = "\x1b[27m";
pub const NO_HIDDEN: &str = "\x1b[28m";
pub const NO_STRIKE: &str = "\x1b[29m";

/// Every attribute constant with its SGR code, in code order.
pub const ALL: &[(&str, u8)] = &[
    (RESET, 0),
    (BOLD, 1),
    (DIM, 2),
    (ITALIC, 3),
    (UNDERLINE, 4),
    (REVERSE, 7),
    (HIDDEN, 8),
    (STRIKETHROUGH, 9),
    (NO_BOLD_DIM, 22),
    (NO_ITALIC, 23),
    (NO_UNDERLINE, 24),
    (NO_REVERSE, 27),
    (NO_HIDDEN, 28),
    (NO_STRIKE, 29),
];
