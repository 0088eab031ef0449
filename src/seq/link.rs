//! OSC 8 hyperlinks.
//!
//! A link is opened with [`start`], followed by the visible text, and
//! closed with [`END`]. Terminals without OSC 8 support show only the text.

use std::fmt::Display;

use super::Sequence;

/// Close any open hyperlink: OSC 8 with empty parameters and URL.
pub const END: &str = "\x1b]8;;\x1b\\";

/// Open a hyperlink to `url`: `OSC 8 ; ; url ST`.
///
/// The URL is not escaped. One containing `ESC` or `BEL` ends the sequence
/// early.
pub fn start(url: impl Display) -> Sequence {
    Sequence::from(format!("\x1b]8;;{url}\x1b\\"))
}

/// `text` wrapped in a complete hyperlink: [`start`], the text, [`END`].
pub fn wrap(url: impl Display, text: impl Display) -> Sequence {
    Sequence::from(format!("\x1b]8;;{url}\x1b\\{text}{END}"))
}
