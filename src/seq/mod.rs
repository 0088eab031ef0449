//! Escape sequence catalog.
//!
//! Every entry is either a fixed `&'static str` or a small function that
//! interpolates caller-supplied parameters into a fixed template:
//! - [`attr`]: reset and single-attribute SGR toggles
//! - [`color`]: 16-color constants, 256-color and truecolor builders
//! - [`cursor`]: relative cursor movement, save/restore, clearing
//! - [`link`]: OSC 8 hyperlinks
//!
//! Nothing here performs I/O. Callers write the returned text themselves,
//! either directly or through `crossterm::queue!` via [`Sequence`].
//!
//! Parameters are substituted verbatim. A value containing terminator bytes
//! (`m`, `ESC`, `BEL`) produces a malformed sequence; that is the caller's
//! responsibility.

pub mod attr;
pub mod color;
pub mod cursor;
pub mod link;
mod sequence;

pub use color::Color;
pub use sequence::Sequence;

/// Escape character that starts every sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Operating System Command introducer (`ESC ]`).
pub const OSC: &str = "\x1b]";

/// String Terminator (`ESC \`).
pub const ST: &str = "\x1b\\";
