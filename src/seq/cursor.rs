//! Cursor movement and screen clearing.

use std::fmt::Display;

use super::Sequence;

/// Save cursor position (`CSI s`).
pub const SAVE: &str = "\x1b[s";
/// Restore the position saved by [`SAVE`] (`CSI u`).
pub const RESTORE: &str = "\x1b[u";

/// Erase the whole screen (`CSI 2J`). The cursor does not move.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Erase the whole current line (`CSI 2K`).
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Move up `n` rows (`CSI n A`).
pub fn up(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[{n}A"))
}

/// Move down `n` rows (`CSI n B`).
pub fn down(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[{n}B"))
}

/// Move right `n` columns (`CSI n C`).
pub fn forward(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[{n}C"))
}

/// Move left `n` columns (`CSI n D`).
pub fn back(n: impl Display) -> Sequence {
    Sequence::from(format!("\x1b[{n}D"))
}
