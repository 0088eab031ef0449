//! The [`Sequence`] value returned by parameterized catalog entries.

use std::borrow::Cow;
use std::fmt;

/// An escape sequence ready to be written to the terminal.
///
/// Fixed catalog entries borrow their `'static` text; parameterized entries
/// own the formatted string. Either way the bytes are exactly what the
/// catalog produced, so two sequences built from the same inputs compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Cow<'static, str>);

impl Sequence {
    /// Wrap a fixed catalog constant without allocating.
    pub const fn fixed(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// The sequence as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The sequence as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume into an owned `String`.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl From<&'static str> for Sequence {
    fn from(text: &'static str) -> Self {
        Self::fixed(text)
    }
}

impl From<String> for Sequence {
    fn from(text: String) -> Self {
        Self(Cow::Owned(text))
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.into_string()
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets any catalog entry go through `crossterm::queue!` / `execute!`.
///
/// The sequence is always written as ANSI text. On Windows this relies on
/// [`crate::initialize`] having enabled virtual terminal processing; there
/// is no WinAPI fallback.
impl crossterm::Command for Sequence {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(&self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "escape sequences require virtual terminal processing",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}
