//! OutputModeEnabler trait and enabler identifiers.

use super::error::StepError;

/// Brings a platform's standard output into ANSI-interpreting, UTF-8 mode.
///
/// One implementation exists per platform family; the right one is chosen
/// at compile time by [`platform_enabler`](super::platform::platform_enabler).
/// Implementations must be idempotent: each step sets an absolute state.
pub trait OutputModeEnabler: Send + Sync {
    /// Identifier for this enabler.
    fn kind(&self) -> EnablerKind;

    /// Name for log messages.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether this platform needs explicit enablement at all.
    ///
    /// When false the initializer records the console steps as not required
    /// and never calls them.
    fn is_required(&self) -> bool;

    /// Turn on escape-sequence interpretation for standard output.
    fn enable_vt_processing(&self) -> Result<(), StepError>;

    /// Switch console input and output code pages to UTF-8.
    fn set_utf8_code_page(&self) -> Result<(), StepError>;
}

/// Which enabler handled initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnablerKind {
    /// Windows console API
    WindowsConsole,
    /// Terminals that interpret ANSI natively (Unix ttys, pipes, files)
    AlreadyAnsi,
}

impl EnablerKind {
    /// Enabler name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WindowsConsole => "windows-console",
            Self::AlreadyAnsi => "already-ansi",
        }
    }
}
