//! Platform-specific output mode enablers.

mod ansi;
#[cfg(windows)]
mod windows;

pub use ansi::AlreadyAnsi;
#[cfg(windows)]
pub use windows::WindowsConsole;

use super::enabler::OutputModeEnabler;

/// Get the enabler for the platform this crate was built for.
pub fn platform_enabler() -> Box<dyn OutputModeEnabler> {
    #[cfg(windows)]
    {
        Box::new(WindowsConsole::new())
    }

    #[cfg(not(windows))]
    {
        Box::new(AlreadyAnsi::new())
    }
}
