//! Windows console enabler.
//!
//! Legacy conhost renders escape sequences as raw characters until
//! `ENABLE_VIRTUAL_TERMINAL_PROCESSING` is set on the output handle, and
//! decodes output with the OEM code page until it is switched to UTF-8.

use std::io;

use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
use windows_sys::Win32::Globalization::CP_UTF8;
use windows_sys::Win32::System::Console::{
    GetConsoleMode, GetStdHandle, SetConsoleCP, SetConsoleMode, SetConsoleOutputCP, CONSOLE_MODE,
    ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
};

use crate::init::enabler::{EnablerKind, OutputModeEnabler};
use crate::init::error::StepError;

/// Enables VT processing and UTF-8 code pages through the console API.
#[derive(Debug, Clone, Copy)]
pub struct WindowsConsole;

impl WindowsConsole {
    /// Create a new WindowsConsole enabler.
    pub fn new() -> Self {
        Self
    }
}

impl OutputModeEnabler for WindowsConsole {
    fn kind(&self) -> EnablerKind {
        EnablerKind::WindowsConsole
    }

    fn is_required(&self) -> bool {
        true
    }

    fn enable_vt_processing(&self) -> Result<(), StepError> {
        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        // Null means the process has no stdout (GUI subsystem, detached).
        if handle == INVALID_HANDLE_VALUE || handle.is_null() {
            return Err(StepError::HandleUnavailable);
        }

        let mut mode: CONSOLE_MODE = 0;
        // SAFETY: `handle` came from GetStdHandle and `mode` is a valid out pointer.
        if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
            // Redirected to a file or pipe: not a console, nothing to enable.
            return Err(StepError::ModeQuery(io::Error::last_os_error().to_string()));
        }

        if mode & ENABLE_VIRTUAL_TERMINAL_PROCESSING != 0 {
            return Ok(());
        }

        // SAFETY: same handle as above.
        if unsafe { SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) } == 0 {
            return Err(StepError::ModeUpdate(io::Error::last_os_error().to_string()));
        }
        Ok(())
    }

    fn set_utf8_code_page(&self) -> Result<(), StepError> {
        // Both calls are attempted even if the first fails.
        // SAFETY: plain value arguments.
        let output_ok = unsafe { SetConsoleOutputCP(CP_UTF8) } != 0;
        let output_err = (!output_ok).then(|| io::Error::last_os_error().to_string());
        // SAFETY: plain value arguments.
        let input_ok = unsafe { SetConsoleCP(CP_UTF8) } != 0;

        if let Some(message) = output_err {
            return Err(StepError::CodePage {
                which: "output",
                message,
            });
        }
        if !input_ok {
            return Err(StepError::CodePage {
                which: "input",
                message: io::Error::last_os_error().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for WindowsConsole {
    fn default() -> Self {
        Self::new()
    }
}
