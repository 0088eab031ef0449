//! Enabler for platforms whose terminals interpret ANSI natively.

use crate::init::enabler::{EnablerKind, OutputModeEnabler};
use crate::init::error::StepError;

/// No-op enabler.
///
/// Unix terminals interpret escape sequences without opt-in, and there is
/// no console code page to switch.
#[derive(Debug, Clone, Copy)]
pub struct AlreadyAnsi;

impl AlreadyAnsi {
    /// Create a new AlreadyAnsi enabler.
    pub fn new() -> Self {
        Self
    }
}

impl OutputModeEnabler for AlreadyAnsi {
    fn kind(&self) -> EnablerKind {
        EnablerKind::AlreadyAnsi
    }

    fn is_required(&self) -> bool {
        false
    }

    fn enable_vt_processing(&self) -> Result<(), StepError> {
        Ok(())
    }

    fn set_utf8_code_page(&self) -> Result<(), StepError> {
        Ok(())
    }
}

impl Default for AlreadyAnsi {
    fn default() -> Self {
        Self::new()
    }
}
