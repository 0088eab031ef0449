//! What an initialization run did.

use super::enabler::EnablerKind;
use super::error::StepError;

/// Outcome of one initialization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step ran and took effect
    Applied,
    /// The platform does not need this step
    NotRequired,
    /// Turned off in [`Config`](super::Config)
    Disabled,
    /// The step ran and failed; the run carried on
    Failed(StepError),
}

impl StepOutcome {
    /// Whether the desired state holds after the step.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Applied | Self::NotRequired)
    }

    pub(crate) fn from_result(result: Result<(), StepError>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(e) => Self::Failed(e),
        }
    }
}

/// Report of an [`Initializer::run`](super::Initializer::run).
///
/// Two runs in the same environment produce equal reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMode {
    /// Enabler that handled the console steps
    pub enabler: EnablerKind,
    /// Escape-sequence interpretation on standard output
    pub vt_processing: StepOutcome,
    /// UTF-8 console code pages
    pub code_page: StepOutcome,
    /// UTF-8 process locale
    pub locale: StepOutcome,
    /// Locale name the C runtime accepted, if the locale step applied
    pub active_locale: Option<String>,
    /// Whether standard output is attached to a terminal
    pub stdout_is_terminal: bool,
}

impl OutputMode {
    /// Whether escape sequences written to stdout should be interpreted.
    ///
    /// False when stdout is a file or pipe, or when enabling failed.
    pub fn ansi_enabled(&self) -> bool {
        self.stdout_is_terminal && self.vt_processing.is_satisfied()
    }

    /// Whether multi-byte UTF-8 output should display correctly.
    pub fn utf8_enabled(&self) -> bool {
        self.code_page.is_satisfied() && self.locale.is_satisfied()
    }
}
