//! Initialization step errors.

/// Why a single initialization step did not take effect.
///
/// These never escape [`crate::initialize`]; they are recorded in the
/// [`OutputMode`](super::OutputMode) report returned by
/// [`Initializer::run`](super::Initializer::run).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("Standard output handle is not available")]
    HandleUnavailable,

    #[error("Failed to query console mode: {0}")]
    ModeQuery(String),

    #[error("Failed to update console mode: {0}")]
    ModeUpdate(String),

    #[error("Failed to set {which} code page to UTF-8: {message}")]
    CodePage {
        which: &'static str,
        message: String,
    },

    #[error("No UTF-8 locale accepted (tried: {})", .tried.join(", "))]
    LocaleRejected { tried: Vec<String> },
}
