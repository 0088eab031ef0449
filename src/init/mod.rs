//! Terminal initialization.
//!
//! [`initialize`] brings standard output into a state where ANSI escape
//! sequences are interpreted and UTF-8 text displays correctly:
//! - Windows consoles get `ENABLE_VIRTUAL_TERMINAL_PROCESSING` and UTF-8
//!   input/output code pages
//! - every platform gets a UTF-8 `LC_ALL` locale
//!
//! Every step is best-effort. Failures are recorded in the [`OutputMode`]
//! report from [`Initializer::run`] and logged at debug level; nothing is
//! ever returned to or raised in the caller.

mod config;
mod enabler;
mod error;
mod locale;
pub mod platform;
mod report;

pub use config::{Config, DEFAULT_LOCALE_CANDIDATES};
pub use enabler::{EnablerKind, OutputModeEnabler};
pub use error::StepError;
pub use platform::platform_enabler;
pub use report::{OutputMode, StepOutcome};

/// Enable ANSI escape processing and UTF-8 output for this process.
///
/// Call once at process start, before writing escape sequences. Calling it
/// again is harmless and leaves the terminal in the same state. Never fails,
/// including when stdout is redirected to a file or pipe.
pub fn initialize() {
    Initializer::default().run();
}

/// Runs the initialization steps with a chosen config and enabler.
pub struct Initializer {
    config: Config,
    enabler: Box<dyn OutputModeEnabler>,
}

impl Initializer {
    /// Create with the platform's enabler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            enabler: platform_enabler(),
        }
    }

    /// Create with a specific enabler (for testing).
    pub fn with_enabler(config: Config, enabler: Box<dyn OutputModeEnabler>) -> Self {
        Self { config, enabler }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the enabler.
    pub fn enabler(&self) -> &dyn OutputModeEnabler {
        self.enabler.as_ref()
    }

    /// Run every enabled step and report what happened.
    ///
    /// A failing step does not stop later ones.
    pub fn run(&self) -> OutputMode {
        let enabler = self.enabler.as_ref();

        let vt_processing = self.console_step(
            self.config.enable_vt_processing,
            "vt_processing",
            || enabler.enable_vt_processing(),
        );
        let code_page = self.console_step(self.config.utf8_code_page, "code_page", || {
            enabler.set_utf8_code_page()
        });

        let (locale, active_locale) = if !self.config.set_locale {
            (StepOutcome::Disabled, None)
        } else {
            match locale::set_utf8_locale(&self.config.locale_candidates) {
                Ok(name) => (StepOutcome::Applied, Some(name)),
                Err(e) => {
                    tracing::debug!(step = "locale", error = %e, "Initialization step failed");
                    (StepOutcome::Failed(e), None)
                }
            }
        };

        let mode = OutputMode {
            enabler: enabler.kind(),
            vt_processing,
            code_page,
            locale,
            active_locale,
            stdout_is_terminal: atty::is(atty::Stream::Stdout),
        };
        tracing::trace!(?mode, "Terminal initialized");
        mode
    }

    fn console_step(
        &self,
        enabled: bool,
        step: &'static str,
        f: impl FnOnce() -> Result<(), StepError>,
    ) -> StepOutcome {
        if !enabled {
            return StepOutcome::Disabled;
        }
        if !self.enabler.is_required() {
            return StepOutcome::NotRequired;
        }

        let outcome = StepOutcome::from_result(f());
        if let StepOutcome::Failed(e) = &outcome {
            tracing::debug!(
                enabler = self.enabler.name(),
                step,
                error = %e,
                "Initialization step failed"
            );
        }
        outcome
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Initializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Initializer")
            .field("config", &self.config)
            .field("enabler", &self.enabler.kind())
            .finish()
    }
}
