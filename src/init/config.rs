//! Initializer configuration.

use std::borrow::Cow;

/// Locale names tried in order until the C runtime accepts one.
///
/// `.UTF-8` is the Windows UCRT spelling; the others cover glibc, musl and
/// the BSDs.
pub const DEFAULT_LOCALE_CANDIDATES: &[&str] = &[".UTF-8", "C.UTF-8", "en_US.UTF-8"];

/// Which initialization steps to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Turn on escape-sequence interpretation for stdout where the platform
    /// needs it (default: true)
    pub enable_vt_processing: bool,
    /// Switch console input and output code pages to UTF-8 where the
    /// platform has them (default: true)
    pub utf8_code_page: bool,
    /// Set the process locale to a UTF-8 locale (default: true)
    pub set_locale: bool,
    /// Locale names for the locale step, first accepted wins
    pub locale_candidates: Vec<Cow<'static, str>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_vt_processing: true,
            utf8_code_page: true,
            set_locale: true,
            locale_candidates: DEFAULT_LOCALE_CANDIDATES
                .iter()
                .map(|name| Cow::Borrowed(*name))
                .collect(),
        }
    }
}

impl Config {
    /// Replace the locale candidates.
    pub fn with_locales<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.locale_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }
}
