//! Process locale setup, shared by every platform.

use std::borrow::Cow;
use std::ffi::CString;

use super::error::StepError;

/// Set `LC_ALL` to the first candidate the C runtime accepts.
///
/// Returns the accepted name. On failure the process locale is unchanged,
/// since `setlocale` leaves it alone when it returns null.
pub(crate) fn set_utf8_locale(candidates: &[Cow<'static, str>]) -> Result<String, StepError> {
    for candidate in candidates {
        let Ok(name) = CString::new(candidate.as_bytes()) else {
            tracing::trace!(locale = %candidate, "Skipping locale name with interior NUL");
            continue;
        };

        // SAFETY: `name` is a valid NUL-terminated string that outlives the
        // call. setlocale mutates process-global state; callers run this once
        // at startup before spawning threads that read the locale.
        let accepted = unsafe { libc::setlocale(libc::LC_ALL, name.as_ptr()) };
        if !accepted.is_null() {
            return Ok(candidate.to_string());
        }
        tracing::trace!(locale = %candidate, "Locale rejected by C runtime");
    }

    Err(StepError::LocaleRejected {
        tried: candidates.iter().map(|c| c.to_string()).collect(),
    })
}
