//! Naming mode policy
//!
//! Decides whether generated file and folder names may carry non-ASCII
//! characters. The mode is resolved once at startup and threaded
//! explicitly into the sanitizer and the category mapper; there is no
//! process-global state.

/// Whether generated names may contain non-ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingMode {
    /// Names keep their original (UTF-8) characters.
    Unicode,
    /// Non-ASCII runs are folded away, for non-UTF-8 terminals and
    /// filesystems.
    Ascii,
}

impl NamingMode {
    /// True in ASCII-only mode.
    pub fn is_ascii(self) -> bool {
        matches!(self, NamingMode::Ascii)
    }

    /// Resolve the mode for this run from the explicit override and the
    /// process locale (`LANG`, falling back to `LC_ALL`).
    pub fn detect(ascii_override: bool) -> Self {
        let locale = std::env::var("LANG")
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| std::env::var("LC_ALL").ok().filter(|value| !value.is_empty()));
        if infer_ascii_mode(locale.as_deref(), ascii_override) {
            NamingMode::Ascii
        } else {
            NamingMode::Unicode
        }
    }
}

/// Decide whether ASCII-only naming applies, given a locale value and the
/// explicit override flag.
///
/// Pure so it can be tested without environment manipulation: an absent or
/// empty locale means ASCII, as does any locale whose codeset (the part
/// after the last `.`) is not a UTF-8 variant.
pub fn infer_ascii_mode(locale: Option<&str>, ascii_override: bool) -> bool {
    if ascii_override {
        return true;
    }
    let Some(locale) = locale.filter(|value| !value.is_empty()) else {
        return true;
    };
    let codeset = locale
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase();
    !codeset.contains("UTF-8") && !codeset.contains("UTF8")
}
