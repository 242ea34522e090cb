//! Requested-locale selection for the command-line front end.
//!
//! The requested tag comes from `--locale` when supplied, then
//! `LOCALE_MATCH_LOCALE`, and finally the system default. Environment and
//! system values often arrive in POSIX form (`en_US.UTF-8`), so they are
//! cleaned before use; validity is left to the resolver.

use std::fmt;

/// Environment variable name used to supply the requested locale.
pub const LOCALE_MATCH_LOCALE_ENV: &str = "LOCALE_MATCH_LOCALE";

/// The two places a requested locale can come from besides `--locale`.
///
/// Both return the raw value as the host reports it; cleaning happens in
/// [`requested_locale`].
pub trait LocaleProvider {
    /// Raw value of `LOCALE_MATCH_LOCALE`, if set.
    fn env_locale(&self) -> Option<String>;

    /// Raw operating system locale, if known.
    fn system_locale(&self) -> Option<String>;
}

/// Provider reading the process environment and `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct HostLocale;

impl LocaleProvider for HostLocale {
    fn env_locale(&self) -> Option<String> {
        std::env::var(LOCALE_MATCH_LOCALE_ENV).ok()
    }

    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Where the requested locale was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// The `--locale` flag.
    Flag,
    /// The `LOCALE_MATCH_LOCALE` environment variable.
    Environment,
    /// The operating system default.
    System,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "--locale",
            Self::Environment => LOCALE_MATCH_LOCALE_ENV,
            Self::System => "system locale",
        })
    }
}

/// Clean a POSIX-style locale string into tag form.
///
/// Strips encoding suffixes (`.UTF-8`) and modifiers (`@euro`) and replaces
/// underscores with hyphens. The `C` and `POSIX` pseudo-locales carry no
/// language and yield `None`, as does blank input.
///
/// # Examples
///
/// ```rust
/// use locale_match::locale_resolution::clean_posix_locale;
///
/// assert_eq!(clean_posix_locale("en_US.UTF-8"), Some("en-US".to_owned()));
/// assert_eq!(clean_posix_locale("zh-Hant-TW"), Some("zh-Hant-TW".to_owned()));
/// assert_eq!(clean_posix_locale("C.UTF-8"), None);
/// ```
#[must_use]
pub fn clean_posix_locale(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped == "C" || stripped == "POSIX" {
        return None;
    }
    Some(stripped.replace('_', "-"))
}

/// Select the requested locale and report where it came from.
///
/// The flag value is used verbatim (resolution handles blank or malformed
/// input). Environment and system values pass through
/// [`clean_posix_locale`]; unusable values are skipped.
///
/// # Examples
///
/// ```rust
/// use locale_match::locale_resolution::{LocaleProvider, LocaleSource, requested_locale};
///
/// struct SystemOnly(&'static str);
///
/// impl LocaleProvider for SystemOnly {
///     fn env_locale(&self) -> Option<String> {
///         None
///     }
///
///     fn system_locale(&self) -> Option<String> {
///         Some(self.0.to_owned())
///     }
/// }
///
/// let selected = requested_locale(None, &SystemOnly("pt_BR.UTF-8"));
/// assert_eq!(selected, Some(("pt-BR".to_owned(), LocaleSource::System)));
/// assert_eq!(
///     requested_locale(Some("zh-CHS"), &SystemOnly("C")),
///     Some(("zh-CHS".to_owned(), LocaleSource::Flag))
/// );
/// ```
#[must_use]
pub fn requested_locale(
    flag: Option<&str>,
    provider: &impl LocaleProvider,
) -> Option<(String, LocaleSource)> {
    if let Some(value) = flag {
        return Some((value.to_owned(), LocaleSource::Flag));
    }
    let cleaned = |raw: Option<String>, source| {
        raw.as_deref()
            .and_then(clean_posix_locale)
            .map(|locale| (locale, source))
    };
    cleaned(provider.env_locale(), LocaleSource::Environment)
        .or_else(|| cleaned(provider.system_locale(), LocaleSource::System))
}
