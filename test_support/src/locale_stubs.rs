//! Scripted locale provider for tests.
//!
//! [`StubLocales`] answers [`LocaleProvider`] queries from fixed values, so
//! tests can describe the host as it would appear on a real machine:
//! `LOCALE_MATCH_LOCALE` exported or not, and a system locale reported in
//! POSIX form or as the `C` pseudo-locale.

use locale_match::locale_resolution::LocaleProvider;

/// Fixed answers for the environment and the operating system.
///
/// The default reports nothing from either source.
#[derive(Debug, Default, Clone)]
pub struct StubLocales {
    env: Option<String>,
    system: Option<String>,
}

impl StubLocales {
    /// A host with neither source set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Report `value` as the raw `LOCALE_MATCH_LOCALE` contents.
    #[must_use]
    pub fn env(mut self, value: impl Into<String>) -> Self {
        self.env = Some(value.into());
        self
    }

    /// Report `value` as the raw system locale.
    #[must_use]
    pub fn system(mut self, value: impl Into<String>) -> Self {
        self.system = Some(value.into());
        self
    }

    /// Report the system locale for `tag` the way glibc spells it, e.g.
    /// `pt-BR` becomes `pt_BR.UTF-8`.
    #[must_use]
    pub fn posix_system(self, tag: &str) -> Self {
        let posix = format!("{}.UTF-8", tag.replace('-', "_"));
        self.system(posix)
    }

    /// Report the `C` pseudo-locale, as minimal containers do.
    #[must_use]
    pub fn c_system(self) -> Self {
        self.system("C.UTF-8")
    }
}

impl LocaleProvider for StubLocales {
    fn env_locale(&self) -> Option<String> {
        self.env.clone()
    }

    fn system_locale(&self) -> Option<String> {
        self.system.clone()
    }
}
