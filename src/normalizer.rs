//! Tag normalization.
//!
//! [`TagNormalizer`] maps a raw tag to its canonical spelling: legacy codes
//! become their modern equivalents via [`FallbackTables`], other tags are
//! canonicalised by a [`LocaleDatabase`], and anything the database rejects is
//! passed through trimmed. Normalization never fails.

use crate::tables::FallbackTables;
use std::str::FromStr;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Source of locale validity and canonical spelling.
pub trait LocaleDatabase {
    /// Whether `tag` names a recognisable locale.
    fn is_valid(&self, tag: &str) -> bool;

    /// Canonical spelling of `tag`, or `None` when it is not recognised.
    fn canonicalize(&self, tag: &str) -> Option<String>;
}

impl<T: LocaleDatabase + ?Sized> LocaleDatabase for &T {
    fn is_valid(&self, tag: &str) -> bool {
        (**self).is_valid(tag)
    }

    fn canonicalize(&self, tag: &str) -> Option<String> {
        (**self).canonicalize(tag)
    }
}

/// Locale database backed by `unic-langid`.
///
/// A tag is accepted when it parses as a language identifier whose language
/// subtag has two or three letters and is not `und`. Longer language subtags
/// are syntactically legal but have no registered languages, so inputs such
/// as `invalid-culture` are rejected.
///
/// # Examples
///
/// ```
/// use locale_match::normalizer::{LanguageIdentifierDatabase, LocaleDatabase};
///
/// let db = LanguageIdentifierDatabase;
/// assert_eq!(db.canonicalize("zh-hans-cn").as_deref(), Some("zh-Hans-CN"));
/// assert_eq!(db.canonicalize("en_us").as_deref(), Some("en-US"));
/// assert!(!db.is_valid("invalid-culture"));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct LanguageIdentifierDatabase;

impl LanguageIdentifierDatabase {
    fn parse(tag: &str) -> Option<LanguageIdentifier> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = LanguageIdentifier::from_str(&trimmed.replace('_', "-")).ok()?;
        let language = id.language.as_str();
        let registered = (2..=3).contains(&language.len()) && language != "und";
        registered.then_some(id)
    }
}

impl LocaleDatabase for LanguageIdentifierDatabase {
    fn is_valid(&self, tag: &str) -> bool {
        Self::parse(tag).is_some()
    }

    fn canonicalize(&self, tag: &str) -> Option<String> {
        Self::parse(tag).map(|id| id.to_string())
    }
}

/// Maps raw tags to canonical form.
#[derive(Debug, Clone, Copy)]
pub struct TagNormalizer<'a, D> {
    tables: &'a FallbackTables,
    database: D,
}

impl<'a, D: LocaleDatabase> TagNormalizer<'a, D> {
    /// Create a normalizer over `tables` and `database`.
    pub const fn new(tables: &'a FallbackTables, database: D) -> Self {
        Self { tables, database }
    }

    /// Normalize `raw`.
    ///
    /// Blank input is returned unchanged. A legacy alias (matched ignoring
    /// case, before or after canonicalization) yields its canonical tag; a
    /// tag the database recognises yields its canonical spelling; anything
    /// else is returned trimmed.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return raw.to_owned();
        }
        if let Some(canonical) = self.tables.legacy_alias(trimmed) {
            debug!(raw = trimmed, canonical, "mapped legacy alias");
            return canonical.to_owned();
        }
        let Some(canonical) = self.database.canonicalize(trimmed) else {
            debug!(raw = trimmed, "unrecognised tag passed through");
            return trimmed.to_owned();
        };
        match self.tables.legacy_alias(&canonical) {
            Some(aliased) => {
                debug!(raw = trimmed, canonical = aliased, "mapped legacy alias");
                aliased.to_owned()
            }
            None => canonical,
        }
    }

    /// Whether the database recognises `tag`.
    #[must_use]
    pub fn is_valid(&self, tag: &str) -> bool {
        self.database.is_valid(tag)
    }
}
