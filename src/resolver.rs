//! Best-match resolution of a requested tag against available tags.
//!
//! Resolution runs in a fixed order: an exact match ignoring case, then
//! normalization, then a walk over the normalized tag's [`FallbackChain`].
//! When the request is not a recognisable locale and nothing matched, the
//! first available tag is returned as a last resort. Resolution is pure and
//! never fails; `None` means nothing suitable was available.

use crate::chain::{Candidate, FallbackChain};
use crate::index::AvailableTagIndex;
use crate::normalizer::{LanguageIdentifierDatabase, LocaleDatabase, TagNormalizer};
use crate::tables::FallbackTables;
use crate::tag::LanguageTag;
use tracing::{debug, trace};

/// Resolves requested tags using a set of tables and a locale database.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, D = LanguageIdentifierDatabase> {
    tables: &'a FallbackTables,
    normalizer: TagNormalizer<'a, D>,
}

impl Resolver<'static> {
    /// Resolver over the built-in tables and locale database.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(FallbackTables::builtin(), LanguageIdentifierDatabase)
    }
}

impl<'a, D: LocaleDatabase> Resolver<'a, D> {
    /// Create a resolver over `tables` and `database`.
    pub const fn new(tables: &'a FallbackTables, database: D) -> Self {
        Self {
            tables,
            normalizer: TagNormalizer::new(tables, database),
        }
    }

    /// Normalize a single tag; see [`TagNormalizer::normalize`].
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Candidate chain for an already normalized tag.
    ///
    /// The chain ends with the last-resort marker when `normalized` is not a
    /// valid locale. Returns `None` when `normalized` is blank or has an
    /// empty subtag.
    #[must_use]
    pub fn chain(&self, normalized: &str) -> Option<FallbackChain<'a>> {
        let tag = LanguageTag::parse(normalized)?;
        let valid = self.normalizer.is_valid(normalized);
        Some(FallbackChain::new(tag, self.tables).with_last_resort(!valid))
    }

    /// Best available match for `requested`, preserving the available tag's
    /// spelling.
    pub fn resolve<I, S>(&self, requested: &str, available: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = AvailableTagIndex::build(available);
        if index.is_empty() || requested.trim().is_empty() {
            debug!(requested, "nothing to resolve");
            return None;
        }
        if let Some(exact) = index.lookup(requested) {
            debug!(requested, matched = exact, "exact match");
            return Some(exact.to_owned());
        }

        let normalized = self.normalize(requested);
        if normalized.trim().is_empty() {
            return None;
        }
        debug!(requested, normalized = %normalized, "normalized request");

        let Some(chain) = self.chain(&normalized) else {
            return self.last_resort(&index, &normalized);
        };
        let matched = chain.iter().find_map(|candidate| {
            trace!(%candidate, "probing candidate");
            let hit = match &candidate {
                Candidate::Tag(tag) => index.lookup(tag.as_str()),
                Candidate::SameLanguage(language) => index.first_with_language(language),
                Candidate::FirstAvailable => index.first(),
            };
            hit.map(|found| (candidate, found))
        });
        let Some((candidate, found)) = matched else {
            debug!(requested, "no candidate matched");
            return None;
        };
        debug!(requested, %candidate, matched = found, "fallback match");
        Some(found.to_owned())
    }

    fn last_resort(&self, index: &AvailableTagIndex, normalized: &str) -> Option<String> {
        if self.normalizer.is_valid(normalized) {
            return None;
        }
        let first = index.first()?;
        debug!(normalized, matched = first, "last-resort match");
        Some(first.to_owned())
    }
}

/// Best match for `requested` among `available` using the built-in tables.
///
/// # Examples
///
/// ```
/// use locale_match::match_with_fallback;
///
/// assert_eq!(
///     match_with_fallback("zh-CN", ["zh-Hans-CN", "en"]).as_deref(),
///     Some("zh-Hans-CN")
/// );
/// assert_eq!(match_with_fallback("fr", ["fr-FR", "en-US"]).as_deref(), Some("fr-FR"));
/// assert_eq!(match_with_fallback("ja-JP", ["en-US"]), None);
/// ```
pub fn match_with_fallback<I, S>(requested: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::builtin().resolve(requested, available)
}

/// Canonical form of `tag` using the built-in tables.
///
/// # Examples
///
/// ```
/// use locale_match::normalize;
///
/// assert_eq!(normalize("zh-CHT"), "zh-Hant");
/// assert_eq!(normalize("en_gb"), "en-GB");
/// assert_eq!(normalize(" invalid-culture "), "invalid-culture");
/// ```
#[must_use]
pub fn normalize(tag: &str) -> String {
    Resolver::builtin().normalize(tag)
}
