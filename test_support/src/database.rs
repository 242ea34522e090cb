//! A locale database with a fixed list of known tags.
//!
//! Lets tests exercise resolution without depending on which identifiers
//! `unic-langid` accepts.

use locale_match::normalizer::LocaleDatabase;

/// Recognises exactly the tags it was built with, ignoring case, and
/// canonicalises them to the spelling given at construction.
#[derive(Debug, Default, Clone)]
pub struct FixedLocaleDatabase {
    known: Vec<String>,
}

impl FixedLocaleDatabase {
    /// Create a database that recognises `known`.
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known.into_iter().map(Into::into).collect(),
        }
    }
}

impl LocaleDatabase for FixedLocaleDatabase {
    fn is_valid(&self, tag: &str) -> bool {
        self.canonicalize(tag).is_some()
    }

    fn canonicalize(&self, tag: &str) -> Option<String> {
        self.known
            .iter()
            .find(|known| known.eq_ignore_ascii_case(tag.trim()))
            .cloned()
    }
}
