//! Case-insensitive index over the caller's available tags.

use crate::tag::fold_key;
use indexmap::IndexMap;

/// Lookup from case-folded tag to the tag as the caller spelled it.
///
/// The index remembers caller order. When two available tags differ only by
/// case the first one wins. Blank tags are skipped.
#[derive(Debug, Clone, Default)]
pub struct AvailableTagIndex {
    entries: IndexMap<String, String>,
}

impl AvailableTagIndex {
    /// Build the index in one pass over `tags`.
    pub fn build<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = IndexMap::new();
        for tag in tags {
            let original = tag.as_ref();
            let key = fold_key(original);
            if key.is_empty() {
                continue;
            }
            entries.entry(key).or_insert_with(|| original.to_owned());
        }
        Self { entries }
    }

    /// Original spelling of the available tag equal to `tag` ignoring case.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&str> {
        self.entries.get(&fold_key(tag)).map(String::as_str)
    }

    /// First available tag, in caller order.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, original)| original.as_str())
    }

    /// First available tag, in caller order, whose primary language is
    /// `language`.
    #[must_use]
    pub fn first_with_language(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| {
                key.split(['-', '_'])
                    .next()
                    .is_some_and(|primary| primary.eq_ignore_ascii_case(language))
            })
            .map(|(_, original)| original.as_str())
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no usable tags were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Available tags in caller order, original spelling.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }
}
