//! Language tag values.
//!
//! A [`LanguageTag`] keeps the caller's text for display but compares and
//! hashes by ASCII case folding, so `zh-Hans-CN` and `ZH-hans-cn` are the same
//! tag. Subtag accessors follow the `language[-Script][-Region][-variant...]`
//! shape without validating the subtags against a registry.
//!
//! # Examples
//!
//! ```
//! use locale_match::tag::LanguageTag;
//!
//! let tag = LanguageTag::parse("zh-Hans-CN");
//! assert_eq!(tag.as_ref().map(LanguageTag::language), Some("zh"));
//! assert_eq!(tag.as_ref().and_then(LanguageTag::script), Some("Hans"));
//! assert_eq!(tag.as_ref().and_then(LanguageTag::region), Some("CN"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Fold a tag into the key used for case-insensitive comparison.
///
/// Surrounding whitespace is ignored.
#[must_use]
pub fn fold_key(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(subtag: &str) -> bool {
    match subtag.len() {
        2 => subtag.bytes().all(|b| b.is_ascii_alphabetic()),
        3 => subtag.bytes().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// An immutable locale identifier split on `-` into ordered subtags.
#[derive(Debug, Clone)]
pub struct LanguageTag {
    text: String,
}

impl LanguageTag {
    /// Build a tag from `raw`, trimming surrounding whitespace.
    ///
    /// Returns `None` when the input is blank or contains an empty subtag
    /// (for example `en--US` or a trailing `-`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.split('-').any(str::is_empty) {
            return None;
        }
        Some(Self {
            text: trimmed.to_owned(),
        })
    }

    /// Borrow the tag text exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the subtags in order.
    pub fn subtags(&self) -> impl Iterator<Item = &str> {
        self.text.split('-')
    }

    /// Primary language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.subtags().next().unwrap_or_default()
    }

    /// Script subtag, when the second subtag is four letters.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.subtags().nth(1).filter(|subtag| is_script(subtag))
    }

    /// Region subtag following the language or the script.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        let mut rest = self.subtags().skip(1);
        let first = rest.next()?;
        let candidate = if is_script(first) { rest.next()? } else { first };
        is_region(candidate).then_some(candidate)
    }

    /// Whether the tag holds only a language subtag (a neutral culture).
    #[must_use]
    pub fn is_language_only(&self) -> bool {
        self.subtags().count() == 1
    }

    /// Whether the tag is exactly `language-Script`.
    #[must_use]
    pub fn is_script_form(&self) -> bool {
        self.subtags().count() == 2 && self.script().is_some()
    }

    /// The bare language tag, for example `zh` for `zh-Hant-TW`.
    #[must_use]
    pub fn language_tag(&self) -> Self {
        Self {
            text: self.language().to_owned(),
        }
    }

    /// The `language-Script` parent of a `language-Script-Region` tag.
    #[must_use]
    pub fn script_parent(&self) -> Option<Self> {
        let script = self.script()?;
        self.region()?;
        Some(Self {
            text: format!("{}-{script}", self.language()),
        })
    }

    /// Case-folded form used for comparisons.
    #[must_use]
    pub fn folded(&self) -> String {
        fold_key(&self.text)
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }
}

impl Eq for LanguageTag {}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.text.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
