//! Static fallback tables consulted while building candidate chains.
//!
//! The built-in tables cover legacy Chinese culture codes, the script/region
//! relationships of Simplified and Traditional Chinese, and peer regions for
//! English. They are initialised once per process and shared by reference;
//! callers needing different data load a YAML document and layer it over the
//! built-ins with [`FallbackTables::merged`].
//!
//! ```yaml
//! legacy_aliases:
//!   sr-SP: sr-Cyrl-RS
//! peer_regions:
//!   es-ES: [es-MX, es-419]
//! ```

mod error;

pub use error::TablesError;

use crate::tag::fold_key;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("zh-CHS", "zh-Hans"),
    ("zh-CHT", "zh-Hant"),
    ("zh-CN", "zh-Hans-CN"),
    ("zh-SG", "zh-Hans-SG"),
    ("zh-TW", "zh-Hant-TW"),
    ("zh-HK", "zh-Hant-HK"),
    ("zh-MO", "zh-Hant-MO"),
];

const SCRIPT_REGIONS: &[(&str, &[&str])] = &[
    ("zh-Hans", &["zh-Hans-CN", "zh-Hans-SG"]),
    ("zh-Hant", &["zh-Hant-TW", "zh-Hant-HK", "zh-Hant-MO"]),
];

const DIRECT_REGIONS: &[(&str, &str)] = &[("zh-Hant", "zh-TW")];

const PEER_REGIONS: &[(&str, &[&str])] = &[
    ("en-US", &["en-GB", "en-CA", "en-AU"]),
    ("en-GB", &["en-US", "en-CA", "en-AU"]),
    ("en-CA", &["en-US", "en-GB", "en-AU"]),
    ("en-AU", &["en-US", "en-GB", "en-CA"]),
];

const DEFAULT_SCRIPTS: &[(&str, &str)] = &[("zh", "zh-Hans")];

static BUILTIN: OnceLock<FallbackTables> = OnceLock::new();

/// An insertion-ordered map keyed by language tag, ignoring ASCII case.
///
/// Keys keep their original casing for display; re-inserting a key under
/// different casing replaces the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable<V> {
    entries: IndexMap<String, (String, V)>,
}

impl<V> Default for TagTable<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> TagTable<V> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let display = key.into();
        self.entries
            .insert(fold_key(&display), (display.trim().to_owned(), value))
            .map(|(_, previous)| previous)
    }

    /// Look up `key` ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold_key(key)).map(|(_, value)| value)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .values()
            .map(|(display, value)| (display.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn extend(&mut self, other: Self) {
        for (display, value) in other.entries.into_values() {
            self.insert(display, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for TagTable<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<'de, V> Deserialize<'de> for TagTable<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, V>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

/// Read-only data driving normalization and candidate generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackTables {
    /// Deprecated or non-standard codes mapped to canonical tags.
    pub legacy_aliases: TagTable<String>,
    /// `language-Script` forms mapped to their regional variants, in priority order.
    pub script_regions: TagTable<Vec<String>>,
    /// `language-Script` forms mapped to a region tag tried before the
    /// regional variants.
    pub direct_regions: TagTable<String>,
    /// `language-Region` tags mapped to sibling regions, in priority order.
    pub peer_regions: TagTable<Vec<String>>,
    /// Bare languages mapped to their default `language-Script` form.
    pub default_scripts: TagTable<String>,
}

fn pairs(entries: &[(&str, &str)]) -> TagTable<String> {
    entries
        .iter()
        .map(|(key, value)| (*key, (*value).to_owned()))
        .collect()
}

fn lists(entries: &[(&str, &[&str])]) -> TagTable<Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| (*key, values.iter().map(|v| (*v).to_owned()).collect()))
        .collect()
}

fn is_blank(tag: &str) -> bool {
    tag.trim().is_empty()
}

impl FallbackTables {
    /// The process-wide built-in tables.
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| Self {
            legacy_aliases: pairs(LEGACY_ALIASES),
            script_regions: lists(SCRIPT_REGIONS),
            direct_regions: pairs(DIRECT_REGIONS),
            peer_regions: lists(PEER_REGIONS),
            default_scripts: pairs(DEFAULT_SCRIPTS),
        })
    }

    /// Parse and validate tables from a YAML document.
    ///
    /// Every key is optional; omitted tables are empty.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Parse`] for malformed YAML or unknown keys and
    /// [`TablesError::BlankTag`] when any tag is blank.
    pub fn from_yaml(src: &str) -> Result<Self, TablesError> {
        let tables: Self = serde_saphyr::from_str(src).map_err(|source| TablesError::Parse {
            source: Box::new(source),
        })?;
        tables.validate()?;
        Ok(tables)
    }

    /// Read tables from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Read`] when the file cannot be read, otherwise
    /// the errors of [`FallbackTables::from_yaml`].
    pub fn load(path: &Path) -> Result<Self, TablesError> {
        let src = std::fs::read_to_string(path).map_err(|source| TablesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_yaml(&src)?;
        debug!(path = %path.display(), "loaded fallback tables");
        Ok(tables)
    }

    /// Layer `overrides` over `self`; entries with the same key are replaced.
    #[must_use]
    pub fn merged(mut self, overrides: Self) -> Self {
        self.legacy_aliases.extend(overrides.legacy_aliases);
        self.script_regions.extend(overrides.script_regions);
        self.direct_regions.extend(overrides.direct_regions);
        self.peer_regions.extend(overrides.peer_regions);
        self.default_scripts.extend(overrides.default_scripts);
        self
    }

    /// Check that no key or value is blank.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::BlankTag`] naming the first offending table.
    pub fn validate(&self) -> Result<(), TablesError> {
        let single = [
            ("legacy_aliases", &self.legacy_aliases),
            ("direct_regions", &self.direct_regions),
            ("default_scripts", &self.default_scripts),
        ];
        for (table, entries) in single {
            if entries
                .iter()
                .any(|(key, value)| is_blank(key) || is_blank(value))
            {
                return Err(TablesError::BlankTag { table });
            }
        }
        let listed = [
            ("script_regions", &self.script_regions),
            ("peer_regions", &self.peer_regions),
        ];
        for (table, entries) in listed {
            if entries
                .iter()
                .any(|(key, values)| is_blank(key) || values.iter().any(|v| is_blank(v)))
            {
                return Err(TablesError::BlankTag { table });
            }
        }
        Ok(())
    }

    /// Canonical tag for a legacy code, ignoring case.
    #[must_use]
    pub fn legacy_alias(&self, tag: &str) -> Option<&str> {
        self.legacy_aliases.get(tag).map(String::as_str)
    }

    /// Legacy codes whose canonical tag is `canonical`, in table order.
    pub fn reverse_aliases<'a>(&'a self, canonical: &'a str) -> impl Iterator<Item = &'a str> {
        self.legacy_aliases
            .iter()
            .filter(move |(_, target)| target.trim().eq_ignore_ascii_case(canonical.trim()))
            .map(|(alias, _)| alias)
    }

    /// Regional variants registered for a `language-Script` form.
    #[must_use]
    pub fn script_regions(&self, script_form: &str) -> &[String] {
        self.script_regions
            .get(script_form)
            .map_or(&[], Vec::as_slice)
    }

    /// Region tag preferred for a `language-Script` form.
    #[must_use]
    pub fn direct_region(&self, script_form: &str) -> Option<&str> {
        self.direct_regions.get(script_form).map(String::as_str)
    }

    /// Sibling regions registered for a `language-Region` tag.
    #[must_use]
    pub fn peer_regions(&self, tag: &str) -> &[String] {
        self.peer_regions.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Default `language-Script` form for a bare language.
    #[must_use]
    pub fn default_script(&self, language: &str) -> Option<&str> {
        self.default_scripts.get(language).map(String::as_str)
    }
}
