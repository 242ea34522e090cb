//! Candidate chains for fallback matching.
//!
//! A [`FallbackChain`] describes, for one normalized tag, the ordered list of
//! tags worth probing when the exact tag is unavailable. Candidates run from
//! most to least specific:
//!
//! 1. the tag itself, then any legacy code that aliases it;
//! 2. the `language-Script` parent of a `language-Script-Region` tag and its
//!    legacy codes;
//! 3. for a `language-Script` tag, its preferred region and then each
//!    registered regional variant;
//! 4. the bare language, followed by registered peer regions of a
//!    `language-Region` tag;
//! 5. for a bare language, its default script form and that form's regions;
//! 6. any available tag sharing the primary language;
//! 7. the first available tag, only when the input is not a valid locale.
//!
//! Chains are computed independently of what is available and stage by
//! stage, so a walk that stops at the first hit never builds later stages.
//! Each call to [`FallbackChain::iter`] starts a fresh walk.

use crate::tables::FallbackTables;
use crate::tag::LanguageTag;
use itertools::Itertools;
use std::fmt;
use std::iter;

/// One probe produced by a [`FallbackChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Look up this exact tag.
    Tag(LanguageTag),
    /// Take the first available tag whose primary language is this subtag.
    SameLanguage(String),
    /// Take the first available tag regardless of language.
    FirstAvailable,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::SameLanguage(language) => write!(f, "[{language}-*]"),
            Self::FirstAvailable => f.write_str("[*]"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Requested,
    ScriptParent,
    DirectRegion,
    ScriptRegions,
    Language,
    PeerRegions,
    DefaultScript,
}

const STAGES: [Stage; 7] = [
    Stage::Requested,
    Stage::ScriptParent,
    Stage::DirectRegion,
    Stage::ScriptRegions,
    Stage::Language,
    Stage::PeerRegions,
    Stage::DefaultScript,
];

/// Ordered fallback candidates for one normalized tag.
#[derive(Debug, Clone)]
pub struct FallbackChain<'a> {
    tag: LanguageTag,
    tables: &'a FallbackTables,
    last_resort: bool,
}

impl<'a> FallbackChain<'a> {
    /// Create a chain for `tag` driven by `tables`.
    #[must_use]
    pub const fn new(tag: LanguageTag, tables: &'a FallbackTables) -> Self {
        Self {
            tag,
            tables,
            last_resort: false,
        }
    }

    /// End the chain with [`Candidate::FirstAvailable`] when `enabled`.
    #[must_use]
    pub const fn with_last_resort(mut self, enabled: bool) -> Self {
        self.last_resort = enabled;
        self
    }

    /// The tag the chain was built from.
    #[must_use]
    pub const fn tag(&self) -> &LanguageTag {
        &self.tag
    }

    /// Start a fresh walk over the candidates.
    #[must_use]
    pub fn iter(&self) -> Candidates<'_> {
        // Only tags are deduplicated; a tag spelled like a probe must not
        // suppress the probe.
        let tags = STAGES
            .into_iter()
            .flat_map(move |stage| self.expand(stage))
            .unique_by(LanguageTag::folded)
            .map(Candidate::Tag);
        let probes = iter::once(Candidate::SameLanguage(self.tag.language().to_owned()))
            .chain(self.last_resort.then_some(Candidate::FirstAvailable));
        Candidates {
            inner: Box::new(tags.chain(probes)),
        }
    }

    fn expand(&self, stage: Stage) -> Vec<LanguageTag> {
        let tag = &self.tag;
        match stage {
            Stage::Requested => self.with_aliases(tag.clone()),
            Stage::ScriptParent => tag
                .script_parent()
                .map(|parent| self.with_aliases(parent))
                .unwrap_or_default(),
            Stage::DirectRegion if tag.is_script_form() => self
                .tables
                .direct_region(tag.as_str())
                .and_then(LanguageTag::parse)
                .into_iter()
                .collect(),
            Stage::ScriptRegions if tag.is_script_form() => self.regions_of(tag),
            Stage::Language => vec![tag.language_tag()],
            Stage::PeerRegions if tag.region().is_some() && tag.script().is_none() => self
                .tables
                .peer_regions(tag.as_str())
                .iter()
                .filter_map(|peer| LanguageTag::parse(peer))
                .collect(),
            Stage::DefaultScript if tag.is_language_only() => self
                .tables
                .default_script(tag.as_str())
                .and_then(LanguageTag::parse)
                .map(|script_form| {
                    let mut tags = self.with_aliases(script_form.clone());
                    tags.extend(self.regions_of(&script_form));
                    tags
                })
                .unwrap_or_default(),
            Stage::DirectRegion
            | Stage::ScriptRegions
            | Stage::PeerRegions
            | Stage::DefaultScript => Vec::new(),
        }
    }

    /// `tag` followed by the legacy codes that alias it.
    fn with_aliases(&self, tag: LanguageTag) -> Vec<LanguageTag> {
        let aliases: Vec<LanguageTag> = self
            .tables
            .reverse_aliases(tag.as_str())
            .filter_map(LanguageTag::parse)
            .collect();
        iter::once(tag).chain(aliases).collect()
    }

    fn regions_of(&self, script_form: &LanguageTag) -> Vec<LanguageTag> {
        self.tables
            .script_regions(script_form.as_str())
            .iter()
            .filter_map(|region| LanguageTag::parse(region))
            .flat_map(|region| self.with_aliases(region))
            .collect()
    }
}

impl<'c> IntoIterator for &'c FallbackChain<'_> {
    type Item = Candidate;
    type IntoIter = Candidates<'c>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the candidates of a [`FallbackChain`].
///
/// Never yields the same candidate twice (tags compare ignoring case).
pub struct Candidates<'c> {
    inner: Box<dyn Iterator<Item = Candidate> + 'c>,
}

impl fmt::Debug for Candidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidates").finish_non_exhaustive()
    }
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
