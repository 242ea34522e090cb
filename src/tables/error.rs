//! Error types for loading fallback tables.
//!
//! Kept in its own file so the lint suppression needed by the derive macros
//! stays scoped to this module.

// Scoped suppression for version-dependent lint false positives from
// miette/thiserror derive macros. `#[expect]` fails on toolchains where the
// lint does not fire, so `#[allow]` is required.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating custom fallback tables.
#[derive(Debug, Error, Diagnostic)]
pub enum TablesError {
    /// The tables file could not be read.
    #[error("failed to read fallback tables from {}", path.display())]
    #[diagnostic(code(locale_match::tables::read))]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the table layout.
    #[error("failed to parse fallback tables: {source}")]
    #[diagnostic(
        code(locale_match::tables::parse),
        help("expected a mapping with any of: legacy_aliases, script_regions, direct_regions, peer_regions, default_scripts")
    )]
    Parse {
        /// YAML deserialisation failure.
        #[source]
        source: Box<serde_saphyr::Error>,
    },

    /// A key or value in the named table is blank.
    #[error("table `{table}` contains a blank language tag")]
    #[diagnostic(code(locale_match::tables::blank_tag))]
    BlankTag {
        /// Name of the offending table.
        table: &'static str,
    },
}
