//! Test utilities shared by the integration tests.
//!
//! Provides stub locale sources, a fixed locale database, and helpers for
//! writing fallback table files.

pub mod database;
pub mod locale_stubs;

pub use database::FixedLocaleDatabase;
pub use locale_stubs::StubLocales;

use anyhow::{Context, Result};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `yaml` to a temporary file for use with `--tables`.
///
/// The file is removed when the returned handle is dropped.
pub fn tables_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("create tables file")?;
    file.write_all(yaml.as_bytes())
        .context("write tables file")?;
    Ok(file)
}
