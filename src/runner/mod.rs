//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the fallback tables, runs the selected command, and writes its
//! output. The locale provider and output sink are injectable so tests can
//! drive commands without touching the process state.

use crate::cli::{Cli, Commands, OutputFormat, ResolveArgs};
use crate::locale_resolution::{HostLocale, LOCALE_MATCH_LOCALE_ENV, LocaleProvider, requested_locale};
use crate::normalizer::{LanguageIdentifierDatabase, LocaleDatabase};
use crate::resolver::Resolver;
use crate::tables::FallbackTables;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Process exit code used when resolution finds no match.
pub const EXIT_NO_MATCH: u8 = 1;
/// Process exit code used when a command fails.
pub const EXIT_ERROR: u8 = 2;

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command produced its result.
    Success,
    /// Resolution ran but nothing suitable was available.
    NoMatch,
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    requested: &'a str,
    source: String,
    normalized: String,
    matched: Option<&'a str>,
}

/// Execute the parsed [`Cli`] against the process environment and stdout.
///
/// # Errors
///
/// Returns an error if the tables file cannot be loaded, no requested locale
/// can be determined, or writing to stdout fails.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let mut stdout = io::stdout().lock();
    run_with(cli, &HostLocale, &mut stdout)
}

/// Execute the parsed [`Cli`] with an injected locale provider and output.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    cli: &Cli,
    locales: &impl LocaleProvider,
    out: &mut impl Write,
) -> Result<Outcome> {
    let tables = load_tables(cli.tables.as_deref())?;
    let resolver = Resolver::new(&tables, LanguageIdentifierDatabase);
    match &cli.command {
        Commands::Resolve(args) => handle_resolve(&resolver, args, locales, out),
        Commands::Normalize { tag } => {
            writeln!(out, "{}", resolver.normalize(tag)).context("write normalized tag")?;
            Ok(Outcome::Success)
        }
        Commands::Chain { tag } => handle_chain(&resolver, tag, out),
    }
}

fn load_tables(path: Option<&Path>) -> Result<Cow<'static, FallbackTables>> {
    let Some(tables_path) = path else {
        return Ok(Cow::Borrowed(FallbackTables::builtin()));
    };
    let custom = FallbackTables::load(tables_path)?;
    info!(path = %tables_path.display(), "using custom fallback tables");
    Ok(Cow::Owned(FallbackTables::builtin().clone().merged(custom)))
}

fn handle_resolve<D: LocaleDatabase>(
    resolver: &Resolver<'_, D>,
    args: &ResolveArgs,
    locales: &impl LocaleProvider,
    out: &mut impl Write,
) -> Result<Outcome> {
    let (requested, source) = requested_locale(args.locale.as_deref(), locales)
        .ok_or_else(|| {
            anyhow!("no requested locale: pass --locale or set {LOCALE_MATCH_LOCALE_ENV}")
        })?;
    debug!(requested = %requested, %source, "selected requested locale");

    let matched = resolver.resolve(&requested, &args.available);
    match args.format {
        OutputFormat::Text => {
            if let Some(tag) = &matched {
                writeln!(out, "{tag}").context("write matched tag")?;
            }
        }
        OutputFormat::Json => {
            let report = ResolveReport {
                requested: &requested,
                source: source.to_string(),
                normalized: resolver.normalize(&requested),
                matched: matched.as_deref(),
            };
            let json = serde_json::to_string(&report).context("serialise resolve report")?;
            writeln!(out, "{json}").context("write resolve report")?;
        }
    }
    Ok(if matched.is_some() {
        Outcome::Success
    } else {
        debug!(requested = %requested, "no available locale matched");
        Outcome::NoMatch
    })
}

fn handle_chain<D: LocaleDatabase>(
    resolver: &Resolver<'_, D>,
    tag: &str,
    out: &mut impl Write,
) -> Result<Outcome> {
    let normalized = resolver.normalize(tag);
    let Some(chain) = resolver.chain(&normalized) else {
        debug!(tag, "tag has no candidates");
        return Ok(Outcome::NoMatch);
    };
    for candidate in &chain {
        writeln!(out, "{candidate}").context("write candidate")?;
    }
    Ok(Outcome::Success)
}
