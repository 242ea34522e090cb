//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. It depends
//! only on clap so the build script can include it to render the manual page.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Match language tags against the locales you have translations for.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostic logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML file with fallback tables layered over the built-in tables.
    #[arg(long, value_name = "FILE", global = true)]
    pub tables: Option<PathBuf>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Print the best available tag for the requested locale.
    Resolve(ResolveArgs),

    /// Print the canonical form of a tag.
    Normalize {
        /// Tag to normalize.
        #[arg(value_name = "TAG", allow_hyphen_values = true)]
        tag: String,
    },

    /// Print the fallback candidates probed for a tag, one per line.
    Chain {
        /// Tag whose candidates to list; it is normalized first.
        #[arg(value_name = "TAG", allow_hyphen_values = true)]
        tag: String,
    },
}

/// Arguments accepted by the `resolve` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct ResolveArgs {
    /// Requested locale; defaults to `LOCALE_MATCH_LOCALE`, then the system locale.
    #[arg(short, long, value_name = "LOCALE", allow_hyphen_values = true)]
    pub locale: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Available locales, in preference order for ties.
    #[arg(value_name = "AVAILABLE", required = true)]
    pub available: Vec<String>,
}

/// Output formats for the `resolve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The matched tag on its own line.
    #[default]
    Text,
    /// A JSON object with the request, its normalized form and the match.
    Json,
}
