//! Integration tests for CLI execution using `assert_cmd`.
//!
//! These tests invoke the compiled binary and check its stdout and exit
//! status for each subcommand, including custom tables passed via `--tables`.

use anyhow::{Context, Result, ensure};
use assert_cmd::Command;
use locale_match::locale_resolution::LOCALE_MATCH_LOCALE_ENV;
use predicates::prelude::*;
use test_support::tables_file;

fn locale_match() -> Result<Command> {
    let mut cmd = Command::cargo_bin("locale-match").context("locate locale-match binary")?;
    cmd.env_remove(LOCALE_MATCH_LOCALE_ENV);
    Ok(cmd)
}

#[test]
fn resolve_prints_the_matched_tag() -> Result<()> {
    locale_match()?
        .args(["resolve", "--locale", "zh-CN", "zh-Hans-CN", "en"])
        .assert()
        .success()
        .stdout("zh-Hans-CN\n");
    Ok(())
}

#[test]
fn resolve_reads_the_requested_locale_from_the_environment() -> Result<()> {
    locale_match()?
        .env(LOCALE_MATCH_LOCALE_ENV, "en_GB.UTF-8")
        .args(["resolve", "en-US", "en"])
        .assert()
        .success()
        .stdout("en\n");
    Ok(())
}

#[test]
fn resolve_without_a_match_exits_with_one() -> Result<()> {
    locale_match()?
        .args(["resolve", "--locale", "ja-JP", "en-US"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn resolve_json_reports_every_field() -> Result<()> {
    let output = locale_match()?
        .args(["resolve", "--format", "json", "--locale", "zh-CHT", "zh-HK", "zh-TW"])
        .output()
        .context("run locale-match resolve --format json")?;
    ensure!(output.status.success(), "resolve should succeed");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).context("parse resolve report")?;
    ensure!(report["requested"] == "zh-CHT", "got {report}");
    ensure!(report["source"] == "--locale", "got {report}");
    ensure!(report["normalized"] == "zh-Hant", "got {report}");
    ensure!(report["matched"] == "zh-TW", "got {report}");
    Ok(())
}

#[test]
fn normalize_prints_the_canonical_form() -> Result<()> {
    locale_match()?
        .args(["normalize", "zh-CHS"])
        .assert()
        .success()
        .stdout("zh-Hans\n");
    Ok(())
}

#[test]
fn chain_lists_candidates_in_order() -> Result<()> {
    locale_match()?
        .args(["chain", "zh-Hans-SG"])
        .assert()
        .success()
        .stdout("zh-Hans-SG\nzh-SG\nzh-Hans\nzh-CHS\nzh\n[zh-*]\n");
    Ok(())
}

#[test]
fn custom_tables_change_the_match() -> Result<()> {
    let tables = tables_file("peer_regions:\n  es-ES: [es-MX, es-419]\n")?;
    locale_match()?
        .arg("--tables")
        .arg(tables.path())
        .args(["resolve", "--locale", "es-ES", "es-419", "es-MX"])
        .assert()
        .success()
        .stdout("es-MX\n");
    Ok(())
}

#[test]
fn malformed_tables_exit_with_two() -> Result<()> {
    let tables = tables_file("not_a_table: [1, 2]\n")?;
    locale_match()?
        .arg("--tables")
        .arg(tables.path())
        .args(["normalize", "en"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("command failed"));
    Ok(())
}

#[test]
fn verbose_logging_goes_to_stderr() -> Result<()> {
    locale_match()?
        .args(["--verbose", "resolve", "--locale", "en-GB", "en-US", "en"])
        .assert()
        .success()
        .stdout("en\n")
        .stderr(predicate::str::contains("fallback match"));
    Ok(())
}
