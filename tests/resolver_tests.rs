//! Behavioural tests for fallback resolution.
//!
//! Scenarios cover exact matches, legacy codes, script and region
//! generalisation, peer regions, and the last-resort policy, followed by
//! properties that must hold for any request.

use anyhow::{Result, ensure};
use locale_match::{Resolver, match_with_fallback};
use locale_match::tables::FallbackTables;
use rstest::rstest;
use test_support::FixedLocaleDatabase;

#[rstest]
#[case::exact("zh-Hans-CN", &["zh-Hans-CN", "en-US"], Some("zh-Hans-CN"))]
#[case::region_code_to_script_region("zh-CN", &["zh-Hans-CN", "en"], Some("zh-Hans-CN"))]
#[case::legacy_code_to_script("zh-CHS", &["zh-Hans", "zh-Hans-CN"], Some("zh-Hans"))]
#[case::script_to_regional_variant("zh-Hans", &["zh-Hans-CN", "zh"], Some("zh-Hans-CN"))]
#[case::traditional_region("zh-TW", &["zh-Hant-TW", "zh-Hant"], Some("zh-Hant-TW"))]
#[case::script_region_to_script("zh-Hans-SG", &["zh-Hans-CN", "zh-Hans"], Some("zh-Hans"))]
#[case::neutral_before_peer("en-GB", &["en-US", "en"], Some("en"))]
#[case::neutral_to_region("fr", &["fr-FR", "en-US"], Some("fr-FR"))]
#[case::no_match("ja-JP", &["en-US"], None)]
#[case::invalid_takes_first("invalid-culture", &["zh-Hans-CN", "en-US"], Some("zh-Hans-CN"))]
#[case::language_to_default_script("zh", &["zh-Hans", "zh-Hant"], Some("zh-Hans"))]
#[case::legacy_region_to_script("zh-HK", &["zh-Hant-MO", "zh-Hant"], Some("zh-Hant"))]
#[case::neutral_takes_first_region("en", &["en-AU", "en-CA"], Some("en-AU"))]
#[case::unregistered_peer_region("es-ES", &["es-MX"], Some("es-MX"))]
#[case::region_to_neutral("ru-RU", &["ru"], Some("ru"))]
#[case::script_region_to_language("zh-Hans-CN", &["zh", "en"], Some("zh"))]
#[case::region_beats_script_when_aliased("zh-CN", &["zh-Hans", "zh-Hans-CN"], Some("zh-Hans-CN"))]
#[case::english_region_to_neutral("en-US", &["en"], Some("en"))]
#[case::empty_request("", &["zh-Hans-CN", "en-US"], None)]
#[case::case_insensitive_exact("ZH-hans-CN", &["zh-Hans-CN"], Some("zh-Hans-CN"))]
#[case::script_before_sibling_region("zh-Hans-CN", &["zh-Hans-SG", "zh-Hans"], Some("zh-Hans"))]
#[case::traditional_direct_region("zh-Hant", &["zh-HK", "zh-TW"], Some("zh-TW"))]
#[case::german_sibling_region("de-DE", &["de-AT", "de-CH"], Some("de-AT"))]
#[case::portuguese_first_region("pt", &["pt-BR", "pt-PT"], Some("pt-BR"))]
#[case::korean_neutral("ko-KR", &["ko"], Some("ko"))]
#[case::registered_peer("en-US", &["en-GB", "fr-FR"], Some("en-GB"))]
#[case::peer_priority("en-AU", &["en-CA", "en-GB"], Some("en-GB"))]
#[case::traditional_legacy_region("zh-Hant", &["zh-HK"], Some("zh-HK"))]
#[case::script_region_to_legacy_code("zh-Hans-CN", &["zh-CN"], Some("zh-CN"))]
#[case::script_to_legacy_code("zh-Hans", &["fr", "zh-CHS"], Some("zh-CHS"))]
#[case::posix_separator("pt_BR", &["pt-PT", "pt-BR"], Some("pt-BR"))]
#[case::unrelated_language("ja-JP", &["en-US", "ko"], None)]
#[case::unparseable_takes_first("en--US", &["de", "fr"], Some("de"))]
#[case::wildcard_takes_first("*", &["en", "fr"], Some("en"))]
#[case::wildcard_region_keeps_language("fr-*", &["en", "fr-FR"], Some("fr-FR"))]
fn resolves_builtin_scenarios(
    #[case] requested: &str,
    #[case] available: &[&str],
    #[case] expected: Option<&str>,
) -> Result<()> {
    let matched = match_with_fallback(requested, available);
    ensure!(
        matched.as_deref() == expected,
        "expected {requested:?} against {available:?} to resolve to {expected:?}, got {matched:?}"
    );
    Ok(())
}

#[rstest]
#[case(&["en", "en-GB"])]
#[case(&["en-GB", "en"])]
fn neutral_preference_ignores_list_order(#[case] available: &[&str]) -> Result<()> {
    let matched = match_with_fallback("en-US", available);
    ensure!(
        matched.as_deref() == Some("en"),
        "expected the neutral culture for {available:?}, got {matched:?}"
    );
    Ok(())
}

#[rstest]
#[case("zh-hans-cn", &["ZH-Hans-CN", "en-US"])]
#[case("EN-us", &["fr", "en-US"])]
#[case("fr-fr", &["fr-FR"])]
fn exact_match_returns_available_spelling(
    #[case] requested: &str,
    #[case] available: &[&str],
) -> Result<()> {
    let matched = match_with_fallback(requested, available);
    let expected = available
        .iter()
        .find(|tag| tag.eq_ignore_ascii_case(requested))
        .copied();
    ensure!(matched.as_deref() == expected, "got {matched:?}");
    Ok(())
}

#[rstest]
#[case("zh-Hant", &["zh-HK", "zh-TW"])]
#[case("en-GB", &["en-US", "en"])]
#[case("fr", &["fr-FR", "en-US"])]
#[case("zh-CN", &["zh-Hans-CN", "en"])]
#[case("pt", &["pt-BR", "pt-PT"])]
fn resolution_is_case_invariant(#[case] requested: &str, #[case] available: &[&str]) -> Result<()> {
    let original = match_with_fallback(requested, available);
    let upper = match_with_fallback(&requested.to_ascii_uppercase(), available);
    let lower = match_with_fallback(&requested.to_ascii_lowercase(), available);
    ensure!(original.is_some(), "{requested} should match {available:?}");
    ensure!(
        original == upper && original == lower,
        "case changed the result for {requested}: {original:?} / {upper:?} / {lower:?}"
    );
    Ok(())
}

#[rstest]
#[case("zh-CHS", "zh-Hans", &["zh-Hans-CN", "zh-Hant"])]
#[case("zh-CHS", "zh-Hans", &["zh", "en"])]
#[case("zh-CHT", "zh-Hant", &["zh-HK", "zh-TW"])]
#[case("zh-CHT", "zh-Hant", &["en-US"])]
fn legacy_codes_resolve_like_their_canonical_form(
    #[case] legacy: &str,
    #[case] canonical: &str,
    #[case] available: &[&str],
) -> Result<()> {
    let via_legacy = match_with_fallback(legacy, available);
    let via_canonical = match_with_fallback(canonical, available);
    ensure!(
        via_legacy == via_canonical,
        "{legacy} resolved to {via_legacy:?} but {canonical} resolved to {via_canonical:?}"
    );
    Ok(())
}

#[rstest]
#[case("en-US")]
#[case("invalid-culture")]
#[case("")]
fn empty_available_set_never_matches(#[case] requested: &str) {
    assert_eq!(match_with_fallback(requested, Vec::<String>::new()), None);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_request_never_matches(#[case] requested: &str) {
    assert_eq!(match_with_fallback(requested, ["en-US", "zh-Hans-CN"]), None);
}

#[test]
fn matches_stay_within_the_requested_language() -> Result<()> {
    let available = ["de-AT", "en-GB", "zh-Hant-TW", "fr"];
    for requested in ["de-DE", "en-US", "zh-HK", "fr-CA", "fr-*", "es-ES", "zh-Hans"] {
        let language = requested.split('-').next().unwrap_or_default();
        if let Some(matched) = match_with_fallback(requested, available) {
            ensure!(
                matched.split('-').next() == Some(language),
                "{requested} resolved to unrelated {matched}"
            );
        }
    }
    Ok(())
}

#[test]
fn custom_database_controls_validity() -> Result<()> {
    let database = FixedLocaleDatabase::new(["en", "en-US", "tlh"]);
    let resolver = Resolver::new(FallbackTables::builtin(), database);

    let klingon = resolver.resolve("TLH", ["fr", "tlh"]);
    ensure!(klingon.as_deref() == Some("tlh"), "got {klingon:?}");

    // Unknown to this database, so the last resort applies.
    let unknown = resolver.resolve("ja-JP", ["fr", "de"]);
    ensure!(unknown.as_deref() == Some("fr"), "got {unknown:?}");

    let known = resolver.resolve("en-US", ["fr", "de"]);
    ensure!(known.is_none(), "valid requests never use the last resort, got {known:?}");
    Ok(())
}

#[test]
fn resolver_accepts_owned_and_borrowed_collections() -> Result<()> {
    let owned: Vec<String> = vec![String::from("fr-FR"), String::from("en-US")];
    let resolver = Resolver::builtin();
    let from_owned = resolver.resolve("fr", owned.iter());
    let from_vec = resolver.resolve("fr", owned);
    ensure!(from_owned == from_vec, "{from_owned:?} != {from_vec:?}");
    ensure!(from_vec.as_deref() == Some("fr-FR"), "got {from_vec:?}");
    Ok(())
}
