//! Tests for localized text selection.

use licat::{DEFAULT_LANGUAGE, Localizer, TextVariant, localize};

fn text(pairs: &[(&str, &str)]) -> Vec<TextVariant> {
    pairs
        .iter()
        .map(|(language, text)| TextVariant::new(*language, *text))
        .collect()
}

// =========================================================================
// Resolution Order
// =========================================================================

#[test]
fn preferred_language_wins() {
    let variants = text(&[("en", "Use"), ("ja", "使用"), ("de", "Nutzung")]);
    assert_eq!(localize(&variants, "ja"), "使用");
    assert_eq!(localize(&variants, "de"), "Nutzung");
}

#[test]
fn english_is_the_fallback() {
    let variants = text(&[("fr", "Utiliser"), ("en", "Use")]);
    assert_eq!(localize(&variants, "ja"), "Use");
}

#[test]
fn first_entry_when_neither_preferred_nor_english() {
    let variants = text(&[("fr", "Utiliser"), ("de", "Nutzung")]);
    assert_eq!(localize(&variants, "ja"), "Utiliser");
}

#[test]
fn empty_variants_give_empty_string() {
    assert_eq!(localize(&[], "ja"), "");
    assert_eq!(localize(&[], "en"), "");
}

#[test]
fn duplicate_languages_take_first_match() {
    let variants = text(&[("ja", "最初"), ("en", "first english"), ("ja", "二番目"), ("en", "second english")]);
    assert_eq!(localize(&variants, "ja"), "最初");
    assert_eq!(localize(&variants, "ko"), "first english");
}

#[test]
fn selected_entry_with_empty_text_is_returned_as_is() {
    let variants = text(&[("ja", ""), ("en", "Use")]);
    assert_eq!(localize(&variants, "ja"), "");
}

#[test]
fn missing_text_field_deserializes_to_empty() {
    let variants: Vec<TextVariant> = serde_json::from_str(r#"[{"language": "ja"}]"#).unwrap();
    assert_eq!(localize(&variants, "ja"), "");
}

// =========================================================================
// Localizer
// =========================================================================

#[test]
fn localizer_defaults_to_japanese() {
    let localizer = Localizer::new();
    assert_eq!(localizer.language(), DEFAULT_LANGUAGE);
    assert_eq!(localizer.language(), "ja");
}

#[test]
fn localizer_builder_sets_language() {
    let localizer = Localizer::builder().language("en").build();
    assert_eq!(localizer.language(), "en");
    assert_eq!(Localizer::with_language("de").language(), "de");
}

#[test]
fn localizer_uses_its_language() {
    let variants = text(&[("ja", "使用"), ("en", "Use")]);
    assert_eq!(Localizer::new().localize(&variants), "使用");
    assert_eq!(Localizer::with_language("en").localize(&variants), "Use");
    assert_eq!(Localizer::with_language("fr").localize_owned(&variants), "Use");
}
