//! Language selection for localized text fields.
//!
//! Selection is first-match-wins over the ordered variants of a field. There
//! is no negotiation beyond one preferred language and the English fallback.

use bon::Builder;

use crate::types::TextVariant;

/// Language used when no preference is given.
pub const DEFAULT_LANGUAGE: &str = "ja";

/// Language tried when the preferred one has no variant.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Picks the text to display for a localized field.
///
/// Resolution order:
/// 1. First variant in `language`
/// 2. First variant in [`FALLBACK_LANGUAGE`]
/// 3. First variant of any language
/// 4. The empty string
///
/// The empty string is how callers learn a field is absent.
///
/// # Example
///
/// ```
/// use licat::{TextVariant, localize};
///
/// let name = vec![
///     TextVariant::new("en", "Disclose Source"),
///     TextVariant::new("ja", "ソースコードの開示"),
/// ];
/// assert_eq!(localize(&name, "ja"), "ソースコードの開示");
/// assert_eq!(localize(&name, "de"), "Disclose Source");
/// assert_eq!(localize(&[], "ja"), "");
/// ```
pub fn localize<'a>(variants: &'a [TextVariant], language: &str) -> &'a str {
    variants
        .iter()
        .find(|v| v.language == language)
        .or_else(|| variants.iter().find(|v| v.language == FALLBACK_LANGUAGE))
        .or_else(|| variants.first())
        .map_or("", |v| v.text.as_str())
}

/// Carries the preferred language through rendering.
///
/// # Example
///
/// ```
/// use licat::{Localizer, TextVariant};
///
/// let localizer = Localizer::builder().language("en").build();
/// let text = vec![TextVariant::new("ja", "使用"), TextVariant::new("en", "Use")];
/// assert_eq!(localizer.localize(&text), "Use");
/// assert_eq!(localizer.localize_owned(&text), "Use".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Localizer {
    /// Preferred language code.
    #[builder(default = DEFAULT_LANGUAGE.to_string())]
    language: String,
}

impl Default for Localizer {
    fn default() -> Self {
        Localizer::builder().build()
    }
}

impl Localizer {
    /// Create a localizer preferring [`DEFAULT_LANGUAGE`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Localizer::builder().language(language.into()).build()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn localize<'a>(&self, variants: &'a [TextVariant]) -> &'a str {
        localize(variants, &self.language)
    }

    pub fn localize_owned(&self, variants: &[TextVariant]) -> String {
        self.localize(variants).to_string()
    }
}
