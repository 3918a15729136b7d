use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// One translation of a human-readable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextVariant {
    /// Language code, e.g. "ja" or "en".
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    /// The translated text. Absent text reads as empty.
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

impl TextVariant {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Ordered translations of one field.
///
/// Duplicated language codes are tolerated; lookups take the first match.
pub type LocalizedText = Vec<TextVariant>;
