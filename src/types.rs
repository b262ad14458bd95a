//! Core types used throughout the crate.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// A language available for selection.
///
/// Identity is the `code` field; `name` is presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Identifier used for lookups (e.g. `"en"`, `"fr"`).
    pub code: String,
    /// Human-readable name (e.g. `"English"`).
    pub name: String,
    /// Whether this language is the currently selected one.
    #[serde(default)]
    pub active: bool,
}

impl Language {
    /// Creates an inactive language.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into(), active: false }
    }
}

/// Translation key → per-language values, parallel to the language list.
///
/// Row length is expected to equal the language-list length but is not
/// enforced; a short row yields an absent value at lookup.
pub type Translations = HashMap<String, Vec<String>>;

/// Translation key → resolved value for a single language.
///
/// Derived from [`Translations`], recomputed whenever the active language
/// changes.
pub type TranslatedLanguage = HashMap<String, String>;

/// Placeholder name → substitution value for the templater.
pub type TemplateData = HashMap<String, String>;

/// Result of resolving a translation key.
///
/// The rendering boundary decides trust handling: `Text` goes through the
/// host framework's normal escaping, `Markup` may be injected verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizedElement {
    /// Plain text; render with default escaping.
    Text(String),
    /// Trusted raw markup. Produced only when the `renderInnerHtml` option is
    /// enabled and the resolved value looks like markup.
    Markup(String),
}

impl LocalizedElement {
    /// The inner string, regardless of trust level.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) | Self::Markup(value) => value,
        }
    }

    /// Returns true for the [`LocalizedElement::Markup`] variant.
    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl std::fmt::Display for LocalizedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
