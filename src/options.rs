//! Translate options and their construction-boundary validation.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::types::Translations;

/// Observer invoked synchronously with `(key, code)` on every
/// missing-translation lookup.
pub type MissingTranslationCallback = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// Hook applied to raw translation data before it is reshaped per language.
pub type TranslationTransform = Arc<dyn Fn(Translations) -> Translations + Send + Sync>;

/// Default template for the missing-translation fallback message.
pub const DEFAULT_MISSING_TRANSLATION_MSG: &str =
    "Missing translation key ${ key } for language ${ code }";

/// Fatal configuration error, raised at validation time and never deferred.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// `translationTransform` carried a value that is not callable.
    #[error(
        "Invalid option 'translationTransform': expected a callable transform, found {found}. \
         Attach the hook with Options::with_translation_transform instead"
    )]
    TransformNotCallable {
        /// JSON type of the offending value.
        found: &'static str,
    },
}

/// Validated translate options.
///
/// Built from an [`OptionsPatch`] via [`validate_options`]; the function
/// hooks are attached programmatically and are callable by construction.
#[derive(Clone)]
pub struct Options {
    /// Render resolved values containing markup as raw HTML instead of
    /// escaped text.
    pub render_inner_html: bool,
    /// Template for the fallback string produced on a missing translation.
    /// Substitution data is `{key, code}`.
    pub missing_translation_msg: String,
    /// When `false`, a missing translation resolves to the empty string.
    pub show_missing_translation_msg: bool,
    /// Language selected when none is active yet.
    pub default_language: Option<String>,
    /// Observer fired once per missing-translation lookup.
    pub missing_translation_callback: Option<MissingTranslationCallback>,
    /// Hook applied to raw translation data before reshaping.
    pub translation_transform: Option<TranslationTransform>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            render_inner_html: false,
            missing_translation_msg: DEFAULT_MISSING_TRANSLATION_MSG.to_string(),
            show_missing_translation_msg: true,
            default_language: None,
            missing_translation_callback: None,
            translation_transform: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("render_inner_html", &self.render_inner_html)
            .field("missing_translation_msg", &self.missing_translation_msg)
            .field("show_missing_translation_msg", &self.show_missing_translation_msg)
            .field("default_language", &self.default_language)
            .field("missing_translation_callback", &self.missing_translation_callback.is_some())
            .field("translation_transform", &self.translation_transform.is_some())
            .finish()
    }
}

impl Options {
    /// Attaches the missing-translation observer.
    #[must_use]
    pub fn with_missing_translation_callback(
        mut self,
        callback: impl Fn(&str, &str) + Send + Sync + 'static,
    ) -> Self {
        self.missing_translation_callback = Some(Arc::new(callback));
        self
    }

    /// Attaches the translation transform hook.
    #[must_use]
    pub fn with_translation_transform(
        mut self,
        transform: impl Fn(Translations) -> Translations + Send + Sync + 'static,
    ) -> Self {
        self.translation_transform = Some(Arc::new(transform));
        self
    }
}

/// Options as supplied by the host over its settings channel, before
/// validation. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    /// See [`Options::render_inner_html`].
    pub render_inner_html: Option<bool>,
    /// See [`Options::missing_translation_msg`].
    pub missing_translation_msg: Option<String>,
    /// See [`Options::show_missing_translation_msg`].
    pub show_missing_translation_msg: Option<bool>,
    /// See [`Options::default_language`].
    pub default_language: Option<String>,
    /// Captured raw so an ill-typed value is observable at validation time.
    /// The real hook can only be attached programmatically.
    pub translation_transform: Option<serde_json::Value>,
}

/// Validates a raw options patch and merges it over the defaults.
///
/// # Errors
/// [`OptionsError::TransformNotCallable`] when the patch carries a
/// `translationTransform` value: JSON has no functions, so whatever arrived
/// there cannot be called.
pub fn validate_options(patch: OptionsPatch) -> Result<Options, OptionsError> {
    if let Some(value) = &patch.translation_transform {
        let found = json_type_name(value);
        tracing::warn!(found, "Rejecting non-callable translationTransform");
        return Err(OptionsError::TransformNotCallable { found });
    }

    let defaults = Options::default();
    Ok(Options {
        render_inner_html: patch.render_inner_html.unwrap_or(defaults.render_inner_html),
        missing_translation_msg: patch
            .missing_translation_msg
            .unwrap_or(defaults.missing_translation_msg),
        show_missing_translation_msg: patch
            .show_missing_translation_msg
            .unwrap_or(defaults.show_missing_translation_msg),
        default_language: patch.default_language,
        missing_translation_callback: None,
        translation_transform: None,
    })
}

/// JSON type name used in validation error messages.
const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
