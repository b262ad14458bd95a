//! Translation resolution: lookup, miss handling, templating, and markup
//! wrapping.

use crate::markup::contains_markup;
use crate::options::Options;
use crate::template::templater;
use crate::types::{
    Language,
    LocalizedElement,
    TemplateData,
    TranslatedLanguage,
};

/// Resolves `key` against the active language's table.
///
/// A missing translation never fails: the configured observer fires once with
/// `(key, code)` and the fallback message is used instead. The result is
/// wrapped as [`LocalizedElement::Markup`] only when the templated value
/// looks like markup and the `renderInnerHtml` option is enabled.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn localize(
    key: &str,
    translations: &TranslatedLanguage,
    data: &TemplateData,
    active_language: &Language,
    options: &Options,
) -> LocalizedElement {
    // An empty value counts as missing, matching an absent key.
    let resolved = match translations.get(key).filter(|value| !value.is_empty()) {
        Some(value) => value.clone(),
        None => missing_translation(key, active_language, options),
    };

    let templated = templater(&resolved, data);

    if options.render_inner_html && contains_markup(&templated) {
        LocalizedElement::Markup(templated)
    } else {
        LocalizedElement::Text(templated)
    }
}

/// Fires the miss observer and produces the fallback string for `key`.
fn missing_translation(key: &str, active_language: &Language, options: &Options) -> String {
    tracing::debug!(key, code = %active_language.code, "Missing translation");

    if let Some(callback) = &options.missing_translation_callback {
        callback(key, &active_language.code);
    }

    if !options.show_missing_translation_msg {
        return String::new();
    }

    let data = TemplateData::from([
        ("key".to_string(), key.to_string()),
        ("code".to_string(), active_language.code.clone()),
    ]);
    templater(&options.missing_translation_msg, &data)
}
