//! Per-language reshaping of the translations table.

use crate::options::Options;
use crate::types::{
    Language,
    TranslatedLanguage,
    Translations,
};

/// Returns the zero-based position of the first language whose code equals
/// `code`, or `None` when the list has no such language.
///
/// Matching is exact string equality; with duplicated codes the first match
/// wins.
#[must_use]
pub fn language_index(code: &str, languages: &[Language]) -> Option<usize> {
    languages.iter().position(|language| language.code == code)
}

/// Projects the parallel-indexed translations table onto a single language.
///
/// With no target language (the "no active language yet" state) the result is
/// empty. A row shorter than the target index contributes no entry; the gap
/// surfaces downstream as a missing translation.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn translations_for_language(
    target: Option<&Language>,
    languages: &[Language],
    translations: &Translations,
) -> TranslatedLanguage {
    let Some(target) = target else {
        return TranslatedLanguage::new();
    };

    let Some(index) = language_index(&target.code, languages) else {
        tracing::debug!(code = %target.code, "Target language is not in the language list");
        return TranslatedLanguage::new();
    };

    translations
        .iter()
        .filter_map(|(key, values)| values.get(index).map(|value| (key.clone(), value.clone())))
        .collect()
}

/// Applies the configured translation transform to raw translation data.
/// Identity when no transform is configured.
#[must_use]
pub fn prepare_translations(translations: Translations, options: &Options) -> Translations {
    match &options.translation_transform {
        Some(transform) => transform(translations),
        None => translations,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// English and French, in that order.
    fn languages() -> Vec<Language> {
        vec![Language::new("en", "English"), Language::new("fr", "French")]
    }

    /// A table with one complete row and one short row.
    fn translations() -> Translations {
        Translations::from([
            ("greeting".to_string(), vec!["Hello".to_string(), "Bonjour".to_string()]),
            ("farewell".to_string(), vec!["Goodbye".to_string()]),
        ])
    }

    #[rstest]
    #[case::first("en", Some(0))]
    #[case::second("fr", Some(1))]
    #[case::absent("de", None)]
    fn language_index_by_code(#[case] code: &str, #[case] expected: Option<usize>) {
        assert_that!(language_index(code, &languages()), eq(expected));
    }

    #[rstest]
    fn language_index_first_match_wins() {
        let languages = vec![
            Language::new("en", "English"),
            Language::new("en", "English (US)"),
        ];

        assert_that!(language_index("en", &languages), some(eq(0)));
    }

    #[rstest]
    fn reshape_extracts_target_language_values() {
        let target = Language::new("fr", "French");

        let table = translations_for_language(Some(&target), &languages(), &translations());

        assert_that!(table.get("greeting").map(String::as_str), some(eq("Bonjour")));
        // The short row has no French value.
        assert_that!(table.get("farewell"), none());
    }

    #[rstest]
    fn reshape_without_target_is_empty() {
        let table = translations_for_language(None, &languages(), &translations());

        assert_that!(table, empty());
    }

    #[rstest]
    fn reshape_with_unknown_target_is_empty() {
        let target = Language::new("de", "German");

        let table = translations_for_language(Some(&target), &languages(), &translations());

        assert_that!(table, empty());
    }

    #[rstest]
    fn prepare_translations_without_transform_is_identity() {
        let options = Options::default();

        let prepared = prepare_translations(translations(), &options);

        assert_that!(prepared, eq(translations()));
    }

    #[rstest]
    fn prepare_translations_applies_transform() {
        let options = Options::default().with_translation_transform(|mut translations| {
            translations.remove("farewell");
            translations
        });

        let prepared = prepare_translations(translations(), &options);

        assert_that!(prepared.contains_key("greeting"), eq(true));
        assert_that!(prepared.contains_key("farewell"), eq(false));
    }
}
