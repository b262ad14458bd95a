//! localize-core
//!
//! React/Redux スタイルの翻訳ストア向けの純粋なローカライズヘルパー群
//!
//! Pure helpers for per-language translation resolution: `${var}` placeholder
//! templating, markup detection, options validation, and reshaping of a
//! parallel-indexed translations table into a per-language lookup.

pub mod markup;
pub mod options;
pub mod resolve;
pub mod table;
pub mod template;
pub mod types;

pub use markup::contains_markup;
pub use options::{
    DEFAULT_MISSING_TRANSLATION_MSG,
    MissingTranslationCallback,
    Options,
    OptionsError,
    OptionsPatch,
    TranslationTransform,
    validate_options,
};
pub use resolve::localize;
pub use table::{
    language_index,
    prepare_translations,
    translations_for_language,
};
pub use template::templater;
pub use types::{
    Language,
    LocalizedElement,
    TemplateData,
    TranslatedLanguage,
    Translations,
};
