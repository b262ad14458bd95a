//! `${name}` placeholder substitution.

use std::sync::OnceLock;

use regex::{
    Captures,
    Regex,
};

use crate::types::TemplateData;

/// Matches a single placeholder: `${name}`, whitespace-tolerant inside the
/// braces.
///
/// Placeholder names are looked up as literal map keys; user-supplied names
/// are never compiled into a pattern, so metacharacters in them are inert.
// The pattern is a literal, so compilation cannot fail.
#[allow(clippy::expect_used)]
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{\s*([^{}\s]+)\s*\}").expect("placeholder pattern is valid")
    })
}

/// Replaces every `${name}` placeholder whose name has a value in `data`.
///
/// Name matching is ASCII case-insensitive. Placeholders without a value are
/// left verbatim so unresolved slots stay visible, and data keys that never
/// appear in the template are ignored. All occurrences of a repeated
/// placeholder are replaced.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn templater(template: &str, data: &TemplateData) -> String {
    if data.is_empty() {
        return template.to_string();
    }

    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            data.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map_or_else(
                || caps.get(0).map_or("", |m| m.as_str()).to_string(),
                |(_, value)| value.clone(),
            )
        })
        .into_owned()
}
