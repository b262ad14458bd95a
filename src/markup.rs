//! Heuristic markup detection for resolved translation values.

use std::sync::OnceLock;

use regex::Regex;

/// Matches an HTML element tag (opening, closing, or self-closing, with
/// optional attributes) or a character entity reference.
// The pattern is a literal, so compilation cannot fail.
#[allow(clippy::expect_used)]
fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)</?[a-z][a-z0-9]*(?:\s[^<>]*)?/?>|&[a-z]+;|&#(?:x[0-9a-f]+|[0-9]+);")
            .expect("markup pattern is valid")
    })
}

/// Returns true when `text` contains something that looks like an HTML
/// element tag or an HTML/XML character entity reference.
///
/// This is a pattern check, not a parser: well-formedness is not validated
/// and tag-like plain text can produce false positives.
#[must_use]
pub fn contains_markup(text: &str) -> bool {
    markup_pattern().is_match(text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::element("<b>hi</b>")]
    #[case::closing_only("bye</span>")]
    #[case::self_closing("<br/>")]
    #[case::with_attributes("<img src='x'/>")]
    #[case::uppercase("<DIV>block</DIV>")]
    #[case::named_entity("&amp;")]
    #[case::decimal_entity("line&#10;break")]
    #[case::hex_entity("&#x1F600;")]
    fn detects_markup(#[case] text: &str) {
        assert_that!(contains_markup(text), eq(true));
    }

    #[rstest]
    #[case::plain("hello world")]
    #[case::placeholder("hello ${name}")]
    #[case::lone_ampersand("bread & butter")]
    #[case::comparison("a < b and c > d")]
    #[case::empty("")]
    fn ignores_plain_text(#[case] text: &str) {
        assert_that!(contains_markup(text), eq(false));
    }
}
