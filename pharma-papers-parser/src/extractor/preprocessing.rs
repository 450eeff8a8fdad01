//! XML cleaning applied before deserialization

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

/// Flatten markup inside `ArticleTitle` and `Affiliation` elements to plain text
///
/// PubMed titles and affiliations can carry any child markup: `<i>`, `<sup>` with
/// attributes, `<sc>`, whole MathML trees. quick-xml's serde deserializer cannot map
/// child elements onto a plain string field, so every tag inside those two elements is
/// removed and its text content is kept. Markup elsewhere in the record is untouched.
pub(super) fn strip_text_field_markup(xml: &str) -> String {
    static TEXT_FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    static ANY_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

    let field_re = TEXT_FIELD_REGEX.get_or_init(|| {
        Regex::new(
            r"(?s)(<(?:ArticleTitle|Affiliation)(?:\s[^>]*[^/>])?>)(.*?)(</(?:ArticleTitle|Affiliation)>)",
        )
        .expect("Failed to compile text field regex")
    });
    let tag_re = ANY_TAG_REGEX
        .get_or_init(|| Regex::new(r"<[^>]*>").expect("Failed to compile markup tag regex"));

    let cleaned = field_re.replace_all(xml, |caps: &Captures| {
        format!(
            "{}{}{}",
            &caps[1],
            tag_re.replace_all(&caps[2], ""),
            &caps[3]
        )
    });

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped markup from text fields"
        );
    }

    cleaned.into_owned()
}
