//! Comment template rendering

/// Placeholder token replaced with the formatted mentions
pub const MENTIONS_PLACEHOLDER: &str = "{{mentions}}";

/// Substitute the mentions string into a comment template
///
/// Only the first occurrence of `{{mentions}}` is replaced. A template
/// without the placeholder passes through unchanged; mentions are never
/// appended.
pub fn render(template: &str, mentions: &str) -> String {
    template.replacen(MENTIONS_PLACEHOLDER, mentions, 1)
}
