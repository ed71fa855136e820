//! Preserve-whitespace tag table.

/// Returns true if the tag's content must be rendered with its whitespace
/// verbatim.
///
/// Covers the preformatted-content tags: `pre`, `plaintext`, `title`, and
/// `textarea`. Tag names are expected lowercase, as produced by the HTML
/// tree builder.
pub fn preserves_whitespace(tag: &str) -> bool {
    matches!(tag, "pre" | "plaintext" | "title" | "textarea")
}

/// Returns true if the tag's character content is embedded data rather
/// than visible text.
///
/// `script` and `style` bodies are source code; they never contribute
/// output lines.
pub fn contains_data(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}
