//! Whitespace normalization for extracted text fragments.
//!
//! Collapsing operates on an explicit whitespace set (space, tab, LF, FF,
//! CR, and the no-break space the parser decodes from `&nbsp;`) and drops
//! zero-width characters entirely. Text inside preserve-whitespace
//! elements bypasses collapsing altogether.

use std::borrow::Cow;

/// Normalizes a raw text fragment.
///
/// With `preserve` set the fragment is returned unchanged (borrowed, no
/// allocation). Otherwise runs of whitespace collapse to at most one
/// space, and `strip_leading` suppresses the space a leading run would
/// otherwise produce.
///
/// Callers derive `strip_leading` from [`last_char_is_space`] on the same
/// fragment.
pub fn normalize(text: &str, preserve: bool, strip_leading: bool) -> Cow<'_, str> {
    if preserve {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(normalize_whitespace(text, strip_leading))
    }
}

/// Collapses whitespace runs in `text` to single spaces.
pub fn normalize_whitespace(text: &str, strip_leading: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_white = false;
    let mut reached_non_white = false;

    for c in text.chars() {
        if is_collapsible_whitespace(c) {
            if (!strip_leading || reached_non_white) && !last_was_white {
                out.push(' ');
                last_was_white = true;
            }
        } else if !is_invisible(c) {
            out.push(c);
            last_was_white = false;
            reached_non_white = true;
        }
    }

    out
}

/// The whitespace set used for collapsing.
///
/// Space, tab, line feed, form feed, carriage return, and no-break space.
/// `char::is_whitespace` is wider (vertical tab, the Unicode space block)
/// and would collapse characters that must pass through untouched.
#[inline]
pub fn is_collapsible_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{000C}' | '\r' | '\u{00A0}')
}

/// Zero-width characters that contribute no glyph and are dropped.
///
/// Zero-width space, zero-width non-joiner, zero-width joiner, and soft
/// hyphen. They do not count as whitespace for collapsing: a run of
/// spaces interrupted by one of these still collapses to a single space.
#[inline]
pub fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{00AD}')
}

/// Whether a fragment's own trailing character is a plain space.
///
/// This drives `strip_leading`: a fragment ending in a literal space
/// likely continues visually without a line break, so its own leading
/// whitespace is not forced into the output as a separating space. It is
/// a per-fragment heuristic, not true inter-node context.
#[inline]
pub fn last_char_is_space(s: &str) -> bool {
    s.ends_with(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello   world", "Hello world")]
    #[case("a\t\n b", "a b")]
    #[case("a\u{00A0}\u{00A0}b", "a b")]
    #[case("a\r\n\u{000C}b", "a b")]
    #[case("plain", "plain")]
    #[case("", "")]
    fn collapses_runs_to_single_space(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_whitespace(input, false), expected);
    }

    #[test]
    fn strip_leading_drops_leading_run() {
        assert_eq!(normalize_whitespace("   abc", true), "abc");
        assert_eq!(normalize_whitespace("   abc", false), " abc");
    }

    #[test]
    fn strip_leading_only_affects_the_leading_run() {
        assert_eq!(normalize_whitespace("  a  b  ", true), "a b ");
        assert_eq!(normalize_whitespace("  a  b  ", false), " a b ");
    }

    #[rstest]
    #[case("   \t\n  ")]
    #[case(" ")]
    #[case("\u{00A0}")]
    fn whitespace_only_input_yields_empty_or_single_space(#[case] input: &str) {
        assert_eq!(normalize_whitespace(input, true), "");
        assert_eq!(normalize_whitespace(input, false), " ");
    }

    #[rstest]
    #[case('\u{200B}')]
    #[case('\u{200C}')]
    #[case('\u{200D}')]
    #[case('\u{00AD}')]
    fn invisible_chars_never_appear(#[case] c: char) {
        let input = format!("a{c}b");
        assert_eq!(normalize_whitespace(&input, false), "ab");
        assert_eq!(normalize_whitespace(&c.to_string(), false), "");
    }

    #[test]
    fn invisible_chars_do_not_break_a_whitespace_run() {
        // The zero-width space between the two spaces must not produce a
        // second collapsed space.
        assert_eq!(normalize_whitespace("a \u{200B} b", false), "a b");
    }

    #[test]
    fn soft_hyphen_is_removed_mid_word() {
        assert_eq!(normalize_whitespace("co\u{00AD}operate", false), "cooperate");
    }

    #[rstest]
    #[case("Hello   world")]
    #[case("  a \u{00A0} b  ")]
    #[case("\t\t")]
    #[case("")]
    fn collapsing_is_idempotent(#[case] input: &str) {
        let once = normalize_whitespace(input, true);
        let twice = normalize_whitespace(&once, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserve_mode_is_identity() {
        let input = "  keep \t me  \n";
        let out = normalize(input, true, false);
        assert_eq!(out, input);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn non_preserve_mode_collapses() {
        let out = normalize("Hello   world", false, false);
        assert_eq!(out, "Hello world");
    }

    #[rstest]
    #[case("ends in space ", true)]
    #[case("no trailing space", false)]
    #[case("tab\t", false)]
    #[case("nbsp\u{00A0}", false)]
    #[case("", false)]
    fn last_char_is_space_checks_plain_space_only(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(last_char_is_space(input), expected);
    }
}
