//! Invisible-character cleanup and punctuation canonicalization.
//!
//! Both passes run for every script and every configuration.

use akshar_core::FormatChar;

/// Punctuation variants and their canonical spelling.
///
/// Applied in order, each rule over the whole text before the next, so a
/// later rule sees the output of the earlier ones: `´´` has already become
/// `''` by the time the `''` rule runs.
pub const PUNCTUATION_RULES: &[(&str, &str)] = &[
    ("\u{201e}", "\""),  // „
    ("\u{201c}", "\""),  // “
    ("\u{201d}", "\""),  // ”
    ("\u{2013}", "-"),   // –
    ("\u{2014}", " - "), // —
    ("\u{00b4}", "'"),   // ´
    ("\u{2018}", "'"),   // ‘
    ("\u{201a}", "'"),   // ‚
    ("\u{2019}", "'"),   // ’
    ("''", "\""),
    ("\u{00b4}\u{00b4}", "\""),
    ("\u{2026}", "..."), // …
];

/// Delete format characters and turn space-like ones into a plain space.
pub fn strip_format_chars(text: &str) -> String {
    text.chars()
        .filter_map(|c| match FormatChar::from_char(c) {
            Some(f) if f.is_space_like() => Some(' '),
            Some(_) => None,
            None => Some(c),
        })
        .collect()
}

/// Apply [`PUNCTUATION_RULES`].
pub fn normalize_punctuation(text: &str) -> String {
    PUNCTUATION_RULES
        .iter()
        .fold(text.to_string(), |acc, &(from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_format_chars() {
        let text = "\u{feff}क\u{200d}्ष\u{00ad}a\u{2060}b\u{fffe}\u{200c}";
        assert_eq!(strip_format_chars(text), "क्षab");
    }

    #[test]
    fn test_space_like_become_spaces() {
        assert_eq!(strip_format_chars("a\u{00a0}b\u{200b}c"), "a b c");
    }

    #[test]
    fn test_punctuation_example() {
        let text = "\u{201e}Hello\u{201c}\u{2013}test\u{2026}";
        assert_eq!(normalize_punctuation(text), "\"Hello\"-test...");
    }

    #[test]
    fn test_em_dash_is_spaced() {
        assert_eq!(normalize_punctuation("a\u{2014}b"), "a - b");
    }

    #[test]
    fn test_quote_pairs() {
        assert_eq!(normalize_punctuation("\u{2018}\u{2019}x''"), "\"x\"");
        assert_eq!(normalize_punctuation("\u{00b4}\u{00b4}"), "\"");
        // an odd quote is left over after pairing
        assert_eq!(normalize_punctuation("'''"), "\"'");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "नमस्ते, \"world\" - ok...";
        assert_eq!(normalize_punctuation(text), text);
    }
}
