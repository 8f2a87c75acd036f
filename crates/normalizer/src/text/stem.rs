//! Light suffix-stripping stemmer for Hindi.
//!
//! Removes the longest inflectional suffix from a fixed table, provided at
//! least two characters of the word are left over. No dictionary is
//! consulted.

/// Suffixes grouped by length in characters, longest group first.
const SUFFIXES: [(usize, &[&str]); 5] = [
    (
        5,
        &["ाएंगी", "ाएंगे", "ाऊंगी", "ाऊंगा", "ाइयाँ", "ाइयों", "ाइयां"],
    ),
    (
        4,
        &[
            "ाएगी", "ाएगा", "ाओगी", "ाओगे", "एंगी", "ेंगी", "एंगे", "ेंगे", "ूंगी", "ूंगा", "ातीं",
            "नाओं", "नाएं", "ताओं", "ताएं", "ियाँ", "ियों", "ियां",
        ],
    ),
    (
        3,
        &[
            "ाकर", "ाइए", "ाईं", "ाया", "ेगी", "ेगा", "ोगी", "ोगे", "ाने", "ाना", "ाते", "ाती",
            "ाता", "तीं", "ाओं", "ाएं", "ुओं", "ुएं", "ुआं",
        ],
    ),
    (
        2,
        &[
            "कर", "ाओ", "िए", "ाई", "ाए", "ने", "नी", "ना", "ते", "ीं", "ती", "ता", "ाँ", "ां",
            "ों", "ें",
        ],
    ),
    (1, &["ो", "े", "ू", "ु", "ी", "ि", "ा"]),
];

/// Stem a single word.
pub fn stem(word: &str) -> &str {
    let len = word.chars().count();
    SUFFIXES
        .iter()
        .filter(|(suffix_len, _)| len > suffix_len + 1)
        .find_map(|(_, suffixes)| {
            suffixes
                .iter()
                .find_map(|suffix| word.strip_suffix(suffix))
        })
        .unwrap_or(word)
}

/// Stem every token, keeping order.
pub fn stem_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| stem(t.as_ref()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_suffix_wins() {
        // -एंगे is tried before -े
        assert_eq!(stem("जाएंगे"), "जा");
        assert_eq!(stem("कुर्सियों"), "कुर्स");
    }

    #[test]
    fn test_single_matra() {
        assert_eq!(stem("बच्चे"), "बच्च");
        assert_eq!(stem("किताबें"), "किताब");
    }

    #[test]
    fn test_short_words_kept() {
        // stripping would leave fewer than two characters
        assert_eq!(stem("की"), "की");
        assert_eq!(stem("ने"), "ने");
        assert_eq!(stem("घर"), "घर");
    }

    #[test]
    fn test_stem_tokens() {
        assert_eq!(stem_tokens(&["खेलना", "घर"]), vec!["खेल", "घर"]);
    }
}
