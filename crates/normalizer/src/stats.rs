//! Invisible-character statistics for corpus auditing.
//!
//! Counting is separate from normalization: callers decide whether and how
//! to report what was found.

use akshar_core::FormatChar;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Occurrence counts of each recognized format character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharStats {
    counts: [usize; FormatChar::ALL.len()],
}

impl CharStats {
    /// Count the format characters in `text`.
    pub fn of(text: &str) -> Self {
        let mut stats = Self::default();
        stats.update(text);
        stats
    }

    /// Add the counts for another chunk of text.
    pub fn update(&mut self, text: &str) {
        for f in text.chars().filter_map(FormatChar::from_char) {
            self.counts[f.index()] += 1;
        }
    }

    /// Merge counts gathered separately.
    pub fn merge(&mut self, other: &Self) {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
    }

    pub fn get(&self, f: FormatChar) -> usize {
        self.counts[f.index()]
    }

    /// Total number of format characters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// No format characters were seen.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Counts in [`FormatChar::ALL`] order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (FormatChar, usize)> + '_ {
        FormatChar::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

impl Serialize for CharStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (f, count) in self.iter() {
            map.serialize_entry(f.name(), &count)?;
        }
        map.end()
    }
}

/// Count the format characters in `text`.
pub fn char_stats(text: &str) -> CharStats {
    CharStats::of(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let stats = char_stats("\u{feff}a\u{200d}b\u{200d}\u{00a0}");
        assert_eq!(stats.get(FormatChar::ByteOrderMark), 1);
        assert_eq!(stats.get(FormatChar::ZeroWidthJoiner), 2);
        assert_eq!(stats.get(FormatChar::NoBreakSpace), 1);
        assert_eq!(stats.get(FormatChar::SoftHyphen), 0);
        assert_eq!(stats.total(), 4);
        assert!(!stats.is_clean());
    }

    #[test]
    fn test_clean_text() {
        assert!(char_stats("नमस्ते दुनिया").is_clean());
        assert!(char_stats("").is_clean());
    }

    #[test]
    fn test_merge() {
        let mut a = char_stats("\u{2060}");
        a.merge(&char_stats("\u{2060}\u{200c}"));
        assert_eq!(a.get(FormatChar::WordJoiner), 2);
        assert_eq!(a.get(FormatChar::ZeroWidthNonJoiner), 1);
    }

    #[test]
    fn test_iter_lists_every_char() {
        let stats = char_stats("\u{fffe}");
        let counts: Vec<_> = stats.iter().collect();
        assert_eq!(counts.len(), 8);
        assert_eq!(counts[1], (FormatChar::ReversedByteOrderMark, 1));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(char_stats("\u{00ad}\u{00ad}")).unwrap();
        assert_eq!(json["soft_hyphen"], 2);
        assert_eq!(json["byte_order_mark"], 0);
    }
}
