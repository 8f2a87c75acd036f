//! Rule families of the common normalization pass.
//!
//! Every family is compiled once against a script's offsets and then only
//! read while normalizing.

pub mod chandra;
pub mod nasal;
pub mod punctuation;
pub mod vowel_ending;

pub use chandra::ChandraRules;
pub use nasal::NasalRules;
pub use punctuation::{normalize_punctuation, strip_format_chars, PUNCTUATION_RULES};
pub use vowel_ending::VowelEndingRules;

use akshar_core::{NormalizerError, Result};
use regex::Regex;

/// Unicode assignment check for resolved table entries.
///
/// The blocks share offsets but not every block fills every slot: Tamil has
/// no chandra vowels and the Sinhala virama sits at another offset. Entries
/// that resolve to an unassigned codepoint are left out of the compiled
/// rules.
#[derive(Debug)]
pub(crate) struct AssignedChars(Regex);

impl AssignedChars {
    pub(crate) fn new() -> Result<Self> {
        let pattern = r"\p{Unassigned}";
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| NormalizerError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub(crate) fn contains(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        !self.0.is_match(c.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_chars() {
        let assigned = AssignedChars::new().unwrap();
        assert!(assigned.contains('\u{0901}')); // Devanagari candrabindu
        assert!(assigned.contains('\u{0b82}')); // Tamil anusvara
        assert!(!assigned.contains('\u{0b8d}')); // no Tamil chandra E
        assert!(!assigned.contains('\u{0dcd}')); // Sinhala halant slot
    }
}
