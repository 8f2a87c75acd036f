//! Chandra folding.

use super::AssignedChars;
use akshar_core::{offset_to_char, offsets, Result, ScriptId};

/// (chandra form, plain form) offsets.
const CHANDRA_OFFSETS: [(u32, u32); 6] = [
    (0x0d, 0x0f), // chandra E, independent
    (0x11, 0x13), // chandra O, independent
    (0x45, 0x47), // chandra E, dependent
    (0x49, 0x4b), // chandra O, dependent
    (offsets::INVERTED_CHANDRABINDU, offsets::ANUSVAARA),
    (offsets::CHANDRABINDU, offsets::ANUSVAARA),
];

/// Chandra substitutions resolved for one script.
#[derive(Debug, Clone)]
pub struct ChandraRules {
    substitutions: Vec<(char, char)>,
}

impl ChandraRules {
    pub fn compile(script: ScriptId) -> Result<Self> {
        let assigned = AssignedChars::new()?;
        let mut substitutions = Vec::with_capacity(CHANDRA_OFFSETS.len());
        for &(from, to) in &CHANDRA_OFFSETS {
            let (from, to) = (offset_to_char(from, script)?, offset_to_char(to, script)?);
            // blocks without the chandra letters skip those pairs
            if assigned.contains(from) && assigned.contains(to) {
                substitutions.push((from, to));
            }
        }
        Ok(Self { substitutions })
    }

    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                self.substitutions
                    .iter()
                    .find_map(|&(from, to)| (from == c).then_some(to))
                    .unwrap_or(c)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_chandras() {
        let rules = ChandraRules::compile(ScriptId::Hindi).unwrap();
        assert_eq!(rules.len(), 6);
        // ऍ ऑ ॅ ॉ
        assert_eq!(rules.apply("\u{090d}\u{0911}"), "\u{090f}\u{0913}");
        assert_eq!(rules.apply("क\u{0945}क\u{0949}"), "क\u{0947}क\u{094b}");
        // चाँद -> चांद
        assert_eq!(rules.apply("चा\u{0901}द"), "चा\u{0902}द");
        assert_eq!(rules.apply("\u{0900}"), "\u{0902}");
    }

    #[test]
    fn test_resolves_per_script() {
        let rules = ChandraRules::compile(ScriptId::Bengali).unwrap();
        // Bengali chandrabindu -> anusvara
        assert_eq!(rules.apply("\u{0981}"), "\u{0982}");
        // Devanagari text is outside the Bengali block
        assert_eq!(rules.apply("\u{0901}"), "\u{0901}");
    }

    #[test]
    fn test_unassigned_pairs_are_skipped() {
        // Bengali keeps only the two chandrabindu pairs
        assert_eq!(ChandraRules::compile(ScriptId::Bengali).unwrap().len(), 2);

        let tamil = ChandraRules::compile(ScriptId::Tamil).unwrap();
        assert!(tamil.is_empty());
        assert_eq!(tamil.apply("\u{0b8d}தமிழ்"), "\u{0b8d}தமிழ்");
    }
}
