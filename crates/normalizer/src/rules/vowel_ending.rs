//! Word-final vowel-ending normalization.
//!
//! A word that ends in a bare consonant is ambiguous about its final vowel.
//! The Indo-Aryan policy makes the dropped schwa explicit with a halant; the
//! Dravidian policy writes out the AA vowel sign instead.

use super::AssignedChars;
use crate::config::VowelEndingPolicy;
use akshar_core::{is_consonant, offset_to_char, offsets, Result, ScriptId};

#[derive(Debug, Clone)]
pub struct VowelEndingRules {
    script: ScriptId,
    marker: char,
}

impl VowelEndingRules {
    /// Resolve the marker for `script`.
    ///
    /// Returns `None` when the marker's offset is unassigned in the script's
    /// block; no marker is ever appended for such a script.
    pub fn compile(policy: VowelEndingPolicy, script: ScriptId) -> Result<Option<Self>> {
        let offset = match policy {
            VowelEndingPolicy::IndoAryan => offsets::HALANT,
            VowelEndingPolicy::Dravidian => offsets::AA_MATRA,
        };
        let marker = offset_to_char(offset, script)?;
        if !AssignedChars::new()?.contains(marker) {
            return Ok(None);
        }
        Ok(Some(Self { script, marker }))
    }

    /// Character appended to consonant-final words.
    pub fn marker(&self) -> char {
        self.marker
    }

    fn push_word(&self, out: &mut String, word: &str) {
        out.push_str(word);
        if word
            .chars()
            .next_back()
            .is_some_and(|c| is_consonant(c, self.script))
        {
            out.push(self.marker);
        }
    }

    /// Normalize every word, splitting on single spaces.
    ///
    /// Runs of spaces produce empty words, which are kept, so the spacing of
    /// the input is reproduced exactly.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                out.push(' ');
            }
            self.push_word(&mut out, word);
        }
        out
    }
}
