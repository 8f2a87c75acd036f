//! Nasal consonant / anusvaara canonicalization.
//!
//! Each class nasal written with a halant before a consonant of its own
//! articulatory class is interchangeable with the anusvaara:
//! `गङ्गा` and `गंगा` spell the same word. The rules below are regexes built
//! from offsets, so one table covers every script.

use super::AssignedChars;
use crate::config::NasalMode;
use akshar_core::{offset_to_char, offsets, NormalizerError, Result, ScriptId};
use regex::Regex;

/// A class nasal and the consonant range it assimilates to.
#[derive(Debug, Clone, Copy)]
struct NasalSignature {
    nasal: u32,
    start: u32,
    end: u32,
}

const fn sig(nasal: u32, start: u32, end: u32) -> NasalSignature {
    NasalSignature { nasal, start, end }
}

const SIGNATURES: [NasalSignature; 6] = [
    sig(0x19, 0x15, 0x18), // NGA: velars
    sig(0x1e, 0x1a, 0x1d), // NYA: palatals
    sig(0x23, 0x1f, 0x22), // NNA: retroflexes
    sig(0x28, 0x24, 0x27), // NA: dentals
    sig(0x29, 0x24, 0x27), // NNNA: dentals
    sig(0x2e, 0x2a, 0x2d), // MA: labials
];

fn compile(pattern: String) -> Result<Regex> {
    Regex::new(&pattern).map_err(|e| NormalizerError::InvalidPattern {
        pattern,
        reason: e.to_string(),
    })
}

/// Compiled nasal rules for one mode and script.
#[derive(Debug, Clone)]
pub enum NasalRules {
    Disabled,
    /// `<nasal><halant>(<class consonant>)` -> `<anusvaara>$1`
    ToAnusvaaraStrict {
        patterns: Vec<Regex>,
        replacement: String,
    },
    /// `[<nasals>]<halant>` -> `<anusvaara>`
    ToAnusvaaraRelaxed { pattern: Regex, replacement: String },
    /// `<anusvaara>(<class consonant>)` -> `<nasal><halant>$1`
    ToNasalConsonants(Vec<(Regex, String)>),
}

impl NasalRules {
    pub fn compile(mode: NasalMode, script: ScriptId) -> Result<Self> {
        if mode == NasalMode::None {
            return Ok(Self::Disabled);
        }

        let ch = |offset| offset_to_char(offset, script);
        let halant = ch(offsets::HALANT)?;
        let anusvaara = ch(offsets::ANUSVAARA)?;

        // signatures whose nasal the block does not encode are skipped; a
        // block without halant or anusvaara gets no nasal rules at all
        let assigned = AssignedChars::new()?;
        let mut signatures = Vec::with_capacity(SIGNATURES.len());
        if assigned.contains(halant) && assigned.contains(anusvaara) {
            for s in SIGNATURES {
                if assigned.contains(ch(s.nasal)?) {
                    signatures.push(s);
                }
            }
        }
        if signatures.is_empty() {
            return Ok(Self::Disabled);
        }

        let rules = match mode {
            NasalMode::None => Self::Disabled,
            NasalMode::AnusvaaraStrict => {
                let patterns = signatures
                    .iter()
                    .map(|s| {
                        compile(format!(
                            "{}{}([{}-{}])",
                            ch(s.nasal)?,
                            halant,
                            ch(s.start)?,
                            ch(s.end)?
                        ))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Self::ToAnusvaaraStrict {
                    patterns,
                    replacement: format!("{}${{1}}", anusvaara),
                }
            }
            NasalMode::AnusvaaraRelaxed => {
                let nasals = signatures
                    .iter()
                    .map(|s| ch(s.nasal))
                    .collect::<Result<String>>()?;
                Self::ToAnusvaaraRelaxed {
                    pattern: compile(format!("[{}]{}", nasals, halant))?,
                    replacement: anusvaara.to_string(),
                }
            }
            NasalMode::NasalConsonants => {
                let rules = signatures
                    .iter()
                    .map(|s| {
                        let pattern =
                            compile(format!("{}([{}-{}])", anusvaara, ch(s.start)?, ch(s.end)?))?;
                        Ok((pattern, format!("{}{}${{1}}", ch(s.nasal)?, halant)))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Self::ToNasalConsonants(rules)
            }
        };

        Ok(rules)
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Disabled => text.to_string(),
            Self::ToAnusvaaraStrict {
                patterns,
                replacement,
            } => patterns.iter().fold(text.to_string(), |acc, pattern| {
                pattern.replace_all(&acc, replacement.as_str()).into_owned()
            }),
            Self::ToAnusvaaraRelaxed {
                pattern,
                replacement,
            } => pattern.replace_all(text, replacement.as_str()).into_owned(),
            Self::ToNasalConsonants(rules) => {
                rules
                    .iter()
                    .fold(text.to_string(), |acc, (pattern, replacement)| {
                        pattern.replace_all(&acc, replacement.as_str()).into_owned()
                    })
            }
        }
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::ToAnusvaaraStrict { patterns, .. } => patterns.len(),
            Self::ToAnusvaaraRelaxed { .. } => 1,
            Self::ToNasalConsonants(rules) => rules.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
