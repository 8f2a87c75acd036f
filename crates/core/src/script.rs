//! Codepoint-offset table for the Brahmic scripts.
//!
//! The Indic blocks in Unicode share one layout: a letter sits at the same
//! offset from its block's base in every script. Rule tables are therefore
//! written once as offsets and resolved per script through this module.

use crate::error::{NormalizerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offsets shared by the scripts laid out after the ISCII model.
pub mod offsets {
    pub const INVERTED_CHANDRABINDU: u32 = 0x00;
    pub const CHANDRABINDU: u32 = 0x01;
    pub const ANUSVAARA: u32 = 0x02;
    pub const VISARGA: u32 = 0x03;
    pub const NUKTA: u32 = 0x3c;
    pub const AA_MATRA: u32 = 0x3e;
    pub const HALANT: u32 = 0x4d;

    /// First consonant (KA)
    pub const CONSONANT_START: u32 = 0x15;
    /// Last consonant (HA)
    pub const CONSONANT_END: u32 = 0x39;

    /// Last offset inside a script block
    pub const BLOCK_END: u32 = 0x7f;
}

/// A Unicode script block with the shared Indic layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
}

impl Script {
    /// First codepoint of the block.
    pub const fn base(self) -> u32 {
        match self {
            Self::Devanagari => 0x0900,
            Self::Bengali => 0x0980,
            Self::Gurmukhi => 0x0a00,
            Self::Gujarati => 0x0a80,
            Self::Oriya => 0x0b00,
            Self::Tamil => 0x0b80,
            Self::Telugu => 0x0c00,
            Self::Kannada => 0x0c80,
            Self::Malayalam => 0x0d00,
            Self::Sinhala => 0x0d80,
        }
    }

    /// Last codepoint of the block.
    pub const fn end(self) -> u32 {
        self.base() + offsets::BLOCK_END
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Devanagari => "Devanagari",
            Self::Bengali => "Bengali",
            Self::Gurmukhi => "Gurmukhi",
            Self::Gujarati => "Gujarati",
            Self::Oriya => "Oriya",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Kannada => "Kannada",
            Self::Malayalam => "Malayalam",
            Self::Sinhala => "Sinhala",
        }
    }

    /// Offset of `c` from the block base, if `c` lies inside the block.
    pub fn offset_of(self, c: char) -> Option<u32> {
        let cp = c as u32;
        (self.base()..=self.end())
            .contains(&cp)
            .then(|| cp - self.base())
    }

    /// Check whether `c` belongs to this script's block.
    pub fn contains(self, c: char) -> bool {
        self.offset_of(c).is_some()
    }

    /// Resolve an offset to the character at `base + offset`.
    pub fn char_at(self, offset: u32) -> Result<char> {
        if offset > offsets::BLOCK_END {
            return Err(NormalizerError::OffsetOutOfRange {
                offset,
                script: self.name().to_string(),
            });
        }
        char::from_u32(self.base() + offset).ok_or_else(|| NormalizerError::OffsetOutOfRange {
            offset,
            script: self.name().to_string(),
        })
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language code selecting a script block.
///
/// Several languages share a block (Hindi, Marathi and Nepali are all written
/// in Devanagari); the identifier keeps the language so that callers can
/// round-trip the code they configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScriptId {
    #[default]
    Hindi,
    Marathi,
    Konkani,
    Sanskrit,
    Nepali,
    Sindhi,
    Bengali,
    Assamese,
    Punjabi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
}

impl ScriptId {
    pub const ALL: [Self; 16] = [
        Self::Hindi,
        Self::Marathi,
        Self::Konkani,
        Self::Sanskrit,
        Self::Nepali,
        Self::Sindhi,
        Self::Bengali,
        Self::Assamese,
        Self::Punjabi,
        Self::Gujarati,
        Self::Oriya,
        Self::Tamil,
        Self::Telugu,
        Self::Kannada,
        Self::Malayalam,
        Self::Sinhala,
    ];

    /// The language code this identifier parses from.
    pub fn code(self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Marathi => "mr",
            Self::Konkani => "kok",
            Self::Sanskrit => "sa",
            Self::Nepali => "ne",
            Self::Sindhi => "sd",
            Self::Bengali => "bn",
            Self::Assamese => "as",
            Self::Punjabi => "pa",
            Self::Gujarati => "gu",
            Self::Oriya => "or",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Sinhala => "si",
        }
    }

    /// The script block used to write this language.
    pub fn script(self) -> Script {
        match self {
            Self::Hindi
            | Self::Marathi
            | Self::Konkani
            | Self::Sanskrit
            | Self::Nepali
            | Self::Sindhi => Script::Devanagari,
            Self::Bengali | Self::Assamese => Script::Bengali,
            Self::Punjabi => Script::Gurmukhi,
            Self::Gujarati => Script::Gujarati,
            Self::Oriya => Script::Oriya,
            Self::Tamil => Script::Tamil,
            Self::Telugu => Script::Telugu,
            Self::Kannada => Script::Kannada,
            Self::Malayalam => Script::Malayalam,
            Self::Sinhala => Script::Sinhala,
        }
    }

    /// Whether the language belongs to the Dravidian family.
    pub fn is_dravidian(self) -> bool {
        matches!(
            self,
            Self::Tamil | Self::Telugu | Self::Kannada | Self::Malayalam
        )
    }
}

impl FromStr for ScriptId {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.code() == code)
            .ok_or_else(|| NormalizerError::UnsupportedScript(s.to_string()))
    }
}

impl TryFrom<String> for ScriptId {
    type Error = NormalizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ScriptId> for String {
    fn from(id: ScriptId) -> Self {
        id.code().to_string()
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Character at `offset` from the base of `script`'s block.
pub fn offset_to_char(offset: u32, script: ScriptId) -> Result<char> {
    script.script().char_at(offset)
}

/// Check whether `c` is a consonant (KA..HA) of `script`'s block.
pub fn is_consonant(c: char, script: ScriptId) -> bool {
    script
        .script()
        .offset_of(c)
        .is_some_and(|o| (offsets::CONSONANT_START..=offsets::CONSONANT_END).contains(&o))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_char_devanagari() {
        assert_eq!(offset_to_char(0x15, ScriptId::Hindi).unwrap(), '\u{0915}');
        assert_eq!(
            offset_to_char(offsets::HALANT, ScriptId::Marathi).unwrap(),
            '\u{094d}'
        );
    }

    #[test]
    fn test_offset_to_char_shared_layout() {
        // KA sits at the same offset in every block
        assert_eq!(offset_to_char(0x15, ScriptId::Bengali).unwrap(), '\u{0995}');
        assert_eq!(offset_to_char(0x15, ScriptId::Tamil).unwrap(), '\u{0b95}');
        assert_eq!(offset_to_char(0x15, ScriptId::Malayalam).unwrap(), '\u{0d15}');
    }

    #[test]
    fn test_offset_out_of_block() {
        let err = offset_to_char(0x80, ScriptId::Hindi).unwrap_err();
        assert!(matches!(err, NormalizerError::OffsetOutOfRange { offset: 0x80, .. }));
    }

    #[test]
    fn test_is_consonant() {
        assert!(is_consonant('\u{0915}', ScriptId::Hindi)); // KA
        assert!(is_consonant('\u{0939}', ScriptId::Hindi)); // HA
        assert!(!is_consonant('\u{093e}', ScriptId::Hindi)); // AA matra
        assert!(!is_consonant('\u{094d}', ScriptId::Hindi)); // halant
        assert!(!is_consonant('\u{0905}', ScriptId::Hindi)); // independent A
        assert!(!is_consonant('k', ScriptId::Hindi));
    }

    #[test]
    fn test_is_consonant_respects_block() {
        // Bengali KA is not a Devanagari consonant
        assert!(!is_consonant('\u{0995}', ScriptId::Hindi));
        assert!(is_consonant('\u{0995}', ScriptId::Assamese));
    }

    #[test]
    fn test_parse_script_id() {
        assert_eq!("hi".parse::<ScriptId>().unwrap(), ScriptId::Hindi);
        assert_eq!(" MR ".parse::<ScriptId>().unwrap(), ScriptId::Marathi);
        assert_eq!("as".parse::<ScriptId>().unwrap().script(), Script::Bengali);

        let err = "xx".parse::<ScriptId>().unwrap_err();
        assert!(matches!(err, NormalizerError::UnsupportedScript(code) if code == "xx"));
    }

    #[test]
    fn test_codes_round_trip() {
        for id in ScriptId::ALL {
            assert_eq!(id.code().parse::<ScriptId>().unwrap(), id);
        }
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&ScriptId::Punjabi).unwrap();
        assert_eq!(json, "\"pa\"");

        let id: ScriptId = serde_json::from_str("\"ta\"").unwrap();
        assert_eq!(id, ScriptId::Tamil);
        assert!(id.is_dravidian());

        assert!(serde_json::from_str::<ScriptId>("\"klingon\"").is_err());
    }
}
