//! Normalizer configuration.
//!
//! A configuration is chosen once and then frozen inside the normalizer
//! built from it. It can be assembled in code, through
//! [`NormalizerBuilder`](crate::NormalizerBuilder), or loaded from JSON:
//!
//! ```json
//! {
//!   "script": "mr",
//!   "remove_nuktas": true,
//!   "nasal_mode": "anusvaara-strict",
//!   "fold_chandras": false,
//!   "normalize_vowel_endings": false,
//!   "vowel_ending_policy": "indo-aryan"
//! }
//! ```
//!
//! Every field is optional.

use akshar_core::{NormalizerError, Result, ScriptId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// How nasal consonants before a homorganic consonant are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NasalMode {
    /// Leave nasals untouched
    #[default]
    None,
    /// Nasal + halant before a consonant of the same class becomes anusvaara
    AnusvaaraStrict,
    /// Nasal + halant becomes anusvaara whatever follows
    AnusvaaraRelaxed,
    /// Anusvaara before a consonant becomes the class nasal + halant
    NasalConsonants,
}

impl NasalMode {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::AnusvaaraStrict,
        Self::AnusvaaraRelaxed,
        Self::NasalConsonants,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AnusvaaraStrict => "anusvaara-strict",
            Self::AnusvaaraRelaxed => "anusvaara-relaxed",
            Self::NasalConsonants => "nasal-consonants",
        }
    }
}

impl FromStr for NasalMode {
    type Err = NormalizerError;

    /// Accepts the canonical names and the older underscore spellings
    /// (`do_nothing`, `to_anusvaara_strict`, ...).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "none" | "do-nothing" => Ok(Self::None),
            "anusvaara-strict" | "to-anusvaara-strict" => Ok(Self::AnusvaaraStrict),
            "anusvaara-relaxed" | "to-anusvaara-relaxed" => Ok(Self::AnusvaaraRelaxed),
            "nasal-consonants" | "to-nasal-consonants" => Ok(Self::NasalConsonants),
            _ => Err(NormalizerError::InvalidConfig(format!(
                "unknown nasal mode '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for NasalMode {
    type Error = NormalizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<NasalMode> for String {
    fn from(mode: NasalMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for NasalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker appended to words that end in a bare consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VowelEndingPolicy {
    /// Append halant: the final consonant carries no inherent vowel
    #[default]
    IndoAryan,
    /// Append the AA vowel sign
    Dravidian,
}

impl VowelEndingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndoAryan => "indo-aryan",
            Self::Dravidian => "dravidian",
        }
    }

    /// The usual policy for a language's family.
    pub fn for_script(script: ScriptId) -> Self {
        if script.is_dravidian() {
            Self::Dravidian
        } else {
            Self::IndoAryan
        }
    }
}

impl FromStr for VowelEndingPolicy {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "indo-aryan" | "ie" => Ok(Self::IndoAryan),
            "dravidian" => Ok(Self::Dravidian),
            _ => Err(NormalizerError::InvalidConfig(format!(
                "unknown vowel-ending policy '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for VowelEndingPolicy {
    type Error = NormalizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VowelEndingPolicy> for String {
    fn from(policy: VowelEndingPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl fmt::Display for VowelEndingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for building a normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Language code selecting the script block
    pub script: ScriptId,
    /// Delete nukta marks after decomposition
    pub remove_nuktas: bool,
    /// Nasal handling
    pub nasal_mode: NasalMode,
    /// Fold chandra vowels and chandrabindu into their plain forms
    pub fold_chandras: bool,
    /// Mark words that end in a bare consonant
    pub normalize_vowel_endings: bool,
    /// Marker used when `normalize_vowel_endings` is set
    pub vowel_ending_policy: VowelEndingPolicy,
}

impl NormalizerConfig {
    /// Default configuration for a script.
    pub fn new(script: ScriptId) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| NormalizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
