//! Substitution tables for the script-specific passes.
//!
//! A profile is plain data. Supporting another script means adding a table
//! here and mapping the script to it in [`ScriptProfile::for_script`].

use akshar_core::Script;

/// Script-specific tables, expressed as offsets from the block base.
#[derive(Debug)]
pub struct ScriptProfile {
    pub script: Script,
    /// Single-character (from, to) substitutions
    pub substitutions: &'static [(u32, u32)],
    /// Precomposed nukta letter -> base consonant
    pub nukta_letters: &'static [(u32, u32)],
    /// Sentence-ending mark that replaces `|`
    pub danda: char,
}

/// DEVANAGARI DANDA, shared by the Brahmic scripts.
const DANDA: char = '\u{0964}';

pub static DEVANAGARI: ScriptProfile = ScriptProfile {
    script: Script::Devanagari,
    substitutions: &[
        (0x72, 0x0f), // Marathi candra A -> E
    ],
    nukta_letters: &[
        (0x29, 0x28), // NNNA
        (0x31, 0x30), // RRA
        (0x34, 0x33), // LLLA
        (0x58, 0x15), // QA
        (0x59, 0x16), // KHHA
        (0x5a, 0x17), // GHHA
        (0x5b, 0x1c), // ZA
        (0x5c, 0x21), // DDDHA
        (0x5d, 0x22), // RHA
        (0x5e, 0x2b), // FA
        (0x5f, 0x2f), // YYA
    ],
    danda: DANDA,
};

pub static BENGALI: ScriptProfile = ScriptProfile {
    script: Script::Bengali,
    substitutions: &[],
    nukta_letters: &[
        (0x5c, 0x21), // RRA
        (0x5d, 0x22), // RHA
        (0x5f, 0x2f), // YYA
    ],
    danda: DANDA,
};

pub static GURMUKHI: ScriptProfile = ScriptProfile {
    script: Script::Gurmukhi,
    substitutions: &[],
    nukta_letters: &[
        (0x33, 0x32), // LLA
        (0x36, 0x38), // SHA
        (0x59, 0x16), // KHHA
        (0x5a, 0x17), // GHHA
        (0x5b, 0x1c), // ZA
        (0x5e, 0x2b), // FA
    ],
    danda: DANDA,
};

pub static ORIYA: ScriptProfile = ScriptProfile {
    script: Script::Oriya,
    substitutions: &[],
    nukta_letters: &[
        (0x5c, 0x21), // RRA
        (0x5d, 0x22), // RHA
    ],
    danda: DANDA,
};

impl ScriptProfile {
    /// Profile for a script, if it has script-specific passes.
    pub fn for_script(script: Script) -> Option<&'static Self> {
        match script {
            Script::Devanagari => Some(&DEVANAGARI),
            Script::Bengali => Some(&BENGALI),
            Script::Gurmukhi => Some(&GURMUKHI),
            Script::Oriya => Some(&ORIYA),
            _ => None,
        }
    }
}
