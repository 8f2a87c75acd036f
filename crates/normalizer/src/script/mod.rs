//! Script-specific normalization.
//!
//! A [`ScriptNormalizer`] runs the [`BaseNormalizer`] and then the passes
//! described by the script's [`ScriptProfile`]:
//! 1. single-character substitutions
//! 2. nukta letter decomposition (always)
//! 3. nukta removal, if enabled
//! 4. `|` to danda
//! 5. `:` to visarga after a character of the script's block

pub mod profile;

pub use profile::ScriptProfile;

use crate::base::BaseNormalizer;
use crate::config::NormalizerConfig;
use crate::normalizer::Normalize;
use akshar_core::{offsets, NormalizerError, Result};
use regex::Regex;

/// Profile tables resolved to characters.
#[derive(Debug, Clone)]
struct ScriptRules {
    substitutions: Vec<(char, char)>,
    nukta_letters: Vec<(char, String)>,
    nukta: char,
    danda: char,
    visarga_pattern: Regex,
    visarga_replacement: String,
}

impl ScriptRules {
    fn compile(profile: &ScriptProfile) -> Result<Self> {
        let script = profile.script;
        let nukta = script.char_at(offsets::NUKTA)?;

        let substitutions = profile
            .substitutions
            .iter()
            .map(|&(from, to)| Ok((script.char_at(from)?, script.char_at(to)?)))
            .collect::<Result<Vec<_>>>()?;

        let nukta_letters = profile
            .nukta_letters
            .iter()
            .map(|&(letter, base)| {
                let decomposed: String = [script.char_at(base)?, nukta].into_iter().collect();
                Ok((script.char_at(letter)?, decomposed))
            })
            .collect::<Result<Vec<_>>>()?;

        let pattern = format!(
            "([{}-{}]):",
            script.char_at(0)?,
            script.char_at(offsets::BLOCK_END)?
        );
        let visarga_pattern = Regex::new(&pattern).map_err(|e| NormalizerError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            substitutions,
            nukta_letters,
            nukta,
            danda: profile.danda,
            visarga_pattern,
            visarga_replacement: format!("${{1}}{}", script.char_at(offsets::VISARGA)?),
        })
    }
}

/// Normalizer for a script with its own passes on top of the common one.
#[derive(Debug, Clone)]
pub struct ScriptNormalizer {
    base: BaseNormalizer,
    profile: &'static ScriptProfile,
    rules: ScriptRules,
}

impl ScriptNormalizer {
    /// Build a normalizer for `config` using an explicit profile.
    ///
    /// Fails with [`NormalizerError::InvalidConfig`] if the profile is for a
    /// different block than the configured script.
    pub fn with_profile(config: NormalizerConfig, profile: &'static ScriptProfile) -> Result<Self> {
        if config.script.script() != profile.script {
            return Err(NormalizerError::InvalidConfig(format!(
                "{} profile cannot normalize '{}' ({} script)",
                profile.script,
                config.script,
                config.script.script()
            )));
        }

        let rules = ScriptRules::compile(profile)?;
        tracing::debug!(
            script = %profile.script,
            substitutions = rules.substitutions.len(),
            nukta_letters = rules.nukta_letters.len(),
            remove_nuktas = config.remove_nuktas,
            "compiled script normalization rules"
        );
        let base = BaseNormalizer::new(config)?;

        Ok(Self {
            base,
            profile,
            rules,
        })
    }

    /// Build a normalizer for `config` with the profile of its script.
    ///
    /// Fails with [`NormalizerError::InvalidConfig`] if the script has no
    /// profile; use [`BaseNormalizer`] for those.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let profile = ScriptProfile::for_script(config.script.script()).ok_or_else(|| {
            NormalizerError::InvalidConfig(format!(
                "no script profile for '{}' ({} script)",
                config.script,
                config.script.script()
            ))
        })?;
        Self::with_profile(config, profile)
    }

    /// Devanagari normalizer for a Devanagari language.
    pub fn devanagari(config: NormalizerConfig) -> Result<Self> {
        Self::with_profile(config, &profile::DEVANAGARI)
    }

    pub fn config(&self) -> &NormalizerConfig {
        self.base.config()
    }

    pub fn profile(&self) -> &'static ScriptProfile {
        self.profile
    }
}

impl Normalize for ScriptNormalizer {
    fn normalize(&self, text: &str) -> String {
        let rules = &self.rules;
        let text = self.base.normalize(text);

        let mut out = String::with_capacity(text.len() + text.len() / 8);
        for c in text.chars() {
            let c = rules
                .substitutions
                .iter()
                .find_map(|&(from, to)| (from == c).then_some(to))
                .unwrap_or(c);

            if let Some((_, decomposed)) = rules.nukta_letters.iter().find(|(l, _)| *l == c) {
                out.push_str(decomposed);
            } else if c == '|' {
                out.push(rules.danda);
            } else {
                out.push(c);
            }
        }

        if self.config().remove_nuktas {
            out.retain(|c| c != rules.nukta);
        }

        rules
            .visarga_pattern
            .replace_all(&out, rules.visarga_replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use akshar_core::ScriptId;

    fn hindi(remove_nuktas: bool) -> ScriptNormalizer {
        ScriptNormalizer::new(NormalizerConfig {
            remove_nuktas,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_nukta_decomposition() {
        let normalizer = hindi(false);
        assert_eq!(normalizer.normalize("\u{095b}"), "\u{091c}\u{093c}");
        assert_eq!(normalizer.normalize("\u{0929}"), "\u{0928}\u{093c}");
        // already decomposed input is left as is
        assert_eq!(normalizer.normalize("\u{091c}\u{093c}"), "\u{091c}\u{093c}");
    }

    #[test]
    fn test_nukta_removal() {
        let normalizer = hindi(true);
        assert_eq!(normalizer.normalize("\u{095b}रा"), "जरा");
        assert_eq!(normalizer.normalize("\u{0921}\u{093c}"), "\u{0921}");
    }

    #[test]
    fn test_marathi_candra_a() {
        let normalizer = ScriptNormalizer::new(NormalizerConfig::new(ScriptId::Marathi)).unwrap();
        assert_eq!(normalizer.normalize("\u{0972}"), "\u{090f}");
    }

    #[test]
    fn test_pipe_to_danda() {
        let normalizer = hindi(false);
        assert_eq!(normalizer.normalize("राम आया|"), "राम आया।");
        assert_eq!(normalizer.normalize("||"), "।।");
    }

    #[test]
    fn test_visarga_correction() {
        let normalizer = hindi(false);
        assert_eq!(normalizer.normalize("दु:ख"), "दुःख");
        assert_eq!(normalizer.normalize("अत:"), "अतः");
        // a colon after non-Devanagari text is punctuation
        assert_eq!(normalizer.normalize("time: 10:30"), "time: 10:30");
        assert_eq!(normalizer.normalize("राम :"), "राम :");
    }

    #[test]
    fn test_visarga_on_own_block_only() {
        let normalizer = ScriptNormalizer::new(NormalizerConfig::new(ScriptId::Bengali)).unwrap();
        assert_eq!(normalizer.normalize("\u{0995}:"), "\u{0995}\u{0983}");
        assert_eq!(normalizer.normalize("\u{0915}:"), "\u{0915}:");
    }

    #[test]
    fn test_runs_base_pass_first() {
        let normalizer = ScriptNormalizer::new(NormalizerConfig {
            nasal_mode: crate::NasalMode::AnusvaaraStrict,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(normalizer.normalize("\u{200d}गङ्गा|"), "गंगा।");
    }

    #[test]
    fn test_script_without_profile() {
        // Tamil has a codepoint base, only no script-specific passes
        let err = ScriptNormalizer::new(NormalizerConfig::new(ScriptId::Tamil)).unwrap_err();
        assert!(matches!(err, NormalizerError::InvalidConfig(_)));
        assert!(err.to_string().contains("no script profile"));
    }

    #[test]
    fn test_profile_must_match_script() {
        let err = ScriptNormalizer::devanagari(NormalizerConfig::new(ScriptId::Bengali)).unwrap_err();
        assert!(matches!(err, NormalizerError::InvalidConfig(_)));
    }
}
