//! Script-agnostic normalization pass.

use crate::config::NormalizerConfig;
use crate::normalizer::Normalize;
use crate::rules::{
    normalize_punctuation, strip_format_chars, ChandraRules, NasalRules, VowelEndingRules,
};
use akshar_core::{Result, ScriptId};

/// Rules compiled from a configuration.
#[derive(Debug, Clone)]
struct CompiledRules {
    chandra: Option<ChandraRules>,
    nasal: NasalRules,
    vowel_ending: Option<VowelEndingRules>,
}

impl CompiledRules {
    fn compile(config: &NormalizerConfig) -> Result<Self> {
        let chandra = config
            .fold_chandras
            .then(|| ChandraRules::compile(config.script))
            .transpose()?;
        let nasal = NasalRules::compile(config.nasal_mode, config.script)?;
        let vowel_ending = config
            .normalize_vowel_endings
            .then(|| VowelEndingRules::compile(config.vowel_ending_policy, config.script))
            .transpose()?
            .flatten();

        Ok(Self {
            chandra,
            nasal,
            vowel_ending,
        })
    }
}

/// Common normalization shared by every script.
///
/// Runs, in order:
/// 1. format-character removal (BOM, word joiner, soft hyphen, ZWJ, ZWNJ;
///    zero-width and no-break spaces become plain spaces)
/// 2. punctuation canonicalization
/// 3. chandra folding, if enabled
/// 4. nasal handling, per [`NasalMode`](crate::NasalMode)
/// 5. vowel-ending normalization, if enabled
#[derive(Debug, Clone)]
pub struct BaseNormalizer {
    config: NormalizerConfig,
    rules: CompiledRules,
}

impl BaseNormalizer {
    /// Compile the rule set for `config`.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let rules = CompiledRules::compile(&config)?;
        tracing::debug!(
            script = %config.script,
            nasal_mode = %config.nasal_mode,
            nasal_patterns = rules.nasal.len(),
            chandra_pairs = rules.chandra.as_ref().map_or(0, ChandraRules::len),
            vowel_endings = rules.vowel_ending.is_some(),
            "compiled base normalization rules"
        );
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn script(&self) -> ScriptId {
        self.config.script
    }
}

impl Normalize for BaseNormalizer {
    fn normalize(&self, text: &str) -> String {
        let text = strip_format_chars(text);
        let mut text = normalize_punctuation(&text);

        if let Some(chandra) = &self.rules.chandra {
            text = chandra.apply(&text);
        }
        text = self.rules.nasal.apply(&text);
        if let Some(vowel_ending) = &self.rules.vowel_ending {
            text = vowel_ending.apply(&text);
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NasalMode, VowelEndingPolicy};

    fn base(config: NormalizerConfig) -> BaseNormalizer {
        BaseNormalizer::new(config).unwrap()
    }

    #[test]
    fn test_default_config_only_cleans() {
        let normalizer = base(NormalizerConfig::default());
        let text = "\u{feff}गङ्गा\u{00a0}चाँद\u{200d}";
        assert_eq!(normalizer.normalize(text), "गङ्गा चाँद");
    }

    #[test]
    fn test_punctuation_example() {
        let normalizer = base(NormalizerConfig::default());
        assert_eq!(
            normalizer.normalize("\u{201e}Hello\u{201c}\u{2013}test\u{2026}"),
            "\"Hello\"-test..."
        );
    }

    #[test]
    fn test_chandra_then_nasal() {
        let normalizer = base(NormalizerConfig {
            fold_chandras: true,
            nasal_mode: NasalMode::NasalConsonants,
            ..Default::default()
        });
        // chandrabindu folds to anusvaara, which then expands before a dental
        assert_eq!(normalizer.normalize("चाँद"), "चान्द");
    }

    #[test]
    fn test_vowel_ending_runs_last() {
        let normalizer = base(NormalizerConfig {
            nasal_mode: NasalMode::AnusvaaraRelaxed,
            normalize_vowel_endings: true,
            ..Default::default()
        });
        // the halant added at the end is not seen by the nasal pass
        assert_eq!(normalizer.normalize("अमन"), "अमन्");
    }

    #[test]
    fn test_dravidian_vowel_ending() {
        let normalizer = base(NormalizerConfig {
            script: ScriptId::Malayalam,
            normalize_vowel_endings: true,
            vowel_ending_policy: VowelEndingPolicy::Dravidian,
            ..Default::default()
        });
        // കമല -> കമലാ
        assert_eq!(
            normalizer.normalize("\u{0d15}\u{0d2e}\u{0d32}"),
            "\u{0d15}\u{0d2e}\u{0d32}\u{0d3e}"
        );
    }

    #[test]
    fn test_format_chars_removed_before_punctuation() {
        let normalizer = base(NormalizerConfig::default());
        // the soft hyphen would otherwise keep the quotes apart
        assert_eq!(normalizer.normalize("'\u{00ad}'"), "\"");
    }

    #[test]
    fn test_sinhala_skips_unencoded_rules() {
        let normalizer = base(NormalizerConfig {
            script: ScriptId::Sinhala,
            nasal_mode: NasalMode::AnusvaaraStrict,
            normalize_vowel_endings: true,
            ..Default::default()
        });
        // සමන: no unassigned codepoint is appended
        let text = "\u{0dc3}\u{0db8}\u{0db1}";
        assert_eq!(normalizer.normalize(text), text);
    }
}
