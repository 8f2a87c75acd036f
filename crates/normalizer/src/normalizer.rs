//! Normalizer front door.
//!
//! This module provides the [`Normalize`] trait implemented by every
//! normalizer, and the [`Normalizer`] type that picks the right
//! implementation for a configured script.

use crate::base::BaseNormalizer;
use crate::config::{NasalMode, NormalizerConfig, VowelEndingPolicy};
use crate::script::{ScriptNormalizer, ScriptProfile};
use akshar_core::{Result, ScriptId};
use rayon::prelude::*;

/// Text normalization capability.
///
/// Implementations are immutable once built, so one instance can serve any
/// number of threads.
pub trait Normalize: Send + Sync {
    /// Normalize text. Never fails.
    fn normalize(&self, text: &str) -> String;

    /// Normalize a batch of texts (parallelized).
    fn normalize_batch(&self, texts: &[String]) -> Vec<String> {
        texts.par_iter().map(|text| self.normalize(text)).collect()
    }
}

/// A normalizer for any supported script.
///
/// Scripts with a [`ScriptProfile`] get a [`ScriptNormalizer`]; the rest get
/// the common pass only.
#[derive(Debug, Clone)]
pub enum Normalizer {
    Base(BaseNormalizer),
    Script(ScriptNormalizer),
}

impl Normalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        match ScriptProfile::for_script(config.script.script()) {
            Some(profile) => Ok(Self::Script(ScriptNormalizer::with_profile(config, profile)?)),
            None => Ok(Self::Base(BaseNormalizer::new(config)?)),
        }
    }

    /// Create a normalizer builder.
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }

    /// Get the configuration this normalizer was built from.
    pub fn config(&self) -> &NormalizerConfig {
        match self {
            Self::Base(n) => n.config(),
            Self::Script(n) => n.config(),
        }
    }

    /// Whether script-specific passes run after the common pass.
    pub fn is_script_specific(&self) -> bool {
        matches!(self, Self::Script(_))
    }
}

impl Normalize for Normalizer {
    fn normalize(&self, text: &str) -> String {
        match self {
            Self::Base(n) => n.normalize(text),
            Self::Script(n) => n.normalize(text),
        }
    }
}

/// Builder for creating a normalizer.
///
/// The script is given as a language code and only checked in
/// [`build`](NormalizerBuilder::build), so every configuration error
/// surfaces in one place.
#[derive(Debug, Clone)]
pub struct NormalizerBuilder {
    script: String,
    config: NormalizerConfig,
    vowel_policy: Option<VowelEndingPolicy>,
    family_policy: bool,
}

impl Default for NormalizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerBuilder {
    /// Create a new builder with default configuration (Hindi, all rules off).
    pub fn new() -> Self {
        Self {
            script: ScriptId::default().code().to_string(),
            config: NormalizerConfig::default(),
            vowel_policy: None,
            family_policy: false,
        }
    }

    /// Set the language code (`"hi"`, `"mr"`, `"bn"`, ...).
    pub fn script(mut self, code: impl Into<String>) -> Self {
        self.script = code.into();
        self
    }

    /// Delete nukta marks.
    pub fn remove_nuktas(mut self, yes: bool) -> Self {
        self.config.remove_nuktas = yes;
        self
    }

    /// Set the nasal handling mode.
    pub fn nasal_mode(mut self, mode: NasalMode) -> Self {
        self.config.nasal_mode = mode;
        self
    }

    /// Fold chandra vowels and chandrabindu.
    pub fn fold_chandras(mut self, yes: bool) -> Self {
        self.config.fold_chandras = yes;
        self
    }

    /// Mark consonant-final words.
    pub fn normalize_vowel_endings(mut self, yes: bool) -> Self {
        self.config.normalize_vowel_endings = yes;
        self
    }

    /// Set the vowel-ending policy.
    ///
    /// Defaults to Indo-Aryan when not set. An explicit policy wins over
    /// [`family_vowel_ending_policy`](Self::family_vowel_ending_policy).
    pub fn vowel_ending_policy(mut self, policy: VowelEndingPolicy) -> Self {
        self.vowel_policy = Some(policy);
        self
    }

    /// Use the vowel-ending policy of the script's language family.
    pub fn family_vowel_ending_policy(mut self) -> Self {
        self.family_policy = true;
        self
    }

    /// Resolve the configuration without compiling any rules.
    pub fn into_config(self) -> Result<NormalizerConfig> {
        let script: ScriptId = self.script.parse()?;
        let vowel_ending_policy = match (self.vowel_policy, self.family_policy) {
            (Some(policy), _) => policy,
            (None, true) => VowelEndingPolicy::for_script(script),
            (None, false) => VowelEndingPolicy::default(),
        };
        Ok(NormalizerConfig {
            script,
            vowel_ending_policy,
            ..self.config
        })
    }

    /// Build the normalizer.
    pub fn build(self) -> Result<Normalizer> {
        Normalizer::new(self.into_config()?)
    }
}
