//! CLI commands for the akshar normalizer.

pub mod benchmark;
pub mod normalize;
pub mod stats;

pub use benchmark::BenchmarkCommand;
pub use normalize::NormalizeCommand;
pub use stats::StatsCommand;

use akshar_normalizer::{NasalMode, Normalizer, NormalizerConfig, ScriptId, VowelEndingPolicy};
use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Normalizer options shared by every command.
#[derive(Args, Debug)]
pub struct NormalizerArgs {
    /// Language code (hi, mr, bn, pa, ta, ...) [default: hi]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Delete nukta marks
    #[arg(long, default_value_t = false)]
    pub remove_nuktas: bool,

    /// Nasal handling: none, anusvaara-strict, anusvaara-relaxed, nasal-consonants
    #[arg(long)]
    pub nasal_mode: Option<NasalMode>,

    /// Fold chandra vowels and chandrabindu
    #[arg(long, default_value_t = false)]
    pub fold_chandras: bool,

    /// Mark words that end in a bare consonant
    #[arg(long, default_value_t = false)]
    pub vowel_endings: bool,

    /// Vowel-ending policy: indo-aryan or dravidian
    #[arg(long)]
    pub vowel_policy: Option<VowelEndingPolicy>,

    /// JSON configuration file; flags given on the command line override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl NormalizerArgs {
    /// Resolve the configuration from the config file and flags.
    pub fn to_config(&self) -> AnyhowResult<NormalizerConfig> {
        let mut config = match &self.config {
            Some(path) => NormalizerConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => NormalizerConfig::default(),
        };

        if let Some(lang) = &self.lang {
            config.script = lang.parse::<ScriptId>()?;
        }
        config.remove_nuktas |= self.remove_nuktas;
        config.fold_chandras |= self.fold_chandras;
        config.normalize_vowel_endings |= self.vowel_endings;
        if let Some(mode) = self.nasal_mode {
            config.nasal_mode = mode;
        }
        if let Some(policy) = self.vowel_policy {
            config.vowel_ending_policy = policy;
        }

        Ok(config)
    }

    pub fn build(&self) -> AnyhowResult<Normalizer> {
        let config = self.to_config()?;
        tracing::info!(
            script = %config.script,
            nasal_mode = %config.nasal_mode,
            "building normalizer"
        );
        Ok(Normalizer::new(config)?)
    }
}

/// Read input text (from stdin if "-").
pub fn read_input(input: String) -> AnyhowResult<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: NormalizerArgs,
    }

    fn parse(argv: &[&str]) -> NormalizerArgs {
        TestCli::parse_from(std::iter::once("akshar").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "--lang",
            "mr",
            "--remove-nuktas",
            "--nasal-mode",
            "to_anusvaara_strict",
            "--vowel-endings",
            "--vowel-policy",
            "dravidian",
        ])
        .to_config()
        .unwrap();
        assert_eq!(config.script, ScriptId::Marathi);
        assert!(config.remove_nuktas);
        assert!(!config.fold_chandras);
        assert_eq!(config.nasal_mode, NasalMode::AnusvaaraStrict);
        assert!(config.normalize_vowel_endings);
        assert_eq!(config.vowel_ending_policy, VowelEndingPolicy::Dravidian);
    }

    #[test]
    fn test_bad_lang() {
        assert!(parse(&["--lang", "xx"]).to_config().is_err());
    }

    #[test]
    fn test_bad_nasal_mode_is_rejected_by_clap() {
        let result = TestCli::try_parse_from(["akshar", "--nasal-mode", "loose"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_literal_input() {
        assert_eq!(read_input("राम".to_string()).unwrap(), "राम");
    }
}
