//! Akshar-normalizer - Script-aware normalization for Indic text
//!
//! This crate turns visually identical but byte-different Indic text into
//! one canonical spelling, so that downstream tokenizers, search indexes
//! and classifiers see a single form per word.
//!
//! # Features
//!
//! - Common pass for every script (format characters, punctuation, chandra
//!   folding, nasal handling, vowel endings)
//! - Script profiles for Devanagari, Bengali, Gurmukhi and Oriya (nukta
//!   letters, danda, visarga correction)
//! - Serializable configuration with a builder and a normalizer cache
//! - Parallel batch normalization
//! - Text utilities: word/sentence splitting, stopwords, light stemming
//!
//! # Example
//!
//! ```rust
//! use akshar_normalizer::{NasalMode, Normalize, Normalizer};
//!
//! let normalizer = Normalizer::builder()
//!     .script("hi")
//!     .nasal_mode(NasalMode::AnusvaaraStrict)
//!     .build()?;
//!
//! assert_eq!(normalizer.normalize("गङ्गा|"), "गंगा।");
//! # Ok::<(), akshar_normalizer::NormalizerError>(())
//! ```

// Re-export core types
pub use akshar_core::{
    is_consonant, offset_to_char, offsets, FormatChar, NormalizerError, Result, Script, ScriptId,
};

pub mod config;
pub use config::{NasalMode, NormalizerConfig, VowelEndingPolicy};

pub mod rules;

pub mod base;
pub use base::BaseNormalizer;

pub mod script;
pub use script::{ScriptNormalizer, ScriptProfile};

pub mod normalizer;
pub use normalizer::{Normalize, Normalizer, NormalizerBuilder};

pub mod stats;
pub use stats::{char_stats, CharStats};

// Utilities
pub mod utils;
pub use utils::{CacheStats, NormalizerCache};

pub mod text;
pub use text::{stem, Pipeline, Splitter, StopwordFilter, Tokenize};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
