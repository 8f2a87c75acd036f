//! Akshar-core - Script tables for Indic text normalization
//!
//! This crate provides the pieces every normalizer builds on, independent of
//! any particular rule family.
//!
//! # Features
//!
//! - Codepoint-offset table mapping language codes to Unicode script blocks
//! - Consonant classification shared by the Brahmic blocks
//! - The set of invisible/format characters stripped by the common pass
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use akshar_core::{is_consonant, offset_to_char, ScriptId};
//!
//! let hindi: ScriptId = "hi".parse()?;
//! let ka = offset_to_char(0x15, hindi)?;
//! assert_eq!(ka, 'क');
//! assert!(is_consonant(ka, hindi));
//! # Ok::<(), akshar_core::NormalizerError>(())
//! ```

pub mod error;
pub use error::{NormalizerError, Result};

pub mod script;
pub use script::{is_consonant, offset_to_char, offsets, Script, ScriptId};

pub mod chars;
pub use chars::FormatChar;
