//! Text splitting.
//!
//! This module defines the [`Tokenize`] seam consumed by downstream
//! tokenizers and a rule-based [`Splitter`] that implements it for word and
//! sentence splitting.

use akshar_core::{NormalizerError, Result};
use regex::Regex;

/// Anything that turns normalized text into an ordered token sequence.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splitting patterns.
#[derive(Debug, Clone)]
pub enum SplitPattern {
    /// No splitting (keep text as-is)
    NoSplit,
    /// Split on whitespace
    Whitespace,
    /// Split on whitespace and give punctuation its own token
    Words,
    /// Split after sentence-ending marks (danda, double danda, `.`, `?`, `!`)
    Sentences,
    /// Custom regex pattern matching the separators
    Custom(Regex),
}

/// Text splitter.
#[derive(Debug, Clone)]
pub struct Splitter {
    pattern: SplitPattern,
}

const SENTENCE_ENDS: [char; 5] = ['\u{0964}', '\u{0965}', '.', '?', '!'];

fn is_word_punctuation(c: char) -> bool {
    SENTENCE_ENDS.contains(&c) || (c.is_ascii_punctuation() && c != '-')
}

impl Splitter {
    pub fn new(pattern: SplitPattern) -> Self {
        Self { pattern }
    }

    pub fn whitespace() -> Self {
        Self::new(SplitPattern::Whitespace)
    }

    pub fn words() -> Self {
        Self::new(SplitPattern::Words)
    }

    pub fn sentences() -> Self {
        Self::new(SplitPattern::Sentences)
    }

    /// Split on every match of `pattern`.
    pub fn custom(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| NormalizerError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(SplitPattern::Custom(re)))
    }

    /// Split text into chunks. Empty chunks are dropped.
    pub fn split(&self, text: &str) -> Vec<String> {
        match &self.pattern {
            SplitPattern::NoSplit => vec![text.to_string()],
            SplitPattern::Whitespace => text.split_whitespace().map(str::to_string).collect(),
            SplitPattern::Words => split_words(text),
            SplitPattern::Sentences => split_sentences(text),
            SplitPattern::Custom(re) => re
                .split(text)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

fn split_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut current = String::new();
        for c in chunk.chars() {
            if is_word_punctuation(c) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(c.to_string());
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }
    tokens
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        // runs like "।।" or "?!" stay with their sentence
        let closes = SENTENCE_ENDS.contains(&c)
            && !chars.peek().is_some_and(|next| SENTENCE_ENDS.contains(next));
        if closes {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

impl Default for Splitter {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl Tokenize for Splitter {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.split(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("राम  आया\tघर");
        assert_eq!(result, vec!["राम", "आया", "घर"]);
    }

    #[test]
    fn test_nosplit() {
        let splitter = Splitter::new(SplitPattern::NoSplit);
        assert_eq!(splitter.split("hello world  test"), vec!["hello world  test"]);
    }

    #[test]
    fn test_words_separate_punctuation() {
        let splitter = Splitter::words();
        assert_eq!(
            splitter.split("राम, घर गया। \"ठीक\""),
            vec!["राम", ",", "घर", "गया", "।", "\"", "ठीक", "\""]
        );
        // hyphenated compounds stay whole
        assert_eq!(splitter.split("माता-पिता"), vec!["माता-पिता"]);
    }

    #[test]
    fn test_sentences() {
        let splitter = Splitter::sentences();
        assert_eq!(
            splitter.split("राम घर गया। सीता आई।। क्या? हाँ"),
            vec!["राम घर गया।", "सीता आई।।", "क्या?", "हाँ"]
        );
    }

    #[test]
    fn test_custom_split() {
        let splitter = Splitter::custom(r"[,;]\s*").unwrap();
        assert_eq!(splitter.split("a, b;c,"), vec!["a", "b", "c"]);
        assert!(Splitter::custom("(").is_err());
    }

    #[test]
    fn test_empty_string() {
        let splitter = Splitter::whitespace();
        assert_eq!(splitter.split(""), Vec::<String>::new());
        assert_eq!(Splitter::sentences().split("  "), Vec::<String>::new());
    }
}
