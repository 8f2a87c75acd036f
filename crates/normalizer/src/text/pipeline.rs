//! Normalize, tokenize and filter in one call.

use super::split::{Splitter, Tokenize};
use super::stopwords::StopwordFilter;
use crate::normalizer::{Normalize, Normalizer};

/// Preprocessing pipeline ahead of tagging or embedding lookup.
///
/// The stopword list is normalized with the pipeline's own normalizer when
/// it is attached, so that list entries and tokens share one spelling.
pub struct Pipeline {
    normalizer: Normalizer,
    tokenizer: Box<dyn Tokenize>,
    stopwords: Option<StopwordFilter>,
}

impl Pipeline {
    /// Pipeline with word splitting and no stopword filter.
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            tokenizer: Box::new(Splitter::words()),
            stopwords: None,
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer<T: Tokenize + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Drop tokens found in `filter`.
    pub fn with_stopwords(mut self, filter: &StopwordFilter) -> Self {
        self.stopwords = Some(filter.normalized_with(&self.normalizer));
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Run the pipeline on one text.
    pub fn process(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        let tokens = self.tokenizer.tokenize(&normalized);
        match &self.stopwords {
            Some(filter) => filter.filter(&tokens),
            None => tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() {
        let normalizer = Normalizer::builder().build().unwrap();
        let pipeline = Pipeline::new(normalizer).with_stopwords(&StopwordFilter::hindi());
        assert_eq!(
            pipeline.process("राम\u{200d} ने सेब खाया|"),
            vec!["राम", "सेब", "खाया", "।"]
        );
    }

    #[test]
    fn test_custom_tokenizer() {
        struct Chars;
        impl Tokenize for Chars {
            fn tokenize(&self, text: &str) -> Vec<String> {
                text.chars().map(String::from).collect()
            }
        }

        let normalizer = Normalizer::builder().remove_nuktas(true).build().unwrap();
        let pipeline = Pipeline::new(normalizer).with_tokenizer(Chars);
        assert_eq!(pipeline.process("\u{095b}"), vec!["\u{091c}"]);
    }
}
