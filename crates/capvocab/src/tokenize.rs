//! # Word Tokenizer
//!
//! Captions are lowercased and split on a word regex; everything between
//! matches (punctuation, whitespace) is discarded.

use crate::errors::{Result, VocabError};
use regex::Regex;
use std::sync::LazyLock;

static DEFAULT_TOKENIZER: LazyLock<WordTokenizer> = LazyLock::new(WordTokenizer::new);

/// Split `text` into lowercase word tokens with the default [`WordTokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Lowercasing regex word splitter.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    regex: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a tokenizer using [`crate::WORD_PATTERN`].
    pub fn new() -> Self {
        Self {
            regex: Regex::new(crate::WORD_PATTERN).expect("default word pattern compiles"),
        }
    }

    /// Create a tokenizer from a custom word pattern.
    ///
    /// Every non-overlapping match of `pattern` in the lowercased text is a token.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| VocabError::Argument(format!("invalid word pattern {pattern:?}: {e}")))?;
        Ok(Self { regex })
    }

    /// The word pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Iterate over the tokens of `text`.
    ///
    /// The match spans are found up front; each token is allocated as it is
    /// yielded. [`Self::for_each_token`] avoids the per-token allocation.
    pub fn iter(
        &self,
        text: &str,
    ) -> impl Iterator<Item = String> {
        let lowered = text.to_lowercase();
        let spans: Vec<(usize, usize)> = self
            .regex
            .find_iter(&lowered)
            .map(|m| (m.start(), m.end()))
            .collect();
        spans
            .into_iter()
            .map(move |(start, end)| lowered[start..end].to_string())
    }

    /// Split `text` into tokens.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Call `f` on each token of `text` without allocating per token.
    pub fn for_each_token<F>(
        &self,
        text: &str,
        mut f: F,
    ) where
        F: FnMut(&str),
    {
        let lowered = text.to_lowercase();
        for m in self.regex.find_iter(&lowered) {
            f(m.as_str());
        }
    }
}
