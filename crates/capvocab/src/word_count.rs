//! # Word Counting
//!
//! Counts are kept in first-seen order so that ranking ties resolve the same
//! way on every run, independent of hash iteration order.

use crate::tokenize::WordTokenizer;
use crate::types::{CountType, StringChunkType};
use ahash::AHashMap;
use compact_str::CompactString;
use core::cmp::Reverse;

/// Insertion-ordered ``{ word -> count }`` table.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K = CompactString, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// Map of ``{ word -> index into entries }``.
    index: AHashMap<K, usize>,

    /// ``(word, count)`` in first-seen order.
    entries: Vec<(K, C)>,
}

impl<K, C> Default for FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K, C> PartialEq for FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl<K, C, S> FromIterator<(S, C)> for FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (word, count) in iter {
            table.add(word.as_ref(), count);
        }
        table
    }
}

impl<K, C> FrequencyTable<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words have been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `count` occurrences of `word`.
    pub fn add(
        &mut self,
        word: &str,
        count: C,
    ) {
        match self.index.get(word) {
            Some(&idx) => self.entries[idx].1 += count,
            None => {
                let key: K = word.into();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
            }
        }
    }

    /// Add one occurrence of `word`.
    pub fn increment(
        &mut self,
        word: &str,
    ) {
        self.add(word, C::one());
    }

    /// The count for `word`, if seen.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<C> {
        self.index.get(word).map(|&idx| self.entries[idx].1)
    }

    /// Iterate over ``(word, count)`` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, C)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Sum of all counts.
    pub fn total(&self) -> C {
        let mut total = C::zero();
        for (_, c) in &self.entries {
            total += *c;
        }
        total
    }

    /// Merge another table into this one.
    ///
    /// Words not yet present are appended in `other`'s first-seen order.
    pub fn update_from(
        &mut self,
        other: FrequencyTable<K, C>,
    ) {
        for (k, c) in other.entries {
            self.add(k.as_ref(), c);
        }
    }

    /// The `n` most common words.
    ///
    /// Sorted by count descending; equal counts keep first-seen order.
    pub fn most_common(
        &self,
        n: usize,
    ) -> Vec<(&K, C)> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_unstable_by_key(|&idx| (Reverse(self.entries[idx].1), idx));
        order.truncate(n);
        order
            .into_iter()
            .map(|idx| {
                let (k, c) = &self.entries[idx];
                (k, *c)
            })
            .collect()
    }
}

/// Split text into words and count occurrences.
pub fn word_counts_from_text<S, K, C>(
    tokenizer: &WordTokenizer,
    text: S,
) -> FrequencyTable<K, C>
where
    S: AsRef<str>,
    K: StringChunkType,
    C: CountType,
{
    let mut table = FrequencyTable::default();
    update_word_counts_from_text(&mut table, tokenizer, text);
    table
}

/// Update word counts in-place from text.
pub fn update_word_counts_from_text<S, K, C>(
    word_counts: &mut FrequencyTable<K, C>,
    tokenizer: &WordTokenizer,
    text: S,
) where
    S: AsRef<str>,
    K: StringChunkType,
    C: CountType,
{
    tokenizer.for_each_token(text.as_ref(), |word| word_counts.increment(word));
}

/// Word counter over a stream of text samples.
#[derive(Debug)]
pub struct WordCounter<K = CompactString, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// The word splitter.
    tokenizer: WordTokenizer,

    /// The number of samples seen.
    num_samples: usize,

    /// The word counts.
    word_counts: FrequencyTable<K, C>,
}

impl<K, C> WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new word counter around an existing tokenizer.
    pub fn from_tokenizer(tokenizer: WordTokenizer) -> Self {
        Self {
            tokenizer,
            num_samples: 0,
            word_counts: Default::default(),
        }
    }

    /// Get the regex pattern used for text splitting.
    pub fn pattern(&self) -> &str {
        self.tokenizer.pattern()
    }

    /// The number of samples counted so far.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Get the word counts.
    pub fn word_counts(&self) -> &FrequencyTable<K, C> {
        &self.word_counts
    }

    /// Release the word counts and return them.
    pub fn release(self) -> FrequencyTable<K, C> {
        self.word_counts
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        update_word_counts_from_text(&mut self.word_counts, &self.tokenizer, text);
        self.num_samples += 1;
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<K: StringChunkType, C: CountType>(
        counts: &FrequencyTable<K, C>,
    ) -> Vec<(String, C)> {
        counts
            .iter()
            .map(|(k, c)| (k.as_ref().to_string(), c))
            .collect()
    }

    #[test]
    fn test_text_to_word_counts() {
        let tokenizer = WordTokenizer::default();

        let text = "Hello, world! Foo world bar world.";
        let counts: FrequencyTable<String, u32> = word_counts_from_text(&tokenizer, text);
        assert_eq!(
            collect(&counts),
            vec![
                ("hello".to_string(), 1),
                ("world".to_string(), 3),
                ("foo".to_string(), 1),
                ("bar".to_string(), 1),
            ]
        );
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.get("world"), Some(3));
        assert_eq!(counts.get("missing"), None);
    }

    #[test]
    fn test_update_from_keeps_first_seen_order() {
        let tokenizer = WordTokenizer::default();

        let mut counts1: FrequencyTable<CompactString, usize> =
            word_counts_from_text(&tokenizer, "b a");
        let counts2 = word_counts_from_text(&tokenizer, "c a d");

        counts1.update_from(counts2);
        assert_eq!(
            collect(&counts1),
            vec![
                ("b".to_string(), 1),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_most_common_ties_use_first_seen() {
        let counts: FrequencyTable = [("z", 1), ("y", 2), ("x", 1), ("w", 2), ("v", 3)]
            .into_iter()
            .collect();

        let top: Vec<(&str, u64)> = counts
            .most_common(10)
            .into_iter()
            .map(|(k, c)| (k.as_str(), c))
            .collect();
        assert_eq!(top, vec![("v", 3), ("y", 2), ("w", 2), ("z", 1), ("x", 1)]);

        let top2: Vec<&str> = counts
            .most_common(2)
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(top2, vec!["v", "y"]);

        assert!(counts.most_common(0).is_empty());
    }

    #[test]
    fn test_word_counter() {
        let mut wc: WordCounter<String, u64> = WordCounter::from_tokenizer(Default::default());
        assert_eq!(wc.pattern(), crate::WORD_PATTERN);

        let samples = vec!["A cat.", "A CAT sat.", "A dog."];
        wc.update_from_samples(samples.iter());
        assert_eq!(wc.num_samples(), 3);

        let counts = wc.release();
        assert_eq!(
            collect(&counts),
            vec![
                ("a".to_string(), 3),
                ("cat".to_string(), 2),
                ("sat".to_string(), 1),
                ("dog".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_word_counter_order_independent_counts() {
        let forward = ["red bus", "blue bus", "red car"];
        let mut a: WordCounter = WordCounter::from_tokenizer(Default::default());
        a.update_from_samples(forward);

        let mut b: WordCounter = WordCounter::from_tokenizer(Default::default());
        b.update_from_samples(forward.iter().rev());

        for (word, count) in a.word_counts().iter() {
            assert_eq!(b.word_counts().get(word), Some(count));
        }
        assert_eq!(a.word_counts().len(), b.word_counts().len());
    }

    #[test]
    fn test_word_counter_custom_pattern() {
        let tokenizer = WordTokenizer::from_pattern("[a-z]+").unwrap();
        let mut wc: WordCounter = WordCounter::from_tokenizer(tokenizer);
        assert_eq!(wc.pattern(), "[a-z]+");

        wc.update_from_text("Room 101, room B");
        assert_eq!(
            collect(wc.word_counts()),
            vec![("room".to_string(), 2), ("b".to_string(), 1)]
        );
    }
}
