//! # Vocabulary Selection

use crate::errors::Result;
use crate::types::{CountType, StringChunkType};
use crate::vocab::special_vocab::SpecialTokens;
use crate::vocab::vocabulary::Vocabulary;
use crate::word_count::FrequencyTable;

/// Select a vocabulary: the specials, then the `max_tokens` most common words.
///
/// Words are ranked by count descending, ties by first-seen order. Ranked
/// words whose text equals a special token are dropped (not replaced), so the
/// result never exceeds ``specials.len() + max_tokens`` entries.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(counts, specials)))]
pub fn select_vocabulary<K, C>(
    counts: &FrequencyTable<K, C>,
    max_tokens: usize,
    specials: &SpecialTokens,
) -> Result<Vocabulary>
where
    K: StringChunkType,
    C: CountType,
{
    let most_common = counts.most_common(max_tokens);
    let ranked = most_common.len();

    let words: Vec<&str> = most_common
        .into_iter()
        .map(|(word, _)| word.as_ref())
        .filter(|word| !specials.contains(word))
        .collect();

    if words.len() < ranked {
        log::debug!(
            "Dropped {} ranked words colliding with special tokens",
            ranked - words.len()
        );
    }

    Vocabulary::from_tokens(specials.iter().chain(words))
}
