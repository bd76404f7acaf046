//! # Vocab Builder

use crate::dataset::CaptionCorpus;
use crate::errors::Result;
use crate::tokenize::WordTokenizer;
use crate::vocab::io::save_vocabulary_to_path;
use crate::vocab::{SpecialTokens, Vocabulary, select_vocabulary};
use crate::word_count::WordCounter;
use std::fmt;
use std::path::{Path, PathBuf};

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone)]
pub struct VocabBuilderOptions {
    /// The number of corpus words to keep, not counting specials.
    pub max_tokens: usize,

    /// The regex pattern used for word splitting.
    pub pattern: String,

    /// The reserved tokens placed at the lowest ids.
    pub specials: SpecialTokens,
}

impl Default for VocabBuilderOptions {
    fn default() -> Self {
        Self {
            max_tokens: crate::DEFAULT_MAX_TOKENS,
            pattern: String::from(crate::WORD_PATTERN),
            specials: SpecialTokens::default(),
        }
    }
}

impl VocabBuilderOptions {
    /// Sets the number of corpus words to keep.
    pub fn with_max_tokens(
        self,
        max_tokens: usize,
    ) -> Self {
        Self { max_tokens, ..self }
    }

    /// Sets the regex pattern used for word splitting.
    pub fn with_pattern(
        self,
        pattern: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Replaces the special tokens.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Initializes a [`VocabBuilder`] from these options.
    ///
    /// Fails if the pattern does not compile.
    pub fn init(self) -> Result<VocabBuilder> {
        VocabBuilder::init(self)
    }
}

/// Corpus statistics gathered while counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// The number of captions counted.
    pub num_captions: usize,

    /// The total number of word occurrences.
    pub num_tokens: u64,

    /// The number of distinct words.
    pub num_unique_tokens: usize,
}

/// Results of [`VocabBuilder::build_from_captions`].
#[derive(Debug, Clone)]
pub struct BuildResults {
    /// The selected vocabulary.
    pub vocab: Vocabulary,

    /// Counting statistics.
    pub stats: CorpusStats,
}

/// Builds a [`Vocabulary`] from caption text.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    /// Builder options.
    pub options: VocabBuilderOptions,

    /// The compiled word splitter.
    tokenizer: WordTokenizer,
}

impl VocabBuilder {
    /// Initializes a [`VocabBuilder`].
    pub fn init(options: VocabBuilderOptions) -> Result<Self> {
        let tokenizer = WordTokenizer::from_pattern(&options.pattern)?;
        log::debug!("{options:?}");
        Ok(Self { options, tokenizer })
    }

    /// Count, rank, and select a vocabulary from a caption iterator.
    ///
    /// Every caption is consumed exactly once.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, captions)))]
    pub fn build_from_captions<I>(
        &self,
        captions: I,
    ) -> Result<BuildResults>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counter: WordCounter = WordCounter::from_tokenizer(self.tokenizer.clone());
        counter.update_from_samples(captions);

        let num_captions = counter.num_samples();
        let counts = counter.release();
        let stats = CorpusStats {
            num_captions,
            num_tokens: counts.total(),
            num_unique_tokens: counts.len(),
        };
        log::info!(
            "Counted {} tokens ({} unique) across {} captions",
            stats.num_tokens,
            stats.num_unique_tokens,
            stats.num_captions
        );

        let vocab = select_vocabulary(&counts, self.options.max_tokens, &self.options.specials)?;
        log::info!(
            "Selected {} tokens ({} specials + {} words)",
            vocab.len(),
            self.options.specials.len(),
            vocab.len() - self.options.specials.len()
        );

        Ok(BuildResults { vocab, stats })
    }

    /// Build a vocabulary from a loaded corpus.
    pub fn build_from_corpus(
        &self,
        corpus: &CaptionCorpus,
    ) -> Result<BuildResults> {
        self.build_from_captions(corpus.iter())
    }
}

/// Outcome of [`build_vocab`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    /// The number of entries written.
    pub vocab_size: usize,

    /// Where the vocabulary was written.
    pub output_path: PathBuf,

    /// Counting statistics.
    pub stats: CorpusStats,
}

impl fmt::Display for BuildSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "Built vocab with {} tokens → saved to {}",
            self.vocab_size,
            self.output_path.display()
        )
    }
}

/// Load captions, build a vocabulary, and write it as JSON.
///
/// Nothing is written unless the vocabulary was fully built.
///
/// # Arguments
/// * `captions_path` - the caption dataset to read.
/// * `output_path` - where to write the ``{ token: id }`` JSON.
/// * `options` - builder options.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn build_vocab<P, Q>(
    captions_path: P,
    output_path: Q,
    options: VocabBuilderOptions,
) -> Result<BuildSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let builder = options.init()?;
    let corpus = CaptionCorpus::from_path(captions_path)?;

    let BuildResults { vocab, stats } = builder.build_from_corpus(&corpus)?;
    drop(corpus);

    let output_path = output_path.as_ref();
    save_vocabulary_to_path(&vocab, output_path)?;

    Ok(BuildSummary {
        vocab_size: vocab.len(),
        output_path: output_path.to_path_buf(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VocabError;
    use crate::vocab::io::load_vocabulary_from_path;

    fn write_dataset(
        dir: &Path,
        captions: &[&str],
    ) -> PathBuf {
        let annotations: Vec<String> = captions
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    r#"{{"id": {i}, "image_id": 7, "caption": {}}}"#,
                    serde_json::to_string(c).unwrap()
                )
            })
            .collect();
        let doc = format!(
            r#"{{"images": [], "annotations": [{}]}}"#,
            annotations.join(", ")
        );
        let path = dir.join("captions.json");
        std::fs::write(&path, doc).unwrap();
        path
    }

    #[test]
    fn test_default_options() {
        let options = VocabBuilderOptions::default();
        assert_eq!(options.max_tokens, 10_000);
        assert_eq!(options.pattern, crate::WORD_PATTERN);
        assert_eq!(options.specials, SpecialTokens::default());
    }

    #[test]
    fn test_options_setters() {
        let options = VocabBuilderOptions::default()
            .with_max_tokens(5)
            .with_pattern("[a-z]+")
            .with_specials(SpecialTokens::new(["<pad>"]));
        assert_eq!(options.max_tokens, 5);
        assert_eq!(options.pattern, "[a-z]+");
        assert_eq!(options.specials.iter().collect::<Vec<_>>(), vec!["<pad>"]);
    }

    #[test]
    fn test_init_rejects_bad_pattern() {
        let res = VocabBuilderOptions::default().with_pattern("(").init();
        assert!(matches!(res, Err(VocabError::Argument(_))));
    }

    #[test]
    fn test_build_from_captions() {
        let builder = VocabBuilderOptions::default()
            .with_max_tokens(3)
            .init()
            .unwrap();
        let BuildResults { vocab, stats } = builder
            .build_from_captions(["A cat.", "A CAT sat.", "A dog."])
            .unwrap();

        assert_eq!(
            vocab.tokens(),
            ["[PAD]", "[START]", "[END]", "[UNK]", "a", "cat", "sat"]
        );
        assert_eq!(
            stats,
            CorpusStats {
                num_captions: 3,
                num_tokens: 7,
                num_unique_tokens: 4,
            }
        );
    }

    #[test]
    fn test_build_vocab_end_to_end() {
        let dir = tempdir::TempDir::new("capvocab_build").unwrap();
        let captions = write_dataset(dir.path(), &["A cat.", "A CAT sat.", "A dog."]);
        let output = dir.path().join("vocab.json");

        let summary = build_vocab(
            &captions,
            &output,
            VocabBuilderOptions::default().with_max_tokens(3),
        )
        .unwrap();
        assert_eq!(summary.vocab_size, 7);
        assert_eq!(summary.output_path, output);
        assert!(summary.to_string().contains("7 tokens"));
        assert!(summary.to_string().contains("vocab.json"));

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "{\n  \"[PAD]\": 0,\n  \"[START]\": 1,\n  \"[END]\": 2,\n  \"[UNK]\": 3,\n  \"a\": 4,\n  \"cat\": 5,\n  \"sat\": 6\n}"
        );

        let loaded = load_vocabulary_from_path(&output).unwrap();
        assert_eq!(loaded.get_token(6), Some("sat"));
    }

    #[test]
    fn test_build_vocab_empty_annotations() {
        let dir = tempdir::TempDir::new("capvocab_build").unwrap();
        let captions = write_dataset(dir.path(), &[]);
        let output = dir.path().join("vocab.json");

        let summary = build_vocab(&captions, &output, Default::default()).unwrap();
        assert_eq!(summary.vocab_size, 4);
        assert_eq!(summary.stats, CorpusStats::default());

        let loaded = load_vocabulary_from_path(&output).unwrap();
        assert_eq!(loaded.tokens(), ["[PAD]", "[START]", "[END]", "[UNK]"]);
    }

    #[test]
    fn test_build_vocab_missing_annotations_writes_nothing() {
        let dir = tempdir::TempDir::new("capvocab_build").unwrap();
        let captions = dir.path().join("captions.json");
        std::fs::write(&captions, r#"{"images": []}"#).unwrap();
        let output = dir.path().join("vocab.json");

        let res = build_vocab(&captions, &output, Default::default());
        assert!(matches!(res, Err(VocabError::DataFormat(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_vocab_missing_input_is_io_error() {
        let dir = tempdir::TempDir::new("capvocab_build").unwrap();
        let output = dir.path().join("vocab.json");

        let res = build_vocab(dir.path().join("absent.json"), &output, Default::default());
        assert!(matches!(res, Err(VocabError::Io { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_vocab_unwritable_output_is_io_error() {
        let dir = tempdir::TempDir::new("capvocab_build").unwrap();
        let captions = write_dataset(dir.path(), &["A cat."]);
        let output = dir.path().join("missing_dir").join("vocab.json");

        let res = build_vocab(&captions, &output, Default::default());
        assert!(matches!(res, Err(VocabError::Io { .. })));
    }
}
