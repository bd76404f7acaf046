//! # Caption Vocabulary
//!
//! Build a fixed-size ``{ token -> id }`` vocabulary from an image caption corpus.
//!
//! The pipeline is a single pass:
//! * load captions from a ``{"annotations": [{"caption": ...}]}`` document,
//! * split each caption into lowercase word tokens and count them,
//! * keep the `max_tokens` most frequent words (stable on first-seen order),
//! * prepend the reserved special tokens,
//! * write the ``{ token -> id }`` map as pretty JSON.
//!
//! ```rust,ignore
//! let options = VocabBuilderOptions::default().with_max_tokens(10_000);
//! let summary = build_vocab("captions_train2017.json", "vocab.json", options)?;
//! println!("{summary}");
//! ```
#![warn(missing_docs, unused)]

pub mod builder;
pub mod dataset;
pub mod errors;
pub mod tokenize;
pub mod types;
pub mod vocab;
pub mod word_count;

pub use builder::{BuildResults, BuildSummary, VocabBuilder, VocabBuilderOptions, build_vocab};
pub use errors::{Result, VocabError};

/// Default regex pattern for splitting captions into words.
///
/// A word is a run of letters, numbers, and `_`. Combining marks and joiners
/// are separators, so `"cafe\u{301}"` yields `"cafe"`.
pub const WORD_PATTERN: &str = r"[\p{L}\p{N}_]+";

/// Default number of corpus words kept in the vocabulary, not counting specials.
pub const DEFAULT_MAX_TOKENS: usize = 10_000;

/// Default output path for the vocabulary file.
pub const DEFAULT_OUTPUT_PATH: &str = "vocab.json";
