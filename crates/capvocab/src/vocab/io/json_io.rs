//! # JSON ``{ token: id }`` Vocabulary IO
//!
//! The file is a flat JSON object, pretty-printed with 2-space indentation,
//! with keys in id order.

use crate::errors::{Result, VocabError};
use crate::types::TokenId;
use crate::vocab::Vocabulary;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a [`Vocabulary`] from a ``{ token: id }`` JSON document.
pub fn load_vocabulary_from_str(text: &str) -> Result<Vocabulary> {
    let map: ahash::AHashMap<String, TokenId> = serde_json::from_str(text)
        .map_err(|e| VocabError::DataFormat(format!("invalid vocabulary file: {e}")))?;
    Vocabulary::from_token_map(map)
}

/// Load a [`Vocabulary`] from a ``{ token: id }`` JSON file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocabulary_from_path<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| VocabError::io(path, e))?;
    load_vocabulary_from_str(&text)
}

/// Save a [`Vocabulary`] to a [`Write`] writer.
pub fn save_vocabulary_to_writer<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, vocab)?;
    writer.flush()
}

/// Save a [`Vocabulary`] to a JSON file, replacing any existing file.
///
/// The parent directory must already exist.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab, path)))]
pub fn save_vocabulary_to_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| VocabError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    save_vocabulary_to_writer(vocab, &mut writer).map_err(|e| VocabError::io(path, e))?;
    log::info!("Wrote {} tokens to {}", vocab.len(), path.display());
    Ok(())
}
