//! # Caption Dataset Loading
//!
//! Reads COCO-style caption annotation files:
//!
//! ```json
//! {"annotations": [{"image_id": 1, "caption": "A cat."}, ...], "images": [...]}
//! ```
//!
//! Only `annotations[*].caption` is consumed; all other fields are ignored.

use crate::errors::{Result, VocabError};
use serde::Deserialize;
use std::path::Path;

/// A single annotation record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Annotation {
    /// The caption text.
    pub caption: String,
}

/// The top-level caption dataset document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaptionDataset {
    /// The annotation records.
    pub annotations: Vec<Annotation>,
}

/// The captions of a dataset, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionCorpus {
    captions: Vec<String>,
}

impl From<CaptionDataset> for CaptionCorpus {
    fn from(dataset: CaptionDataset) -> Self {
        Self {
            captions: dataset
                .annotations
                .into_iter()
                .map(|ann| ann.caption)
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CaptionCorpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            captions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl CaptionCorpus {
    /// Parse a corpus from an in-memory JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let dataset: CaptionDataset = serde_json::from_slice(bytes)
            .map_err(|e| VocabError::DataFormat(format!("invalid caption dataset: {e}")))?;
        Ok(dataset.into())
    }

    /// Load a corpus from a JSON file.
    ///
    /// # Arguments
    /// * `path` - the path to the caption dataset.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| VocabError::io(path, e))?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let corpus = Self::from_json_slice(&bytes).map_err(|e| match e {
            VocabError::DataFormat(msg) => {
                VocabError::DataFormat(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        log::info!("Loaded {} captions from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// The number of captions.
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Returns `true` if there are no captions.
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// The captions as a slice.
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Iterate over the captions.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.captions.iter().map(String::as_str)
    }

    /// Release the captions.
    pub fn into_captions(self) -> Vec<String> {
        self.captions
    }
}
