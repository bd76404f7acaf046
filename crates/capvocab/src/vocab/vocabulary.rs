//! # Ordered ``{ token <-> id }`` Vocabulary

use crate::errors::{Result, VocabError};
use crate::types::{TokenId, WordToTokenMap};
use crate::vocab::special_vocab::UNK_TOKEN;
use ahash::AHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A frozen, ordered vocabulary.
///
/// A token's id is its zero-based position; there are no duplicate tokens.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Tokens in id order.
    tokens: Vec<String>,

    /// Map of ``{ token -> id }``.
    index: WordToTokenMap,
}

impl PartialEq for Vocabulary {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Vocabulary {}

impl Vocabulary {
    /// Build a vocabulary from tokens in id order.
    ///
    /// Fails with [`VocabError::DataFormat`] on a repeated token.
    pub fn from_tokens<W, S>(tokens: W) -> Result<Self>
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            let token = token.into();
            if vocab.index.contains_key(&token) {
                return Err(VocabError::DataFormat(format!(
                    "duplicate vocabulary token {token:?}"
                )));
            }
            let id = TokenId::try_from(vocab.tokens.len()).map_err(|_| {
                VocabError::DataFormat("vocabulary exceeds the token id range".to_string())
            })?;
            vocab.index.insert(token.clone(), id);
            vocab.tokens.push(token);
        }
        Ok(vocab)
    }

    /// Build a vocabulary from a ``{ token -> id }`` map.
    ///
    /// The ids must be exactly ``0..map.len()``.
    pub fn from_token_map<M, S>(map: M) -> Result<Self>
    where
        M: IntoIterator<Item = (S, TokenId)>,
        S: Into<String>,
    {
        let entries: Vec<(String, TokenId)> =
            map.into_iter().map(|(t, id)| (t.into(), id)).collect();
        let n = entries.len();

        let mut slots: Vec<Option<String>> = vec![None; n];
        for (token, id) in entries {
            let slot = slots.get_mut(id as usize).ok_or_else(|| {
                VocabError::DataFormat(format!("token {token:?} has id {id}, outside 0..{n}"))
            })?;
            if let Some(prev) = slot {
                return Err(VocabError::DataFormat(format!(
                    "id {id} is assigned to both {prev:?} and {token:?}"
                )));
            }
            *slot = Some(token);
        }

        // Every id is in range and distinct, so every slot is filled.
        Self::from_tokens(slots.into_iter().flatten())
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in id order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over ``(token, id)`` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.tokens
            .iter()
            .zip(0..)
            .map(|(token, id)| (token.as_str(), id))
    }

    /// Return the id for the token, if any.
    pub fn get_id(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.index.get(token).copied()
    }

    /// Return the token for the id, if any.
    pub fn get_token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Returns `true` if the token is in the vocabulary.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// The id of `[UNK]`, if present.
    pub fn unk_id(&self) -> Option<TokenId> {
        self.get_id(UNK_TOKEN)
    }

    /// Return the id for the token, falling back to the `[UNK]` id.
    pub fn token_id_or_unk(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.get_id(token).or_else(|| self.unk_id())
    }

    /// The ``{ token -> id }`` map.
    pub fn to_token_map(&self) -> WordToTokenMap {
        self.index.clone()
    }

    /// The ``{ id -> token }`` map.
    pub fn to_id_map(&self) -> AHashMap<TokenId, String> {
        self.iter()
            .map(|(token, id)| (id, token.to_string()))
            .collect()
    }
}

impl Serialize for Vocabulary {
    /// Serializes as a ``{ token: id }`` map, in id order.
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, id) in self.iter() {
            map.serialize_entry(token, &id)?;
        }
        map.end()
    }
}
