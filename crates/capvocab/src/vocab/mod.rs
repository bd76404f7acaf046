//! # Vocabulary

pub mod io;
pub mod selection;
pub mod special_vocab;
pub mod vocabulary;

pub use selection::select_vocabulary;
pub use special_vocab::{
    DEFAULT_SPECIAL_TOKENS, END_TOKEN, PAD_TOKEN, START_TOKEN, SpecialTokens, UNK_TOKEN,
};
pub use vocabulary::Vocabulary;
