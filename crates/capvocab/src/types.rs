//! # Common Types and Traits
use core::borrow::Borrow;
use core::hash::Hash;
use num_traits::{FromPrimitive, Num, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

/// A type that can be used as a word count.
pub trait CountType:
    Num + AddAssign + Default + Copy + Debug + Display + Send + Sync + Ord + FromPrimitive + ToPrimitive
{
}

impl<T> CountType for T where
    T: Num
        + AddAssign
        + Default
        + Copy
        + Debug
        + Display
        + Send
        + Sync
        + Ord
        + FromPrimitive
        + ToPrimitive
{
}

/// A type that can be used as a string key.
pub trait StringChunkType:
    for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash
{
}

impl<T> StringChunkType for T where
    T: for<'a> From<&'a str> + AsRef<str> + Borrow<str> + Debug + Clone + Send + Sync + Eq + Hash
{
}

/// Token id type; ids are positions in the vocabulary.
pub type TokenId = u32;

/// String key to [`TokenId`] map.
pub type WordToTokenMap = ahash::AHashMap<String, TokenId>;
