//! # Special Tokens

/// Padding token.
pub const PAD_TOKEN: &str = "[PAD]";

/// Sequence start token.
pub const START_TOKEN: &str = "[START]";

/// Sequence end token.
pub const END_TOKEN: &str = "[END]";

/// Out-of-vocabulary token.
pub const UNK_TOKEN: &str = "[UNK]";

/// The default special tokens, in id order.
pub const DEFAULT_SPECIAL_TOKENS: [&str; 4] = [PAD_TOKEN, START_TOKEN, END_TOKEN, UNK_TOKEN];

/// Ordered reserved tokens; these always take the lowest ids.
///
/// Specials are synthetic, they are never drawn from corpus counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialTokens {
    tokens: Vec<String>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIAL_TOKENS)
    }
}

impl SpecialTokens {
    /// Build a special token list; repeated tokens keep their first position.
    pub fn new<W, S>(tokens: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut specials = Self { tokens: Vec::new() };
        for token in tokens {
            specials.push(token.as_ref());
        }
        specials
    }

    /// Append a special token, if not already present.
    pub fn push(
        &mut self,
        token: &str,
    ) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// The number of special tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no special tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` is one of the specials.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Iterate over the specials in id order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let specials = SpecialTokens::default();
        assert_eq!(specials.len(), 4);
        assert_eq!(
            specials.iter().collect::<Vec<_>>(),
            vec!["[PAD]", "[START]", "[END]", "[UNK]"]
        );
        assert!(specials.contains("[UNK]"));
        assert!(!specials.contains("unk"));
    }

    #[test]
    fn test_new_dedups() {
        let specials = SpecialTokens::new(["<s>", "</s>", "<s>"]);
        assert_eq!(specials.iter().collect::<Vec<_>>(), vec!["<s>", "</s>"]);

        let empty = SpecialTokens::new(Vec::<String>::new());
        assert!(empty.is_empty());
    }
}
