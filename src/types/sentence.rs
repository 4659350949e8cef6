use serde::{Deserialize, Serialize};

use crate::scoring::TokenNormalizer;

/// An ordered sequence of normalized tokens.
///
/// Order is significant: n-grams are contiguous slices of this sequence.
/// A `Sentence` is always an owned copy, so normalizing never touches the
/// caller's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sentence(Vec<String>);

impl Sentence {
    /// Build a sentence from tokens that are already normalized.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Sentence(tokens.into_iter().map(Into::into).collect())
    }

    /// Copy `tokens` through `normalizer`.
    pub fn normalized<T, N>(tokens: &[T], normalizer: &N) -> Self
    where
        T: AsRef<str>,
        N: TokenNormalizer + ?Sized,
    {
        Sentence(
            tokens
                .iter()
                .map(|token| normalizer.normalize(token.as_ref()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for Sentence {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
