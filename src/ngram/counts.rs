use std::collections::BTreeMap;

/// Occurrence counts of every n-gram of one fixed order in one token sequence.
///
/// Keys borrow the token slice directly, so an n-gram's identity is its exact
/// ordered tuple of tokens. The ordered map keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramCounts<'a> {
    order: usize,
    counts: BTreeMap<&'a [String], usize>,
}

impl<'a> NgramCounts<'a> {
    /// Count every contiguous n-gram of length `order` in `tokens`.
    pub fn from_tokens(tokens: &'a [String], order: usize) -> Self {
        let mut counts = BTreeMap::new();
        for gram in super::ngrams(tokens, order) {
            *counts.entry(gram).or_insert(0) += 1;
        }
        Self { order, counts }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Occurrences of `gram`, 0 if absent.
    pub fn get(&self, gram: &[String]) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Total number of n-gram occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct n-grams.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [String], usize)> + '_ {
        self.counts.iter().map(|(gram, count)| (*gram, *count))
    }
}
