use std::collections::BTreeMap;

use log::trace;

use crate::ngram::NgramCounts;
use crate::scoring::config::Smoothing;
use crate::types::{OrderPrecision, Sentence};

/// Modified ("clipped") n-gram precision of `candidate` for one order.
///
/// Each candidate n-gram counts at most as many times as it occurs in the
/// single reference where it occurs most often. Counts are never summed
/// across references.
///
/// A candidate shorter than `order` has no n-grams and gets precision 0.0,
/// with or without smoothing.
pub fn modified_precision(
    candidate: &Sentence,
    references: &[Sentence],
    order: usize,
    smoothing: Smoothing,
) -> OrderPrecision {
    let counts = NgramCounts::from_tokens(candidate.tokens(), order);
    let total = counts.total();

    if counts.is_empty() {
        trace!("order {order}: candidate has no n-grams");
        return OrderPrecision {
            order,
            matches: 0,
            total,
            precision: 0.0,
        };
    }

    // Max count of each candidate n-gram over all references
    let mut max_counts: BTreeMap<&[String], usize> = BTreeMap::new();
    for reference in references {
        let reference_counts = NgramCounts::from_tokens(reference.tokens(), order);
        for (gram, _) in counts.iter() {
            let count = reference_counts.get(gram);
            let max = max_counts.entry(gram).or_insert(0);
            if count > *max {
                *max = count;
            }
        }
    }

    let matches: usize = counts
        .iter()
        .map(|(gram, count)| {
            let max = max_counts.get(gram).copied().unwrap_or(0);
            count.min(max)
        })
        .sum();

    debug_assert!(matches <= total);

    let factor = smoothing.factor();
    let precision = (matches as f64 + factor) / (total as f64 + factor);

    trace!("order {order}: {matches}/{total} clipped matches, precision {precision}");

    OrderPrecision {
        order,
        matches,
        total,
        precision,
    }
}
