use crate::types::Sentence;

/// Length of the reference closest in length to a candidate of
/// `candidate_length` tokens. Ties go to the earliest reference.
///
/// Returns `None` only for an empty reference slice.
pub fn closest_reference_length(candidate_length: usize, references: &[Sentence]) -> Option<usize> {
    // min_by_key keeps the first of equal keys
    references
        .iter()
        .map(Sentence::len)
        .min_by_key(|&length| length.abs_diff(candidate_length))
}

/// Brevity penalty for a candidate of length `c` against reference length `r`.
///
/// 1.0 when `c > r`, otherwise `exp(1 - r/c)`. A zero-length candidate has
/// no defined penalty and yields 0.0.
pub fn brevity_penalty(c: usize, r: usize) -> f64 {
    if c == 0 {
        return 0.0;
    }
    if c > r {
        1.0
    } else {
        (1.0 - r as f64 / c as f64).exp()
    }
}
