pub mod counts;

pub use counts::NgramCounts;

/// All contiguous n-grams of length `order`, in sequence order.
///
/// Yields nothing when `order` is 0 or longer than `tokens`.
pub fn ngrams(tokens: &[String], order: usize) -> impl Iterator<Item = &[String]> {
    // `windows(0)` panics
    let size = order.max(1);
    tokens
        .windows(size)
        .filter(move |_| order > 0)
}
