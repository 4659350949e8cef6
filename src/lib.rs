//! Deterministic sentence-level BLEU scoring.
//!
//! `bleu-core` scores a candidate token sequence against one or more
//! references: clipped n-gram precision for every requested order, a
//! brevity penalty against the closest reference length, and a weighted
//! geometric mean of the precisions. Tokens are case-folded on copies of
//! the inputs, and identical inputs always produce bit-for-bit identical
//! scores.
//!
//! ```
//! let references = [
//!     vec!["the", "cat", "is", "on", "the", "mat"],
//!     vec!["there", "is", "a", "cat", "on", "the", "mat"],
//! ];
//! let score = bleu_core::compute(&["cat", "on", "mat"], &references, &[0.25; 4]).unwrap();
//! assert!((score - 0.3093).abs() < 1e-4);
//! ```
//!
//! See Papineni et al., "BLEU: a method for automatic evaluation of machine
//! translation", ACL 2002.

pub mod ngram;
pub mod scoring;
pub mod types;

pub use scoring::{compute, smooth, BleuConfig, BleuScorer, Smoothing, Weights};
pub use types::{BleuError, BleuScore};
