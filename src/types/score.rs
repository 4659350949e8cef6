use serde::{Deserialize, Serialize};

use crate::types::identifiers::InputDigest;

/// Clipped precision for a single n-gram order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPrecision {
    /// N-gram length, starting at 1.
    pub order: usize,
    /// Sum of candidate n-gram counts after clipping against the references.
    pub matches: usize,
    /// Number of n-grams in the candidate for this order.
    pub total: usize,
    /// `matches / total`, with the smoothing term applied to both sides.
    /// Exactly 0.0 when the candidate is shorter than `order`.
    pub precision: f64,
}

impl OrderPrecision {
    /// True if this order enters the weighted log-sum.
    pub fn overlaps(&self) -> bool {
        self.precision > 0.0
    }
}

/// The outcome of scoring one candidate against its references.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleuScore {
    pub score: f64,

    pub precisions: Vec<OrderPrecision>,
    /// Number of orders with nonzero precision.
    pub overlap: usize,

    /// 1.0 when the candidate is longer than the closest reference.
    /// 0.0 when scoring short-circuited before the penalty was computed.
    pub brevity_penalty: f64,
    pub candidate_length: usize,
    /// Length of the reference closest in length to the candidate.
    pub reference_length: usize,

    pub input_digest: InputDigest,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BleuError {
    #[error("Invalid input: at least one reference is required")]
    EmptyReferences,

    #[error("Invalid input: at least one n-gram weight is required")]
    EmptyWeights,

    #[error("Invalid input: weight for order {order} must be finite and non-negative, got {value}")]
    InvalidWeight { order: usize, value: f64 },
}
