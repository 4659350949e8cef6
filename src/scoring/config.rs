use serde::{Deserialize, Serialize};

use crate::types::BleuError;

/// How modified precision is adjusted before it enters the log-sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    /// Plain clipped precision.
    #[default]
    None,
    /// Add 1 to the numerator and denominator of every order that has at
    /// least one candidate n-gram (Lin and Och 2004, section 4).
    AddOne,
}

impl Smoothing {
    pub fn factor(self) -> f64 {
        match self {
            Smoothing::None => 0.0,
            Smoothing::AddOne => 1.0,
        }
    }
}

/// Per-order weights. Index `i` weights order `i + 1`, and the length fixes
/// the highest order evaluated.
///
/// Weights are linear coefficients on `ln(precision)`. They are not
/// normalized; a vector that does not sum to 1 gives a generalized weighted
/// geometric mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Weights(Vec<f64>);

impl Weights {
    pub fn new(weights: Vec<f64>) -> Result<Self, BleuError> {
        if weights.is_empty() {
            return Err(BleuError::EmptyWeights);
        }
        for (i, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BleuError::InvalidWeight { order: i + 1, value });
            }
        }
        Ok(Weights(weights))
    }

    /// `max_order` equal weights of `1 / max_order`.
    pub fn uniform(max_order: usize) -> Result<Self, BleuError> {
        Self::new(vec![1.0 / max_order as f64; max_order])
    }

    pub fn max_order(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = BleuError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Weights::new(weights)
    }
}

impl From<Weights> for Vec<f64> {
    fn from(weights: Weights) -> Self {
        weights.0
    }
}

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BleuConfig {
    pub weights: Weights,
    #[serde(default)]
    pub smoothing: Smoothing,
}

impl BleuConfig {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            smoothing: Smoothing::None,
        }
    }

    pub fn uniform(max_order: usize) -> Result<Self, BleuError> {
        Ok(Self::new(Weights::uniform(max_order)?))
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

impl Default for BleuConfig {
    /// BLEU-4: orders 1 through 4 weighted 0.25 each, no smoothing.
    fn default() -> Self {
        Self::new(Weights(vec![0.25; 4]))
    }
}
