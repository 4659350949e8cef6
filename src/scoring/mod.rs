pub mod brevity;
pub mod config;
pub mod normalize;
pub mod precision;

use log::{debug, trace};

use crate::types::{BleuError, BleuScore, InputDigest, OrderPrecision, Sentence};
pub use brevity::{brevity_penalty, closest_reference_length};
pub use config::{BleuConfig, Smoothing, Weights};
pub use normalize::{Lowercase, TokenNormalizer};
pub use precision::modified_precision;

pub struct BleuScorer<N = Lowercase> {
	config: BleuConfig,
	normalizer: N,
}

impl Default for BleuScorer<Lowercase> {
	fn default() -> Self {
		Self::new(BleuConfig::default())
	}
}

impl BleuScorer<Lowercase> {
	pub fn new(config: BleuConfig) -> Self {
		Self {
			config,
			normalizer: Lowercase,
		}
	}
}

impl<N> BleuScorer<N>
where
	N: TokenNormalizer,
{
	pub fn with_normalizer(config: BleuConfig, normalizer: N) -> Self {
		Self { config, normalizer }
	}

	pub fn config(&self) -> &BleuConfig {
		&self.config
	}

	/// Score `candidate` against `references`.
	///
	/// Inputs are copied and normalized; the caller's tokens are left as is.
	pub fn score<T, R>(&self, candidate: &[T], references: &[R]) -> Result<BleuScore, BleuError>
	where
		T: AsRef<str>,
		R: AsRef<[T]>,
	{
		if references.is_empty() {
			return Err(BleuError::EmptyReferences);
		}

		// 1. Normalization Phase
		let candidate = Sentence::normalized(candidate, &self.normalizer);
		let references: Vec<Sentence> = references
			.iter()
			.map(|reference| Sentence::normalized(reference.as_ref(), &self.normalizer))
			.collect();

		Ok(self.score_sentences(&candidate, &references))
	}

	/// Score already-normalized sentences. `references` must be non-empty.
	fn score_sentences(&self, candidate: &Sentence, references: &[Sentence]) -> BleuScore {
		let input_digest = InputDigest::from_inputs(&self.config, candidate, references);
		let weights = self.config.weights.as_slice();
		let candidate_length = candidate.len();
		let reference_length = closest_reference_length(candidate_length, references).unwrap_or(0);

		// 2. Precision Phase
		let precisions: Vec<OrderPrecision> = (1..=weights.len())
			.map(|order| modified_precision(candidate, references, order, self.config.smoothing))
			.collect();

		// 3. Combination Phase
		// Fixed order 1..N so the sum is bit-for-bit reproducible.
		let mut log_sum = 0.0_f64;
		let mut overlap = 0;
		for (weight, p) in weights.iter().zip(&precisions) {
			if p.overlaps() {
				overlap += 1;
				log_sum += weight * p.precision.ln();
			}
		}

		let short_circuit = |reason: &str| {
			debug!("{reason}, scoring 0 (candidate_length={candidate_length})");
			BleuScore {
				score: 0.0,
				precisions: precisions.clone(),
				overlap,
				brevity_penalty: 0.0,
				candidate_length,
				reference_length,
				input_digest: input_digest.clone(),
			}
		};

		// ln(0) guards: nothing to match, or nothing matched
		if candidate.is_empty() {
			return short_circuit("empty candidate");
		}
		if overlap == 0 {
			return short_circuit("no n-gram overlap with any reference");
		}

		// 4. Brevity Phase
		let bp = brevity_penalty(candidate_length, reference_length);
		let score = bp * log_sum.exp();

		trace!("brevity penalty {bp} (c={candidate_length}, r={reference_length}), score {score}");

		BleuScore {
			score,
			precisions,
			overlap,
			brevity_penalty: bp,
			candidate_length,
			reference_length,
			input_digest,
		}
	}
}

fn score_with<T, R>(
	candidate: &[T],
	references: &[R],
	weights: &[f64],
	smoothing: Smoothing,
) -> Result<f64, BleuError>
where
	T: AsRef<str>,
	R: AsRef<[T]>,
{
	let config = BleuConfig::new(Weights::new(weights.to_vec())?).with_smoothing(smoothing);
	BleuScorer::new(config)
		.score(candidate, references)
		.map(|result| result.score)
}

/// BLEU score of `candidate` against `references`, without smoothing.
///
/// `weights[i]` weights n-grams of length `i + 1`; the number of weights is
/// the highest order evaluated.
pub fn compute<T, R>(candidate: &[T], references: &[R], weights: &[f64]) -> Result<f64, BleuError>
where
	T: AsRef<str>,
	R: AsRef<[T]>,
{
	score_with(candidate, references, weights, Smoothing::None)
}

/// Like [`compute`], with add-one smoothing so that a single order without
/// matches does not zero the score. Meant for sentence-level scoring.
pub fn smooth<T, R>(candidate: &[T], references: &[R], weights: &[f64]) -> Result<f64, BleuError>
where
	T: AsRef<str>,
	R: AsRef<[T]>,
{
	score_with(candidate, references, weights, Smoothing::AddOne)
}
