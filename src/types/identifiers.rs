use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::scoring::BleuConfig;
use crate::types::sentence::Sentence;

/// Content hash of a scoring request: configuration plus normalized inputs.
///
/// Two requests that normalize to the same tokens under the same config
/// share a digest, so a stored score can be matched back to its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputDigest(String);

impl InputDigest {
    pub fn from_inputs(config: &BleuConfig, candidate: &Sentence, references: &[Sentence]) -> Self {
        let mut hasher = Sha256::new();

        // Hash the config (plain numbers and a unit enum, never fails)
        let config_json =
            serde_json::to_vec(config).unwrap_or_else(|_| format!("{config:?}").into_bytes());
        hasher.update(&config_json);

        update_sentence(&mut hasher, b'c', candidate);
        for reference in references {
            update_sentence(&mut hasher, b'r', reference);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        InputDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Length-prefix every token so ["ab", "c"] and ["a", "bc"] hash differently.
fn update_sentence(hasher: &mut Sha256, tag: u8, sentence: &Sentence) {
    hasher.update([tag]);
    hasher.update((sentence.len() as u64).to_le_bytes());
    for token in sentence.tokens() {
        hasher.update((token.len() as u64).to_le_bytes());
        hasher.update(token.as_bytes());
    }
}
