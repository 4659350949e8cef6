pub trait TokenNormalizer {
    fn normalize(&self, token: &str) -> String;
}

/// v0: Unicode lowercase, applied to every token of candidate and references.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowercase;

impl TokenNormalizer for Lowercase {
    fn normalize(&self, token: &str) -> String {
        token.to_lowercase()
    }
}
