pub mod identifiers;
pub mod score;
pub mod sentence;

pub use identifiers::InputDigest;
pub use score::{BleuError, BleuScore, OrderPrecision};
pub use sentence::Sentence;
