//! Deterministic value generator
//!
//! Maps a seed string to exactly one synthetic value of a category.
//! The seed string is hashed with SHA-256 into a 32-byte rng seed and a
//! fresh `StdRng` is built for every call, so the same seed yields the
//! same value regardless of call history. There is no shared rng state
//! to interleave, which makes the generator safe to share across
//! threads behind `&self`.

use super::corpus::{FakerCorpus, FieldCategory, ValueCorpus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// Generator producing one corpus value per (category, seed) pair
pub struct ValueGenerator {
    corpus: Box<dyn ValueCorpus>,
}

impl ValueGenerator {
    /// Create a generator over the default faker-backed corpus
    pub fn new() -> Self {
        Self::with_corpus(Box::new(FakerCorpus::new()))
    }

    /// Create a generator over a caller-supplied corpus
    pub fn with_corpus(corpus: Box<dyn ValueCorpus>) -> Self {
        Self { corpus }
    }

    /// Generate the value for `seed` in `category`
    ///
    /// Pure function of its arguments: same seed, same category, same
    /// corpus ⇒ bit-identical output, within and across runs.
    pub fn generate(&self, category: FieldCategory, seed: &str) -> String {
        let mut rng = StdRng::from_seed(Self::rng_seed(seed));
        self.corpus.draw(category, &mut rng)
    }

    /// Derive the 32-byte rng seed from a seed string
    fn rng_seed(seed: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.finalize().into()
    }
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}
