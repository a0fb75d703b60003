use bitcoin::secp256k1::{All, Secp256k1, SecretKey};
use rand::{rngs::ThreadRng, RngCore};

use crate::types::KeyPair;

/// Produces fresh key pairs for a batch.
pub trait KeySource {
    fn generate(&mut self, count: usize) -> Vec<KeyPair>;
}

/// Draws every secret from an RNG. No duplicate check is done; collisions are
/// left to the 256-bit key space.
pub struct RandomKeySource<R: RngCore = ThreadRng> {
    secp: Secp256k1<All>,
    rng: R,
}

impl RandomKeySource {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomKeySource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> RandomKeySource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { secp: Secp256k1::new(), rng }
    }
}

impl<R: RngCore> KeySource for RandomKeySource<R> {
    fn generate(&mut self, count: usize) -> Vec<KeyPair> {
        (0..count).map(|_| KeyPair::from_secret_key(&self.secp, SecretKey::new(&mut self.rng))).collect()
    }
}
