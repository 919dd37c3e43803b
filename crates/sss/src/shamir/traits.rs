//! Traits for secret sharing operations.

use super::Share;
use crate::Result;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};

/// Trait for threshold secret sharing schemes.
pub trait SecretSharer {
    /// Split a secret into shares, using a freshly seeded random source.
    fn split(&self, secret: &BigInt) -> Result<Vec<Share>>;

    /// Split a secret into shares, using `rng` as the random source.
    fn split_with_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &BigInt,
        rng: &mut R,
    ) -> Result<Vec<Share>>;

    /// Recover the secret from shares.
    fn recover(&self, shares: &[Share]) -> Result<BigInt>;
}
