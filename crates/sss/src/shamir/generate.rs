//! Share generation.

use super::{resolve_prime, Share};
use crate::{Error, Result};
use num_bigint::{BigInt, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sss_math::poly::evaluate;

/// Splits `secret` into `total` shares, any `threshold` of which recover it.
///
/// The random coefficients of the sharing polynomial are drawn from a
/// ChaCha20 generator freshly seeded from the operating system for this call
/// only. When `prime` is `None`, [`DEFAULT_PRIME`](super::DEFAULT_PRIME) is
/// used.
///
/// The shares are returned in order, with x-values `1..=total`. Returns an
/// error if `threshold` is 0 or larger than `total`; in that case no
/// randomness is drawn.
///
/// The prime is assumed to be a prime larger than `secret` and `total`.
pub fn generate_shares(
    secret: &BigInt,
    threshold: usize,
    total: usize,
    prime: Option<&BigInt>,
) -> Result<Vec<Share>> {
    validate_threshold(threshold, total)?;
    let prime = resolve_prime(prime)?;
    let mut rng = ChaCha20Rng::from_entropy();
    Ok(split(secret, threshold, total, &prime, &mut rng))
}

/// Splits `secret` into `total` shares using the random number generator
/// `rng` for the coefficients of the sharing polynomial.
///
/// See [`generate_shares`].
pub fn generate_shares_with_rng<R: RngCore + CryptoRng>(
    secret: &BigInt,
    threshold: usize,
    total: usize,
    prime: Option<&BigInt>,
    rng: &mut R,
) -> Result<Vec<Share>> {
    validate_threshold(threshold, total)?;
    let prime = resolve_prime(prime)?;
    Ok(split(secret, threshold, total, &prime, rng))
}

fn validate_threshold(threshold: usize, total: usize) -> Result<()> {
    if threshold == 0 || threshold > total {
        tracing::debug!(threshold, total, "rejecting threshold");
        return Err(Error::InvalidThreshold { threshold, total });
    }
    Ok(())
}

fn split<R: RngCore + CryptoRng>(
    secret: &BigInt,
    threshold: usize,
    total: usize,
    prime: &BigInt,
    rng: &mut R,
) -> Vec<Share> {
    tracing::debug!(
        threshold,
        total,
        prime_bits = prime.bits(),
        "generating shares"
    );

    // The secret is the constant term, the other coefficients are uniform in [0, prime).
    let zero = BigInt::zero();
    let mut coefficients = Vec::with_capacity(threshold);
    coefficients.push(secret.clone());
    coefficients.extend((1..threshold).map(|_| rng.gen_bigint_range(&zero, prime)));

    // x = 0 is where the secret lives, so it is never handed out.
    (1..=total as u64)
        .map(|x| Share::new(x, evaluate(&coefficients, &BigInt::from(x), prime)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_shares, generate_shares_with_rng};
    use crate::shamir::{default_prime, recover_secret};
    use crate::Error;
    use num_bigint::BigInt;
    use rand::{rngs::OsRng, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use std::error::Error as StdError;

    #[test]
    fn share_count_and_range() -> Result<(), Box<dyn StdError>> {
        let p = default_prime();
        let shares = generate_shares(&BigInt::from(1234), 3, 5, None)?;
        assert_eq!(shares.len(), 5);
        for (share, x) in shares.iter().zip(1u64..) {
            assert_eq!(share.x(), x);
            assert!(share.y() >= &BigInt::from(0) && share.y() < &p);
        }
        Ok(())
    }

    #[test]
    fn threshold_larger_than_total() {
        assert_eq!(
            generate_shares(&BigInt::from(1234), 6, 5, None),
            Err(Error::InvalidThreshold {
                threshold: 6,
                total: 5
            })
        );
    }

    #[test]
    fn zero_threshold() {
        assert!(matches!(
            generate_shares(&BigInt::from(1), 0, 5, None),
            Err(Error::InvalidThreshold { threshold: 0, .. })
        ));
    }

    #[test]
    fn invalid_modulus() {
        assert!(matches!(
            generate_shares(&BigInt::from(1), 2, 3, Some(&BigInt::from(0))),
            Err(Error::InvalidPrime(_))
        ));
    }

    #[test]
    fn threshold_one_is_constant() -> Result<(), Box<dyn StdError>> {
        let shares = generate_shares(&BigInt::from(42), 1, 4, Some(&BigInt::from(101)))?;
        assert!(shares.iter().all(|share| share.y() == &BigInt::from(42)));
        Ok(())
    }

    #[test]
    fn seeded_rng_is_reproducible() -> Result<(), Box<dyn StdError>> {
        let secret = BigInt::from(987654321);
        let a = generate_shares_with_rng(&secret, 3, 5, None, &mut ChaCha20Rng::seed_from_u64(0))?;
        let b = generate_shares_with_rng(&secret, 3, 5, None, &mut ChaCha20Rng::seed_from_u64(0))?;
        let c = generate_shares_with_rng(&secret, 3, 5, None, &mut ChaCha20Rng::seed_from_u64(1))?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(recover_secret(&c[2..], None)?, secret);
        Ok(())
    }

    #[test]
    fn os_rng() -> Result<(), Box<dyn StdError>> {
        let secret = BigInt::from(7);
        let shares = generate_shares_with_rng(&secret, 2, 3, None, &mut OsRng)?;
        assert_eq!(recover_secret(&shares[..2], None)?, secret);
        Ok(())
    }

    #[test]
    fn fresh_randomness_per_call() -> Result<(), Box<dyn StdError>> {
        let secret = BigInt::from(1234);
        let a = generate_shares(&secret, 3, 5, None)?;
        let b = generate_shares(&secret, 3, 5, None)?;
        assert_ne!(a, b);
        Ok(())
    }
}
