//! Parameters of a Shamir secret sharing scheme.

use super::{generate_shares, generate_shares_with_rng, recover_secret, SecretSharer, Share};
use crate::{Error, Result};
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use sss_util::is_prime;
use std::sync::Arc;

/// The default field modulus, the Mersenne prime 2^127 - 1.
pub const DEFAULT_PRIME: u128 = (1 << 127) - 1;

/// Returns [`DEFAULT_PRIME`] as a [`BigInt`].
pub fn default_prime() -> BigInt {
    BigInt::from(DEFAULT_PRIME)
}

/// A (threshold, share_amount) Shamir secret sharing scheme over GF(prime).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShamirSecretSharing {
    /// Minimum number of shares needed to recover the secret.
    threshold: usize,

    /// Number of shares to generate.
    share_amount: usize,

    /// Modulus of the field.
    prime: BigInt,
}

impl ShamirSecretSharing {
    /// Returns the threshold
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of shares generated by [`SecretSharer::split`]
    pub const fn share_amount(&self) -> usize {
        self.share_amount
    }

    /// Returns a reference to the field modulus
    pub fn prime(&self) -> &BigInt {
        &self.prime
    }
}

impl SecretSharer for ShamirSecretSharing {
    fn split(&self, secret: &BigInt) -> Result<Vec<Share>> {
        generate_shares(
            secret,
            self.threshold,
            self.share_amount,
            Some(&self.prime),
        )
    }

    fn split_with_rng<R: RngCore + CryptoRng>(
        &self,
        secret: &BigInt,
        rng: &mut R,
    ) -> Result<Vec<Share>> {
        generate_shares_with_rng(
            secret,
            self.threshold,
            self.share_amount,
            Some(&self.prime),
            rng,
        )
    }

    fn recover(&self, shares: &[Share]) -> Result<BigInt> {
        recover_secret(shares, Some(&self.prime))
    }
}

/// Builder for the parameters of a Shamir secret sharing scheme.
#[derive(Debug, Default)]
pub struct ShamirSecretSharingBuilder {
    threshold: usize,
    share_amount: usize,
    prime: Option<BigInt>,
}

impl ShamirSecretSharingBuilder {
    /// Creates a new instance of the builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the threshold. Must be between 1 and the number of shares.
    pub fn set_threshold(&mut self, threshold: usize) -> &mut Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of shares to generate.
    pub fn set_share_amount(&mut self, share_amount: usize) -> &mut Self {
        self.share_amount = share_amount;
        self
    }

    /// Sets the field modulus. Defaults to [`DEFAULT_PRIME`] when unset.
    pub fn set_prime(&mut self, prime: &BigInt) -> &mut Self {
        self.prime = Some(prime.clone());
        self
    }

    /// Sets the field modulus from its decimal representation.
    pub fn set_prime_str(&mut self, prime: &str) -> Result<&mut Self> {
        let prime = BigInt::parse_bytes(prime.as_bytes(), 10)
            .ok_or_else(|| Error::InvalidPrime(format!("cannot parse {:?}", prime)))?;
        self.prime = Some(prime);
        Ok(self)
    }

    /// Build a new `ShamirSecretSharing`.
    ///
    /// Only the threshold is validated; the modulus is trusted to be a prime
    /// larger than the secrets and the number of shares.
    pub fn build(&self) -> Result<ShamirSecretSharing> {
        if self.threshold == 0 || self.threshold > self.share_amount {
            return Err(Error::InvalidThreshold {
                threshold: self.threshold,
                total: self.share_amount,
            });
        }

        let prime = self.prime.clone().unwrap_or_else(default_prime);
        Ok(ShamirSecretSharing {
            threshold: self.threshold,
            share_amount: self.share_amount,
            prime,
        })
    }

    /// Build a new `ShamirSecretSharing` inside an `Arc`.
    pub fn build_arc(&self) -> Result<Arc<ShamirSecretSharing>> {
        self.build().map(Arc::new)
    }

    /// Build a new `ShamirSecretSharing`, additionally checking that the
    /// modulus is a prime larger than the number of shares.
    pub fn build_checked(&self) -> Result<ShamirSecretSharing> {
        let sss = self.build()?;
        if !is_prime(&sss.prime) {
            return Err(Error::InvalidPrime(format!("{} is not prime", sss.prime)));
        }
        if sss.prime <= BigInt::from(sss.share_amount) {
            return Err(Error::InvalidPrime(format!(
                "{} is not larger than the number of shares {}",
                sss.prime, sss.share_amount
            )));
        }
        Ok(sss)
    }
}
