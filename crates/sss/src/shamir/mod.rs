//! Shamir secret sharing over a prime field.
//!
//! Shares are generated by evaluating a random polynomial whose constant term
//! is the secret, and the secret is recovered by Lagrange interpolation at 0.

mod generate;
mod parameters;
mod recover;
mod share;
mod traits;

pub use generate::{generate_shares, generate_shares_with_rng};
pub use parameters::{
    default_prime, ShamirSecretSharing, ShamirSecretSharingBuilder, DEFAULT_PRIME,
};
pub use recover::recover_secret;
pub use share::Share;
pub use traits::SecretSharer;

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::Signed;
use std::borrow::Cow;

/// Resolves an optional prime to the modulus to use, defaulting to
/// [`DEFAULT_PRIME`].
pub(crate) fn resolve_prime(prime: Option<&BigInt>) -> Result<Cow<'_, BigInt>> {
    let prime = prime.map_or_else(|| Cow::Owned(default_prime()), Cow::Borrowed);
    if !prime.is_positive() {
        return Err(Error::InvalidPrime(format!(
            "the modulus {} is not positive",
            prime
        )));
    }
    Ok(prime)
}
