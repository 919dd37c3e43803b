//! Secret recovery by Lagrange interpolation.

use super::{resolve_prime, Share};
use crate::{Error, Result};
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use sss_math::zq::{modular_divide, reduce};

/// Recovers the secret from `shares` by Lagrange interpolation at 0.
///
/// When `prime` is `None`, [`DEFAULT_PRIME`](super::DEFAULT_PRIME) is used.
/// The order of the shares does not matter, but their x-values must be
/// pairwise distinct.
///
/// The number of shares is not checked against the threshold: with fewer
/// shares than the threshold, this returns a well-defined element of
/// `[0, prime)` which is not the secret.
pub fn recover_secret(shares: &[Share], prime: Option<&BigInt>) -> Result<BigInt> {
    let prime = resolve_prime(prime)?;
    if shares.is_empty() {
        return Err(Error::NoShares);
    }
    if let Some(x) = shares.iter().map(Share::x).duplicates().next() {
        tracing::debug!(x, "rejecting duplicate share");
        return Err(Error::DuplicateX(x));
    }

    tracing::debug!(
        shares = shares.len(),
        prime_bits = prime.bits(),
        "recovering secret"
    );

    let (x_shares, y_shares): (Vec<_>, Vec<_>) = shares
        .iter()
        .map(|share| (BigInt::from(share.x()), share.y()))
        .unzip();
    interpolate(&BigInt::zero(), &x_shares, &y_shares, &prime)
}

/// Evaluates at `x` the polynomial of lowest degree going through the points
/// `(x_shares[i], y_shares[i])`.
///
/// All the fractions are put over the common denominator `den`, the product
/// of the per-point denominators, so that a single division happens at the
/// end of each term.
fn interpolate(
    x: &BigInt,
    x_shares: &[BigInt],
    y_shares: &[&BigInt],
    prime: &BigInt,
) -> Result<BigInt> {
    debug_assert_eq!(x_shares.len(), y_shares.len());

    let mut nums = Vec::with_capacity(x_shares.len());
    let mut dens = Vec::with_capacity(x_shares.len());
    for (i, xi) in x_shares.iter().enumerate() {
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for (_, xj) in x_shares.iter().enumerate().filter(|(j, _)| *j != i) {
            num *= x - xj;
            den *= xi - xj;
        }
        if reduce(&den, prime).is_zero() {
            return Err(Error::SingularInterpolation(format!(
                "the denominator for x = {} vanishes modulo {}",
                xi, prime
            )));
        }
        nums.push(num);
        dens.push(den);
    }

    let den: BigInt = dens.iter().product();
    if reduce(&den, prime).is_zero() {
        return Err(Error::SingularInterpolation(format!(
            "the common denominator vanishes modulo {}",
            prime
        )));
    }

    let mut num = BigInt::zero();
    for ((ni, di), yi) in nums.iter().zip(&dens).zip(y_shares) {
        let term = reduce(&(ni * &den * *yi), prime);
        num += divide(&term, di, prime)?;
    }

    Ok(reduce(&divide(&num, &den, prime)?, prime))
}

/// Field division, reporting a non-invertible denominator as a singular
/// interpolation.
fn divide(num: &BigInt, den: &BigInt, prime: &BigInt) -> Result<BigInt> {
    modular_divide(num, den, prime).map_err(|e| match e {
        sss_math::Error::NotInvertible(..) => Error::SingularInterpolation(e.to_string()),
        e => Error::MathError(e),
    })
}
