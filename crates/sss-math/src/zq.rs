//! Modular arithmetic over the integers modulo a (prime) modulus.
//!
//! The functions in this module operate on arbitrary precision integers and
//! never assume that their inputs are already reduced.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Runs the iterative extended Euclidean algorithm on `(a, n)`.
///
/// Returns the Bézout coefficients `(x, y)` such that `a * x + n * y = gcd(a, n)`.
/// Quotients are floored, so for a positive `n` every remainder after the
/// first step is non-negative and the returned coefficients satisfy the
/// identity with a non-negative gcd.
pub fn extended_gcd(a: &BigInt, n: &BigInt) -> (BigInt, BigInt) {
    let (mut a, mut n) = (a.clone(), n.clone());
    let (mut x, mut last_x) = (BigInt::zero(), BigInt::one());
    let (mut y, mut last_y) = (BigInt::one(), BigInt::zero());

    while !n.is_zero() {
        let (quot, rem) = a.div_mod_floor(&n);
        a = std::mem::replace(&mut n, rem);

        let next_x = &last_x - &quot * &x;
        last_x = std::mem::replace(&mut x, next_x);

        let next_y = &last_y - &quot * &y;
        last_y = std::mem::replace(&mut y, next_y);
    }

    (last_x, last_y)
}

/// Computes the inverse of `den` modulo `prime`.
///
/// The returned value is the x-component of [`extended_gcd`] and is not
/// necessarily reduced into `[0, prime)`. Returns an error if `den` is
/// congruent to 0 modulo `prime`, or more generally if `den` and `prime` are
/// not coprime.
pub fn modular_inverse(den: &BigInt, prime: &BigInt) -> Result<BigInt> {
    if !prime.is_positive() {
        return Err(Error::InvalidModulus(prime.clone()));
    }

    let (inv, _) = extended_gcd(den, prime);
    if (den * &inv).mod_floor(prime).is_one() {
        Ok(inv)
    } else {
        Err(Error::NotInvertible(den.clone(), prime.clone()))
    }
}

/// Computes `num / den` modulo `prime`, i.e. `num * den^-1`.
///
/// The product is not reduced: `den * modular_divide(num, den, prime)` is
/// congruent to `num` modulo `prime`, and callers reduce once they consume the
/// value.
pub fn modular_divide(num: &BigInt, den: &BigInt, prime: &BigInt) -> Result<BigInt> {
    Ok(num * modular_inverse(den, prime)?)
}

/// Reduces `a` into `[0, prime)`.
pub fn reduce(a: &BigInt, prime: &BigInt) -> BigInt {
    a.mod_floor(prime)
}
