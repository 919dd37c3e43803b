//! Polynomials with coefficients modulo a prime.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Evaluates the polynomial with the given `coefficients` at `x` modulo `prime`.
///
/// `coefficients[i]` is the coefficient of degree `i`. The evaluation uses
/// Horner's method, starting from the highest degree coefficient and reducing
/// modulo `prime` after every step, so the result is always in `[0, prime)`.
/// An empty polynomial evaluates to 0.
///
/// Aborts if `prime` is zero.
pub fn evaluate(coefficients: &[BigInt], x: &BigInt, prime: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, c| (acc * x + c).mod_floor(prime))
}
