#![crate_name = "sss_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for the sss secret sharing library.

use num_bigint::{BigInt, Sign};
use num_bigint_dig::{prime::probably_prime, BigUint as DigBigUint};
use num_traits::{One, Signed};

/// Number of Miller-Rabin rounds used by [`is_prime`].
const MILLER_RABIN_ROUNDS: usize = 20;

/// Returns whether `p` is (probably) a prime number.
///
/// Negative numbers, 0 and 1 are never prime.
pub fn is_prime(p: &BigInt) -> bool {
    if p.is_negative() || p <= &BigInt::one() {
        return false;
    }
    let (sign, bytes) = p.to_bytes_be();
    debug_assert_eq!(sign, Sign::Plus);
    probably_prime(&DigBigUint::from_bytes_be(&bytes), MILLER_RABIN_ROUNDS)
}

#[cfg(test)]
mod tests {
    use super::is_prime;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    #[test]
    fn small_primes() {
        let primes = [2u64, 3, 5, 7, 11, 13, 65537, 0xffffee001];
        for p in primes {
            assert!(is_prime(&BigInt::from(p)), "{p} should be prime");
        }
    }

    #[test]
    fn small_composites() {
        let composites = [0i64, 1, 4, 6, 9, 15, 561, 65535, -7];
        for c in composites {
            assert!(!is_prime(&BigInt::from(c)), "{c} should not be prime");
        }
    }

    #[test]
    fn mersenne_127() {
        let m127 = (BigInt::from(1u8) << 127) - 1;
        assert!(is_prime(&m127));
        assert!(!is_prime(&(m127 + 2)));
    }

    proptest! {
        #[test]
        fn products_are_composite(a in 2u32.., b in 2u32..) {
            let n = BigInt::from(a) * BigInt::from(b);
            prop_assert!(!is_prime(&n));
        }
    }
}
