#![crate_name = "sss"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Shamir threshold secret sharing over a prime field GF(p).
//!
//! A secret is split into `n` shares such that any `threshold` of them
//! recover it exactly, while fewer reveal nothing about it.
//!
//! ```
//! use num_bigint::BigInt;
//! use sss::{generate_shares, recover_secret};
//!
//! let secret = BigInt::from(1234);
//! let shares = generate_shares(&secret, 3, 5, None)?;
//! assert_eq!(recover_secret(&shares[1..4], None)?, secret);
//! # Ok::<(), sss::Error>(())
//! ```

mod errors;

pub mod shamir;

pub use errors::{Error, Result};
pub use shamir::{
    default_prime, generate_shares, generate_shares_with_rng, recover_secret, SecretSharer,
    ShamirSecretSharing, ShamirSecretSharingBuilder, Share, DEFAULT_PRIME,
};
