use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that an element has no inverse modulo the given modulus.
    #[error("{0} is not invertible modulo {1}")]
    NotInvertible(BigInt, BigInt),

    /// Indicates an invalid modulus.
    #[error("Invalid modulus: {0}")]
    InvalidModulus(BigInt),
}
