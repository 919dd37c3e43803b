use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates an error in the underlying field arithmetic.
    #[error("{0}")]
    MathError(#[from] sss_math::Error),

    /// Indicates that the threshold is zero or larger than the number of
    /// shares to generate.
    #[error("Threshold {threshold} must be between 1 and the number of shares {total}")]
    InvalidThreshold {
        /// The requested threshold.
        threshold: usize,
        /// The requested number of shares.
        total: usize,
    },

    /// Indicates that two shares supplied for recovery have the same x-value.
    #[error("Duplicate share for x = {0}")]
    DuplicateX(u64),

    /// Indicates that a Lagrange denominator vanishes modulo the prime.
    #[error("Singular interpolation: {0}")]
    SingularInterpolation(String),

    /// Indicates that no share was supplied for recovery.
    #[error("No shares provided")]
    NoShares,

    /// Indicates that the modulus cannot define the field.
    #[error("Invalid prime: {0}")]
    InvalidPrime(String),
}
