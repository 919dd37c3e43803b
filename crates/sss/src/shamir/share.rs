use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// A share of a secret: the point `(x, y)` of the sharing polynomial.
///
/// `x` is the evaluation point (the share index, never 0) and `y` the value
/// of the polynomial at `x` modulo the prime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    x: u64,
    y: BigInt,
}

impl Share {
    /// Creates a share from its coordinates.
    pub fn new(x: u64, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Returns the evaluation point of the share.
    pub const fn x(&self) -> u64 {
        self.x
    }

    /// Returns the value of the polynomial at the evaluation point.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<(u64, BigInt)> for Share {
    fn from((x, y): (u64, BigInt)) -> Self {
        Self::new(x, y)
    }
}

impl From<Share> for (u64, BigInt) {
    fn from(share: Share) -> Self {
        (share.x, share.y)
    }
}

impl Display for Share {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}
