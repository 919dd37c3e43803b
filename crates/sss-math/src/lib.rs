#![crate_name = "sss_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Finite field arithmetic for the sss secret sharing library.

mod errors;

pub mod poly;
pub mod zq;

pub use errors::{Error, Result};
