#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision signed integer arithmetic."]

mod bigint;
mod bitwise;
mod cmp;
mod decimal;
mod divide;
mod error;
mod magnitude;
mod ops;

pub use bigint::{BigInt, DoubleLimb, Limb, LIMB_BITS};
pub use error::BigIntError;
