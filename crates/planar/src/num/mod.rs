//! Total ordering over mixed numeric representations.
//!
//! Purpose
//! - Compare values across representations (i64, f32, f64, `BigInt`,
//!   `BigRational`) under one consistent total order, including a fixed
//!   NaN/infinity policy, and build interval/range predicates on top.
//!
//! Policy
//! - NaN equals NaN and outranks every other value, including +∞.
//! - -∞ equals -∞ and is below everything; +∞ equals +∞ and is above
//!   everything finite.
//! - Mixed finite kinds are promoted to exact rationals and compared
//!   exactly; no tolerance, no coercion through a lossy type.

mod compare;
mod range;
mod value;

pub use compare::{compare, max_of, min_of};
pub use range::{Interval, NumRange};
pub use value::{Infinity, Num};

#[cfg(test)]
mod tests;
