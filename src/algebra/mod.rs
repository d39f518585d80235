//! Combine operators for range aggregation
//!
//! A range query merges the values of two adjacent sub-ranges into a
//! summary for their union. Any associative operator with an identity
//! element works; the segment tree is generic over the operator, while the
//! Fenwick tree is tied to sum (its range query needs subtraction).

mod monoid;

pub use monoid::{Gcd, Max, Min, Monoid, Sum};
