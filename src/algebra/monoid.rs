//! Monoid trait and concrete operators
//!
//! Laws: `combine` must be associative and `identity` must be neutral on
//! both sides. The segment tree relies on both; nothing checks them at
//! runtime beyond the unit tests below.

use std::fmt::Debug;
use std::marker::PhantomData;

/// An associative combine operator with an identity element.
///
/// Implementors are zero-sized markers (`Sum<i64>`, `Min<u32>`, ...) so a
/// tree can be parameterized by operator without storing one.
pub trait Monoid {
    /// Element and aggregate type.
    type Value: Clone + PartialEq + Debug;

    /// The neutral element: `combine(&identity(), &x) == x`.
    fn identity() -> Self::Value;

    /// Merge the aggregates of two adjacent ranges.
    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Addition, with identity 0.
#[derive(Debug, Clone, Copy)]
pub struct Sum<T>(PhantomData<T>);

/// Minimum, with the type's maximum value as identity.
#[derive(Debug, Clone, Copy)]
pub struct Min<T>(PhantomData<T>);

/// Maximum, with the type's minimum value as identity.
#[derive(Debug, Clone, Copy)]
pub struct Max<T>(PhantomData<T>);

/// Greatest common divisor over unsigned integers, with identity 0
/// (`gcd(0, x) == x`).
#[derive(Debug, Clone, Copy)]
pub struct Gcd<T>(PhantomData<T>);

macro_rules! impl_ordered_monoids {
    ($($t:ty),* $(,)?) => {$(
        impl Monoid for Sum<$t> {
            type Value = $t;

            fn identity() -> $t {
                0
            }

            fn combine(a: &$t, b: &$t) -> $t {
                a + b
            }
        }

        impl Monoid for Min<$t> {
            type Value = $t;

            fn identity() -> $t {
                <$t>::MAX
            }

            fn combine(a: &$t, b: &$t) -> $t {
                *a.min(b)
            }
        }

        impl Monoid for Max<$t> {
            type Value = $t;

            fn identity() -> $t {
                <$t>::MIN
            }

            fn combine(a: &$t, b: &$t) -> $t {
                *a.max(b)
            }
        }
    )*};
}

impl_ordered_monoids!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_gcd_monoid {
    ($($t:ty),* $(,)?) => {$(
        impl Monoid for Gcd<$t> {
            type Value = $t;

            fn identity() -> $t {
                0
            }

            fn combine(a: &$t, b: &$t) -> $t {
                let (mut a, mut b) = (*a, *b);
                while b != 0 {
                    let r = a % b;
                    a = b;
                    b = r;
                }
                a
            }
        }
    )*};
}

impl_gcd_monoid!(u8, u16, u32, u64, u128, usize);
