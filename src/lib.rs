//! # Range-Query Engine
//!
//! This library implements two classic range-query data structures over a
//! fixed-length indexed sequence, behind a common polymorphic interface:
//!
//! 1. **Segment tree**: recursive tree in a flat `4n` buffer; generic over
//!    any associative combine operator with an identity (sum, min, max, gcd)
//! 2. **Fenwick tree** (binary indexed tree): implicit tree navigated via
//!    lowbit chains; specialized for prefix sums
//!
//! Both support point update and range query in O(log n). The segment tree
//! trades 4x memory for operator generality; the Fenwick tree is leaner but
//! its range query only works for invertible aggregates (sum).
//!
//! ## Usage Example
//!
//! ```
//! use rangekit::{algebra::Sum, SegmentTree, FenwickTree};
//!
//! # fn main() -> Result<(), rangekit::RangeQueryError> {
//! let mut seg = SegmentTree::<Sum<i64>>::build(&[1, 3, 5, 7, 9, 11])?;
//! assert_eq!(seg.query(1, 3)?, 15);
//! seg.update(2, 10)?;
//! assert_eq!(seg.query(1, 3)?, 20);
//!
//! let mut fen = FenwickTree::build(&[1i64, 3, 5, 7, 9, 11])?;
//! assert_eq!(fen.query(3)?, 9);      // prefix sum, 1-indexed
//! fen.update(2, 2)?;                 // add a delta, not a replacement
//! assert_eq!(fen.range_sum(1, 3)?, 11);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - leaves first, structures on top
pub mod util;         // Index and range validation
pub mod algebra;      // Combine operators (monoids)
pub mod segment_tree; // Recursive general range-aggregate tree
pub mod fenwick;      // Implicit prefix-sum tree

// Re-exports for convenience
pub use algebra::{Gcd, Max, Min, Monoid, Sum};
pub use fenwick::FenwickTree;
pub use segment_tree::SegmentTree;

use thiserror::Error;

/// Errors produced by tree construction, queries, and updates.
///
/// Every operation validates its inputs before touching any state, so a
/// returned error guarantees the structure is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeQueryError {
    /// Construction was attempted from an empty sequence.
    #[error("cannot build a range-query structure from an empty sequence")]
    EmptySequence,

    /// A point index fell outside the structure's bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index, in the caller's indexing convention.
        index: usize,
        /// Number of elements in the structure.
        len: usize,
    },

    /// A query range was inverted or fell outside the structure's bounds.
    #[error("invalid range [{left}, {right}] for length {len}")]
    InvalidRange {
        /// Left bound as given by the caller.
        left: usize,
        /// Right bound as given by the caller.
        right: usize,
        /// Number of elements in the structure.
        len: usize,
    },
}

/// Common contract satisfied by both structures: point update and inclusive
/// range aggregation over a fixed-length sequence, 0-indexed.
///
/// The native APIs differ deliberately (the segment tree replaces values,
/// the Fenwick tree adds deltas and is 1-indexed); this trait picks one
/// convention - 0-indexed, replace semantics - and each implementation
/// translates at the boundary.
pub trait RangeAggregate {
    /// Element/aggregate type.
    type Value;

    /// Number of elements in the underlying sequence.
    fn len(&self) -> usize;

    /// True when the structure holds no elements. Construction rejects
    /// empty sequences, so this is false for any built structure.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate of the inclusive range `[left, right]`, 0-indexed.
    fn range_query(&self, left: usize, right: usize) -> Result<Self::Value, RangeQueryError>;

    /// Replace the element at `index` (0-indexed) with `value`.
    fn set(&mut self, index: usize, value: Self::Value) -> Result<(), RangeQueryError>;
}
