//! Fenwick tree (binary indexed tree)
//!
//! An implicit tree encoded in a flat, 1-indexed array: slot `i` holds the
//! sum of the half-open range `(i - lowbit(i), i]`, where `lowbit(i)`
//! isolates the lowest set bit of `i`. Prefix queries walk the
//! remove-lowbit chain down to zero; point updates walk the add-lowbit
//! chain up to `n`. Both terminate in O(log n) steps because each step
//! clears or adds one bit.
//!
//! Unlike [`crate::SegmentTree`] this structure is tied to sum: its range
//! query subtracts one prefix from another, which has no analogue for
//! min/max/gcd.

use std::ops::{AddAssign, Sub};

use tracing::trace;

use crate::{util, RangeAggregate, RangeQueryError};

/// Lowest set bit of `i`; the step size for both traversal chains.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Prefix-sum tree with O(log n) point update and prefix/range query.
///
/// Positions are 1-indexed, matching the encoding (`tree[0]` is unused).
/// Updates use delta semantics: `update(i, d)` adds `d` to the element at
/// position `i`. Callers wanting replace semantics can go through
/// [`RangeAggregate::set`], which derives the delta from a point query.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct FenwickTree<T> {
    /// `len + 1` slots; slot 0 unused.
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Default + AddAssign + Sub<Output = T>,
{
    /// Build a tree from `values` by repeated point update, O(n log n).
    ///
    /// Update is the sole mutating primitive; construction is defined in
    /// terms of it rather than a separate bulk-build pass.
    ///
    /// Returns [`RangeQueryError::EmptySequence`] for an empty slice.
    pub fn build(values: &[T]) -> Result<Self, RangeQueryError> {
        if values.is_empty() {
            return Err(RangeQueryError::EmptySequence);
        }

        let n = values.len();
        let mut fenwick = Self {
            tree: vec![T::default(); n + 1],
        };
        for (i, &value) in values.iter().enumerate() {
            fenwick.update(i + 1, value)?;
        }
        trace!(len = n, "fenwick tree built");
        Ok(fenwick)
    }

    /// Number of elements in the underlying sequence.
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prefix sum of positions `1..=position` (the first `position`
    /// elements of the logical sequence).
    ///
    /// Requires `1 <= position <= len`.
    pub fn query(&self, position: usize) -> Result<T, RangeQueryError> {
        util::check_position(position, self.len())?;
        let mut sum = T::default();
        let mut i = position;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        Ok(sum)
    }

    /// Add `delta` to the element at `position` (1-indexed).
    ///
    /// Validation happens before any mutation; a rejected position leaves
    /// the tree untouched.
    pub fn update(&mut self, position: usize, delta: T) -> Result<(), RangeQueryError> {
        let n = self.len();
        util::check_position(position, n)?;
        let mut i = position;
        while i <= n {
            self.tree[i] += delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Sum of the inclusive span `[left, right]`, 1-indexed.
    ///
    /// Composed from two prefix queries: `query(right) - query(left - 1)`,
    /// with `left == 1` taking the right prefix alone.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<T, RangeQueryError> {
        util::check_span(left, right, self.len())?;
        let upper = self.query(right)?;
        if left > 1 {
            Ok(upper - self.query(left - 1)?)
        } else {
            Ok(upper)
        }
    }
}

/// 0-indexed replace-semantics view of the 1-indexed delta-semantics tree.
///
/// `range_query(l, r)` is `range_sum(l + 1, r + 1)`; `set(i, v)` reads the
/// current element with a single-slot `range_sum` and applies `v - current`
/// as a delta.
impl<T> RangeAggregate for FenwickTree<T>
where
    T: Copy + Default + AddAssign + Sub<Output = T>,
{
    type Value = T;

    fn len(&self) -> usize {
        FenwickTree::len(self)
    }

    fn range_query(&self, left: usize, right: usize) -> Result<T, RangeQueryError> {
        util::check_range(left, right, self.len())?;
        self.range_sum(left + 1, right + 1)
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), RangeQueryError> {
        util::check_index(index, self.len())?;
        let current = self.range_sum(index + 1, index + 1)?;
        self.update(index + 1, value - current)
    }
}
