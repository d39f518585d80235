//! Segment tree over a flat array
//!
//! The binary tree is encoded without pointers: node `i` keeps its children
//! at `2i + 1` and `2i + 2`, and the `[start, end]` range a node covers is
//! implied by the recursive bisection rather than stored. The buffer is
//! sized `4n`, a conservative bound that holds for every `n` without
//! rounding to a power of two.
//!
//! Generic over any [`Monoid`], so the same tree answers range-sum,
//! range-min, range-max, or range-gcd queries; only the identity element
//! and combine function change.

use tracing::trace;

use crate::algebra::Monoid;
use crate::{util, RangeAggregate, RangeQueryError};

/// Range-aggregate tree with O(log n) point update and range query.
///
/// Indexing is 0-based and query ranges are inclusive on both ends.
/// Updates use replace semantics: `update(i, v)` makes the element at `i`
/// equal to `v` (contrast with [`crate::FenwickTree::update`], which adds
/// a delta).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(
    feature = "visualize",
    serde(bound(serialize = "M::Value: serde::Serialize"))
)]
pub struct SegmentTree<M: Monoid> {
    /// Aggregate per node, `4n` slots.
    tree: Vec<M::Value>,
    /// Retained copy of the logical sequence, kept in sync by `update`.
    data: Vec<M::Value>,
}

impl<M: Monoid> SegmentTree<M> {
    /// Build a tree from `values` in O(n).
    ///
    /// Returns [`RangeQueryError::EmptySequence`] for an empty slice; an
    /// empty tree has no well-defined query or update.
    pub fn build(values: &[M::Value]) -> Result<Self, RangeQueryError> {
        if values.is_empty() {
            return Err(RangeQueryError::EmptySequence);
        }

        let n = values.len();
        let mut tree = vec![M::identity(); 4 * n];
        Self::build_node(&mut tree, values, 0, 0, n - 1);
        trace!(len = n, nodes = 4 * n, "segment tree built");

        Ok(Self {
            tree,
            data: values.to_vec(),
        })
    }

    fn build_node(
        tree: &mut [M::Value],
        values: &[M::Value],
        node: usize,
        start: usize,
        end: usize,
    ) {
        if start == end {
            tree[node] = values[start].clone();
            return;
        }
        let mid = start + (end - start) / 2;
        let (left, right) = (2 * node + 1, 2 * node + 2);
        Self::build_node(tree, values, left, start, mid);
        Self::build_node(tree, values, right, mid + 1, end);
        tree[node] = M::combine(&tree[left], &tree[right]);
    }

    /// Number of elements in the underlying sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The logical sequence as of the most recent updates.
    pub fn values(&self) -> &[M::Value] {
        &self.data
    }

    /// Aggregate of the inclusive range `[left, right]`, 0-indexed.
    ///
    /// Requires `left <= right < len`. Read-only: the tree is unchanged
    /// whether the call succeeds or not.
    pub fn query(&self, left: usize, right: usize) -> Result<M::Value, RangeQueryError> {
        util::check_range(left, right, self.len())?;
        Ok(self.query_node(0, 0, self.len() - 1, left, right))
    }

    fn query_node(
        &self,
        node: usize,
        start: usize,
        end: usize,
        left: usize,
        right: usize,
    ) -> M::Value {
        if right < start || end < left {
            // Disjoint: contributes the identity.
            return M::identity();
        }
        if left <= start && end <= right {
            // Fully contained: take the node aggregate without descending.
            return self.tree[node].clone();
        }
        let mid = start + (end - start) / 2;
        let left_part = self.query_node(2 * node + 1, start, mid, left, right);
        let right_part = self.query_node(2 * node + 2, mid + 1, end, left, right);
        M::combine(&left_part, &right_part)
    }

    /// Replace the element at `index` with `value`, recombining the
    /// root-to-leaf path in O(log n).
    ///
    /// Validation happens before any mutation, so a rejected index leaves
    /// both the tree and the retained sequence untouched.
    pub fn update(&mut self, index: usize, value: M::Value) -> Result<(), RangeQueryError> {
        util::check_index(index, self.len())?;
        self.data[index] = value.clone();
        let end = self.len() - 1;
        self.update_node(0, 0, end, index, &value);
        Ok(())
    }

    fn update_node(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        index: usize,
        value: &M::Value,
    ) {
        if start == end {
            self.tree[node] = value.clone();
            return;
        }
        let mid = start + (end - start) / 2;
        if index <= mid {
            self.update_node(2 * node + 1, start, mid, index, value);
        } else {
            self.update_node(2 * node + 2, mid + 1, end, index, value);
        }
        self.tree[node] = M::combine(&self.tree[2 * node + 1], &self.tree[2 * node + 2]);
    }
}

impl<M: Monoid> RangeAggregate for SegmentTree<M> {
    type Value = M::Value;

    fn len(&self) -> usize {
        SegmentTree::len(self)
    }

    fn range_query(&self, left: usize, right: usize) -> Result<M::Value, RangeQueryError> {
        self.query(left, right)
    }

    fn set(&mut self, index: usize, value: M::Value) -> Result<(), RangeQueryError> {
        self.update(index, value)
    }
}
