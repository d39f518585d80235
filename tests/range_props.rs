use proptest::prelude::*;
use rangekit::{
    algebra::{Min, Sum},
    FenwickTree, SegmentTree,
};

/// A non-empty sequence plus a valid inclusive range over it.
fn sequence_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    proptest::collection::vec(-1_000i64..1_000, 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len).prop_map(|(values, a, b)| {
            let (left, right) = if a <= b { (a, b) } else { (b, a) };
            (values, left, right)
        })
    })
}

/// A non-empty sequence plus a valid index into it.
fn sequence_and_index() -> impl Strategy<Value = (Vec<i64>, usize)> {
    proptest::collection::vec(-1_000i64..1_000, 1..64)
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 0..len)
        })
}

proptest! {
    #[test]
    fn build_query_consistency((values, left, right) in sequence_and_range()) {
        let expected: i64 = values[left..=right].iter().sum();

        let seg = SegmentTree::<Sum<i64>>::build(&values).expect("build succeeds");
        prop_assert_eq!(seg.query(left, right).expect("valid range"), expected);

        let fen = FenwickTree::build(&values).expect("build succeeds");
        prop_assert_eq!(fen.range_sum(left + 1, right + 1).expect("valid span"), expected);
    }

    #[test]
    fn min_queries_match_naive((values, left, right) in sequence_and_range()) {
        let expected = *values[left..=right].iter().min().expect("non-empty range");
        let seg = SegmentTree::<Min<i64>>::build(&values).expect("build succeeds");
        prop_assert_eq!(seg.query(left, right).expect("valid range"), expected);
    }

    #[test]
    fn update_then_query_reflects_change(
        (values, index) in sequence_and_index(),
        new_value in -1_000i64..1_000,
        delta in -1_000i64..1_000,
    ) {
        let mut seg = SegmentTree::<Sum<i64>>::build(&values).expect("build succeeds");
        seg.update(index, new_value).expect("valid index");
        prop_assert_eq!(seg.query(index, index).expect("valid range"), new_value);

        let mut fen = FenwickTree::build(&values).expect("build succeeds");
        let before = fen.range_sum(index + 1, index + 1).expect("valid span");
        fen.update(index + 1, delta).expect("valid position");
        let after = fen.range_sum(index + 1, index + 1).expect("valid span");
        prop_assert_eq!(after - before, delta, "point sum must grow by exactly the delta");
    }

    #[test]
    fn updates_equal_rebuild(
        (values, index) in sequence_and_index(),
        new_value in -1_000i64..1_000,
    ) {
        let mut live = SegmentTree::<Sum<i64>>::build(&values).expect("build succeeds");
        live.update(index, new_value).expect("valid index");

        let rebuilt = SegmentTree::<Sum<i64>>::build(live.values()).expect("rebuild succeeds");
        let last = values.len() - 1;
        prop_assert_eq!(
            live.query(0, last).expect("valid range"),
            rebuilt.query(0, last).expect("valid range")
        );
        prop_assert_eq!(
            live.query(index, index).expect("valid range"),
            rebuilt.query(index, index).expect("valid range")
        );
    }

    #[test]
    fn range_decomposition(values in proptest::collection::vec(-1_000i64..1_000, 2..64)) {
        let last = values.len() - 1;
        let seg = SegmentTree::<Sum<i64>>::build(&values).expect("build succeeds");
        let fen = FenwickTree::build(&values).expect("build succeeds");

        let total = seg.query(0, last).expect("valid range");
        for k in 0..last {
            let split = seg.query(0, k).expect("valid range")
                + seg.query(k + 1, last).expect("valid range");
            prop_assert_eq!(split, total, "split at {} must recompose the total", k);

            let fen_split = fen.range_sum(1, k + 1).expect("valid span")
                + fen.range_sum(k + 2, last + 1).expect("valid span");
            prop_assert_eq!(fen_split, total);
        }
    }

    #[test]
    fn prefix_query_equals_range_from_one(values in proptest::collection::vec(-1_000i64..1_000, 1..64)) {
        let fen = FenwickTree::build(&values).expect("build succeeds");
        for p in 1..=values.len() {
            prop_assert_eq!(
                fen.query(p).expect("valid position"),
                fen.range_sum(1, p).expect("valid span")
            );
        }
    }
}
