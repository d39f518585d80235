//! Correctness tests: both structures against a naive reference and the
//! worked scenario over `[1, 3, 5, 7, 9, 11]`.

use rangekit::{algebra::Sum, FenwickTree, RangeAggregate, SegmentTree};

fn naive_sum(values: &[i64], left: usize, right: usize) -> i64 {
    values[left..=right].iter().sum()
}

#[test]
fn segment_tree_matches_naive_sums_on_every_range() {
    let values = [4i64, -2, 0, 9, -7, 3, 3, 1, 12, -5];
    let tree = SegmentTree::<Sum<i64>>::build(&values).unwrap();

    for l in 0..values.len() {
        for r in l..values.len() {
            assert_eq!(tree.query(l, r).unwrap(), naive_sum(&values, l, r));
        }
    }
}

#[test]
fn fenwick_matches_naive_sums_on_every_range() {
    let values = [4i64, -2, 0, 9, -7, 3, 3, 1, 12, -5];
    let tree = FenwickTree::build(&values).unwrap();

    for l in 0..values.len() {
        for r in l..values.len() {
            // 1-indexed inclusive span
            assert_eq!(
                tree.range_sum(l + 1, r + 1).unwrap(),
                naive_sum(&values, l, r)
            );
        }
    }
}

#[test]
fn reference_scenario_segment_tree() {
    let mut tree = SegmentTree::<Sum<i64>>::build(&[1, 3, 5, 7, 9, 11]).unwrap();
    assert_eq!(tree.query(1, 3).unwrap(), 15);

    // Replace index 2's value 5 with 10.
    tree.update(2, 10).unwrap();
    assert_eq!(tree.query(1, 3).unwrap(), 20);
    assert_eq!(tree.query(2, 5).unwrap(), 37);
}

#[test]
fn reference_scenario_fenwick() {
    let mut tree = FenwickTree::build(&[1i64, 3, 5, 7, 9, 11]).unwrap();
    assert_eq!(tree.query(3).unwrap(), 9);
    assert_eq!(tree.range_sum(2, 4).unwrap(), 15);

    // Add 2 to position 2 (logical index 1: 3 -> 5).
    tree.update(2, 2).unwrap();
    assert_eq!(tree.range_sum(1, 3).unwrap(), 11);
    assert_eq!(tree.query(3).unwrap(), 11);
}

#[test]
fn updates_are_equivalent_to_rebuilding() {
    let mut live = SegmentTree::<Sum<i64>>::build(&[8i64, 1, -3, 6, 0, 2, 5]).unwrap();
    live.update(0, -4).unwrap();
    live.update(4, 11).unwrap();
    live.update(0, 9).unwrap();

    // values() is the logical sequence after updates; a fresh build from it
    // must agree with the live structure on every range.
    let rebuilt = SegmentTree::<Sum<i64>>::build(live.values()).unwrap();
    for l in 0..live.len() {
        for r in l..live.len() {
            assert_eq!(live.query(l, r).unwrap(), rebuilt.query(l, r).unwrap());
        }
    }
}

#[test]
fn fenwick_updates_are_equivalent_to_rebuilding() {
    let mut values = vec![8i64, 1, -3, 6, 0, 2, 5];
    let mut live = FenwickTree::build(&values).unwrap();

    for &(pos, delta) in &[(1usize, -4i64), (5, 11), (7, -2), (1, 3)] {
        live.update(pos, delta).unwrap();
        values[pos - 1] += delta;
    }

    let rebuilt = FenwickTree::build(&values).unwrap();
    for p in 1..=values.len() {
        assert_eq!(live.query(p).unwrap(), rebuilt.query(p).unwrap());
    }
}

#[test]
fn unified_interface_agrees_between_structures() {
    let values = [10i64, 20, 30, 40, 50];
    let mut seg = SegmentTree::<Sum<i64>>::build(&values).unwrap();
    let mut fen = FenwickTree::build(&values).unwrap();

    RangeAggregate::set(&mut seg, 3, -8).unwrap();
    RangeAggregate::set(&mut fen, 3, -8).unwrap();

    for l in 0..values.len() {
        for r in l..values.len() {
            assert_eq!(
                seg.range_query(l, r).unwrap(),
                fen.range_query(l, r).unwrap(),
                "structures disagree on [{l}, {r}]"
            );
        }
    }
}
