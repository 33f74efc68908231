use ordered_tree::{Error, OrderedTree};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts,
/// removes and rebalances we have the same multiset in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut OrderedTree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                let pos = model.partition_point(|x| x <= v);
                model.insert(pos, v.clone());
            }
            Op::Remove(v) => match model.binary_search(v) {
                Ok(pos) => assert_eq!(bst.remove(v), Ok(model.remove(pos))),
                Err(_) => assert_eq!(bst.remove(v), Err(Error::NotFound)),
            },
            Op::Rebalance => bst.rebalance(),
        }
    }
}

fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort();
    xs
}

/// `ceil(log2(n + 1)) - 1`, the height of a minimum-height tree with `n` nodes.
fn min_height(n: usize) -> isize {
    (usize::BITS - n.leading_zeros()) as isize - 1
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.inorder().eq(model.iter())
        && tree.len() == model.len()
        && tree.iter().count() == tree.len()
        && tree.is_empty() == model.is_empty()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let values: Vec<_> = tree.inorder().copied().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1]) && values == sorted(xs)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_then_remove_round_trip(xs: Vec<i8>, v: i8) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.inorder().copied().collect();

    tree.insert(v);
    let removed = tree.remove(&v);
    let after: Vec<_> = tree.inorder().copied().collect();

    removed == Ok(v)
        && before == after
        && tree.len() == xs.len()
        && (xs.contains(&v) || tree.find(&v).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - only one goes per delete.
        let expected = still_present
            .iter()
            .position(|x| x == delete)
            .map(|pos| still_present.swap_remove(pos));
        if tree.remove(delete).ok() != expected {
            return false;
        }
    }

    tree.inorder().copied().eq(sorted(still_present))
}

#[quickcheck]
fn rebalance_preserves_content(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.rebalance();

    tree.len() == xs.len() && tree.inorder().copied().eq(sorted(xs))
}

#[quickcheck]
fn rebalance_reaches_minimum_height(xs: Vec<i16>) -> bool {
    let mut xs = sorted(xs);
    xs.dedup();
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.rebalance();

    tree.height() == min_height(xs.len()) && tree.is_balanced()
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let (low, high) = (a.min(b), a.max(b));
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    // Same values, and in preorder.
    let expected: Vec<_> = tree.iter().filter(|v| low <= **v && **v <= high).collect();
    tree.range_find(&low, &high) == expected
}

#[quickcheck]
fn range_find_backwards_is_empty(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    a <= b || tree.range_find(&a, &b).is_empty()
}

#[quickcheck]
fn successor_is_smallest_greater(xs: Vec<i8>, q: i8) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.successor(&q).copied() == xs.iter().copied().filter(|x| *x > q).min()
}

#[quickcheck]
fn predecessor_is_largest_smaller(xs: Vec<i8>, q: i8) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.predecessor(&q).copied() == xs.iter().copied().filter(|x| *x < q).max()
}

#[quickcheck]
fn clone_is_equal(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let copy = tree.clone();
    copy == tree && copy.iter().eq(tree.iter()) && copy.height() == tree.height()
}

#[quickcheck]
fn traversals_visit_everything(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let expected = sorted(xs);

    [
        sorted(tree.iter().copied().collect()),
        sorted(tree.postorder().copied().collect()),
        sorted(tree.levelorder().copied().collect()),
        sorted(tree.clone().into_iter().collect()),
    ]
    .iter()
    .all(|values| *values == expected)
}
