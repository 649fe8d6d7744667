use ordtree::{Order, OrderedTree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(k.into());
                set.insert(k.into());
            }
            Op::Delete(k) => {
                tree.delete(k.into());
                set.remove(&i32::from(k));
            }
            Op::Traverse(order) => {
                if tree.traverse(order).len() != set.len() {
                    return false;
                }
            }
        }
    }

    true
}

fn is_strictly_ascending(keys: &[i32]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && set.iter().all(|&key| tree.search(key))
        && (i8::MIN..=i8::MAX)
            .map(i32::from)
            .filter(|key| !set.contains(key))
            .all(|key| !tree.search(key))
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let keys = tree.in_order();
    is_strictly_ascending(&keys) && keys.into_iter().eq(set.into_iter())
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: OrderedTree = xs.iter().map(|&x| i32::from(x)).collect();
    tree.insert(k.into());
    let before = tree.pre_order();

    tree.insert(k.into());

    tree.pre_order() == before
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i16>, k: i16) -> bool {
    let k = i32::from(k);
    let mut tree: OrderedTree = xs
        .iter()
        .map(|&x| i32::from(x))
        .filter(|&x| x != k)
        .collect();
    let before = tree.in_order();

    tree.insert(k);
    let found = tree.search(k);
    tree.delete(k);

    found && !tree.search(k) && tree.in_order() == before
}

#[quickcheck]
fn deleting_missing_key_changes_nothing(xs: Vec<i8>, k: i8) -> bool {
    let k = i32::from(k);
    let mut tree: OrderedTree = xs
        .iter()
        .map(|&x| i32::from(x))
        .filter(|&x| x != k)
        .collect();
    let before = tree.pre_order();

    tree.delete(k);

    tree.pre_order() == before
}

#[quickcheck]
fn pre_and_post_order_mirror_at_the_root(xs: Vec<i8>) -> bool {
    let tree: OrderedTree = xs.iter().map(|&x| i32::from(x)).collect();

    // The root comes first in pre-order and last in post-order.
    tree.pre_order().first() == tree.post_order().last()
}

#[quickcheck]
fn rebuilding_from_pre_order_keeps_the_shape(xs: Vec<i8>) -> bool {
    let tree: OrderedTree = xs.iter().map(|&x| i32::from(x)).collect();
    let rebuilt: OrderedTree = tree.pre_order().into_iter().collect();

    Order::ALL
        .into_iter()
        .all(|order| tree.traverse(order).eq(rebuilt.traverse(order)))
}

#[test]
fn successor_takes_the_place_of_a_node_with_two_children() {
    let mut tree: OrderedTree = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    tree.delete(5);

    assert_eq!(tree.in_order(), vec![1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.pre_order().first(), Some(&7));
    assert_eq!(tree.pre_order(), vec![7, 3, 1, 4, 8, 9]);
}
