use arena_bst::arena::Tree;

use std::collections::{HashMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
///
/// The map overwrites on duplicate insert while the tree rejects, so a
/// duplicate is only mirrored into the map when the tree accepted it.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut HashMap<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let inserted = bst.insert(k.clone(), v.clone());
                assert_eq!(inserted.is_err(), map.contains_key(k));
                if inserted.is_ok() {
                    map.insert(k.clone(), v.clone());
                }
            }
            Op::Remove(k) => {
                bst.delete(k);
                map.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && map
            .iter()
            .all(|(key, value)| tree.search(key).map(|node| tree.data(node)) == Some(value))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }

    xs.iter()
        .all(|x| tree.search(x).map(|node| tree.data(node)) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x) == None)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let added: HashSet<_> = xs.into_iter().collect();
    let deleted: HashSet<_> = deletes.iter().copied().collect();

    deleted.iter().all(|x| tree.search(x).is_none())
        && added.difference(&deleted).all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn in_order_traversal_is_sorted(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut tree, &mut map);

    let mut keys = Vec::new();
    let mut current = tree.root().map(|root| tree.leftmost(root));
    while let Some(node) = current {
        keys.push(*tree.key(node));
        current = tree.successor(node);
    }

    keys.len() == map.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn successor_inverts_predecessor(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        let _ = tree.insert(*x, *x);
    }

    let root = match tree.root() {
        Some(root) => root,
        None => return true,
    };

    let mut node = tree.leftmost(root);
    loop {
        if let Some(pred) = tree.predecessor(node) {
            if tree.successor(pred) != Some(node) {
                return false;
            }
        }
        match tree.successor(node) {
            Some(next) => {
                if tree.predecessor(next) != Some(node) {
                    return false;
                }
                node = next;
            }
            None => break,
        }
    }
    true
}
