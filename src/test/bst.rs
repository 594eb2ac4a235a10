use crate::seq::{InstantPacer, Reject, RunOutcome};
use crate::tree::{Bst, Node, TreeWorld};
use std::rc::Rc;

fn bst_of(values: &[i64]) -> Bst {
    let mut bst = Bst::default();
    for &v in values {
        bst.insert(v).unwrap();
    }
    bst
}

fn find<'a>(node: Option<&'a Rc<Node>>, value: i64) -> Option<&'a Rc<Node>> {
    let n = node?;
    if value == n.value {
        Some(n)
    } else if value < n.value {
        find(n.left.as_ref(), value)
    } else {
        find(n.right.as_ref(), value)
    }
}

#[test]
fn in_order_is_strictly_increasing() {
    let bst = bst_of(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(bst.in_order(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(bst.len(), 7);
}

#[test]
fn duplicate_insert_leaves_the_tree_untouched() {
    let mut bst = bst_of(&[5, 3, 8]);
    let root_before = bst.root().unwrap().clone();

    assert_eq!(bst.insert(3).unwrap_err(), Reject::Duplicate(3));

    assert_eq!(bst.len(), 3);
    assert!(Rc::ptr_eq(bst.root().unwrap(), &root_before));
}

#[test]
fn node_ids_follow_insertion_order_and_stay_stable() {
    let mut bst = bst_of(&[5, 3, 8]);
    assert_eq!(find(bst.root(), 3).unwrap().id, 1);

    bst.insert(1).unwrap();
    // relayout-relevant identity survives the path copy
    assert_eq!(find(bst.root(), 5).unwrap().id, 0);
    assert_eq!(find(bst.root(), 3).unwrap().id, 1);
    assert_eq!(find(bst.root(), 8).unwrap().id, 2);
    assert_eq!(find(bst.root(), 1).unwrap().id, 3);
}

#[test]
fn untouched_subtrees_are_shared_not_copied() {
    let mut bst = bst_of(&[5, 3, 8]);
    let old_right = bst.root().unwrap().right.clone().unwrap();

    bst.insert(1).unwrap();

    // the insert went left, so the right child is the same allocation
    let new_right = bst.root().unwrap().right.clone().unwrap();
    assert!(Rc::ptr_eq(&old_right, &new_right));
}

#[test]
fn tree_world_commits_then_animates() {
    let mut world = TreeWorld::new(Box::new(InstantPacer));
    for v in [5, 3, 8] {
        assert_eq!(world.insert(v).unwrap(), RunOutcome::Completed);
    }

    assert_eq!(world.bst().in_order(), vec![3, 5, 8]);
    assert_eq!(world.seq().stage().snapshot().nodes.len(), 3);
}

#[test]
fn first_insert_announces_the_root() {
    let mut world = TreeWorld::new(Box::new(InstantPacer));
    world.insert(5).unwrap();

    let log: Vec<&str> = world.seq().stage().log().collect();
    assert!(log.contains(&"Root created: 5"));
}

#[test]
fn duplicate_insert_is_reported_and_changes_nothing() {
    let mut world = TreeWorld::new(Box::new(InstantPacer));
    world.insert(5).unwrap();
    world.insert(3).unwrap();
    let before = world.seq().stage().snapshot().clone();

    assert_eq!(world.insert(3).unwrap_err(), Reject::Duplicate(3));
    assert_eq!(world.seq().stage().message(), Some("3 already exists"));
    assert_eq!(world.seq().stage().snapshot(), &before);
    assert_eq!(world.bst().len(), 2);
}

#[test]
fn empty_world_renders_the_minimum_viewport() {
    let world = TreeWorld::new(Box::new(InstantPacer));
    let snapshot = world.seq().stage().snapshot();

    assert!(snapshot.nodes.is_empty());
    assert_eq!(snapshot.width, 800);
    assert_eq!(snapshot.height, 600);
}

#[test]
fn reset_drops_the_tree_and_the_viewport() {
    let mut world = TreeWorld::new(Box::new(InstantPacer));
    for v in [5, 3, 8] {
        world.insert(v).unwrap();
    }

    world.reset();
    assert!(world.bst().is_empty());
    assert!(world.seq().stage().snapshot().nodes.is_empty());
    assert_eq!(world.seq().stage().snapshot().width, 800);
}
