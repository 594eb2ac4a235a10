//! Strict binary search tree with path-copying insertion.
//!
//! Inserting copies only the root-to-leaf path; untouched subtrees are
//! shared between the old and the new root through `Rc`. Node ids are
//! stable across inserts, so a renderer can animate a node moving after a
//! relayout instead of treating it as destroyed and recreated.

use crate::seq::Reject;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: u64,
    pub value: i64,
    pub left: Option<Rc<Node>>,
    pub right: Option<Rc<Node>>,
}

#[derive(Debug, Clone, Default)]
pub struct Bst {
    root: Option<Rc<Node>>,
    next_id: u64,
    len: usize,
}

impl Bst {
    pub fn root(&self) -> Option<&Rc<Node>> {
        self.root.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`. Inserting a value already present is rejected
    /// before anything is rebuilt; the tree is left untouched.
    pub fn insert(&mut self, value: i64) -> Result<(), Reject> {
        let root = Self::insert_at(self.root.as_ref(), value, &mut self.next_id)?;
        self.root = Some(root);
        self.len += 1;
        Ok(())
    }

    fn insert_at(
        node: Option<&Rc<Node>>,
        value: i64,
        next_id: &mut u64,
    ) -> Result<Rc<Node>, Reject> {
        let Some(n) = node else {
            let id = *next_id;
            *next_id += 1;
            return Ok(Rc::new(Node {
                id,
                value,
                left: None,
                right: None,
            }));
        };
        if value == n.value {
            return Err(Reject::Duplicate(value));
        }
        // descend first so a duplicate deeper down copies nothing
        if value < n.value {
            let child = Self::insert_at(n.left.as_ref(), value, next_id)?;
            let mut copy = (**n).clone();
            copy.left = Some(child);
            Ok(Rc::new(copy))
        } else {
            let child = Self::insert_at(n.right.as_ref(), value, next_id)?;
            let mut copy = (**n).clone();
            copy.right = Some(child);
            Ok(Rc::new(copy))
        }
    }

    /// In-order values; strictly increasing by the BST invariant.
    pub fn in_order(&self) -> Vec<i64> {
        fn walk(node: Option<&Rc<Node>>, out: &mut Vec<i64>) {
            if let Some(n) = node {
                walk(n.left.as_ref(), out);
                out.push(n.value);
                walk(n.right.as_ref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root.as_ref(), &mut out);
        out
    }
}
