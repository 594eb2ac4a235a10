//! Deterministic tree layout.
//!
//! An in-order traversal assigns each node an x equal to its visit index
//! times a fixed horizontal spacing, so left-to-right order matches value
//! order and sibling subtrees never overlap. y is depth times a fixed
//! vertical spacing, so every level lines up. Coordinates are then shifted
//! so the leftmost node sits at the left padding, and the viewport is the
//! smallest padded rectangle containing all nodes. The result depends only
//! on the tree's shape, never on insertion order or timing.

use super::bst::Node;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const H_SPACING: i64 = 60;
pub const V_SPACING: i64 = 80;
pub const START_Y: i64 = 60;
pub const PADDING: i64 = 100;
pub const MIN_WIDTH: i64 = 800;
pub const MIN_HEIGHT: i64 = 600;

/// A node with its assigned coordinates, in in-order sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNode {
    pub id: u64,
    pub value: i64,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeLayout {
    pub nodes: Vec<PlacedNode>,
    /// Parent-to-child id pairs for edge rendering.
    pub edges: Vec<(u64, u64)>,
    pub width: i64,
    pub height: i64,
}

struct Walk {
    counter: i64,
    nodes: Vec<PlacedNode>,
    edges: Vec<(u64, u64)>,
    min_x: i64,
    max_x: i64,
    max_y: i64,
}

impl Walk {
    fn visit(&mut self, n: &Rc<Node>, depth: i64) {
        if let Some(left) = &n.left {
            self.visit(left, depth + 1);
        }

        let x = self.counter * H_SPACING;
        let y = START_Y + depth * V_SPACING;
        self.counter += 1;
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.nodes.push(PlacedNode {
            id: n.id,
            value: n.value,
            x,
            y,
        });
        if let Some(left) = &n.left {
            self.edges.push((n.id, left.id));
        }
        if let Some(right) = &n.right {
            self.edges.push((n.id, right.id));
        }

        if let Some(right) = &n.right {
            self.visit(right, depth + 1);
        }
    }
}

/// Assigns collision-free coordinates and computes the bounding viewport.
/// Idempotent: the same logical tree always yields the same layout.
pub fn layout(root: Option<&Rc<Node>>) -> TreeLayout {
    let Some(root) = root else {
        return TreeLayout {
            nodes: Vec::new(),
            edges: Vec::new(),
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        };
    };

    let mut walk = Walk {
        counter: 0,
        nodes: Vec::new(),
        edges: Vec::new(),
        min_x: i64::MAX,
        max_x: i64::MIN,
        max_y: 0,
    };
    walk.visit(root, 0);

    // align the leftmost node with the left padding
    let shift = PADDING - walk.min_x;
    for node in &mut walk.nodes {
        node.x += shift;
    }

    TreeLayout {
        nodes: walk.nodes,
        edges: walk.edges,
        width: MIN_WIDTH.max(walk.max_x + shift + PADDING),
        height: MIN_HEIGHT.max(walk.max_y + PADDING),
    }
}
