//! Graph model for traversal visualization.
//!
//! A fixed node/edge set, immutable during a traversal run. Drivers only
//! annotate visitation state through mark events; the structure itself is
//! never touched.

mod traversal;

pub use traversal::{BfsDriver, DfsDriver, GraphWorld, TraversalAlgo};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub x: i64,
    pub y: i64,
    pub label: String,
}

/// Undirected edge between two node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Neighbors of `id` in ascending id order.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|e| {
                if e.a == id {
                    Some(e.b)
                } else if e.b == id {
                    Some(e.a)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    pub fn label(&self, id: usize) -> &str {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.label.as_str())
            .unwrap_or("?")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GraphPreset {
    Default,
    Star,
    Cycle,
}

impl GraphPreset {
    pub fn build(self) -> Graph {
        match self {
            GraphPreset::Default => graph(
                &[
                    (0, 100, 100, "A"),
                    (1, 300, 100, "B"),
                    (2, 500, 100, "C"),
                    (3, 200, 300, "D"),
                    (4, 400, 300, "E"),
                ],
                &[(0, 1), (0, 3), (1, 2), (1, 4), (1, 3), (2, 4)],
            ),
            GraphPreset::Star => graph(
                &[
                    (0, 300, 200, "0"),
                    (1, 300, 50, "1"),
                    (2, 500, 150, "2"),
                    (3, 450, 350, "3"),
                    (4, 150, 350, "4"),
                    (5, 100, 150, "5"),
                ],
                &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)],
            ),
            GraphPreset::Cycle => graph(
                &[
                    (0, 100, 200, "A"),
                    (1, 200, 100, "B"),
                    (2, 400, 100, "C"),
                    (3, 500, 200, "D"),
                    (4, 400, 300, "E"),
                    (5, 200, 300, "F"),
                ],
                &[
                    (0, 1),
                    (1, 2),
                    (2, 3),
                    (3, 4),
                    (4, 5),
                    (5, 0),
                    // cross edge
                    (1, 5),
                ],
            ),
        }
    }
}

fn graph(nodes: &[(usize, i64, i64, &str)], edges: &[(usize, usize)]) -> Graph {
    Graph {
        nodes: nodes
            .iter()
            .map(|&(id, x, y, label)| GraphNode {
                id,
                x,
                y,
                label: label.to_string(),
            })
            .collect(),
        edges: edges.iter().map(|&(a, b)| Edge { a, b }).collect(),
    }
}
