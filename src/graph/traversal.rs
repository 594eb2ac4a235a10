//! BFS and DFS traversal drivers.
//!
//! The start node is always the graph's first node. Expansion order is
//! deterministic: BFS enqueues neighbors in ascending id order; DFS pushes
//! in descending id order so that, after stack inversion, smaller ids are
//! processed first. Unreachable nodes stay unvisited; that is expected.

use super::{Graph, GraphPreset};
use crate::seq::{
    Complexity, Driver, Emitter, Hold, MarkRole, Pacer, Reject, RunOutcome, Sequencer, StepError,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

const VISIT_HOLD: Hold = Hold(1000);
const ENQUEUE_HOLD: Hold = Hold(800);
const POP_HOLD: Hold = Hold(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TraversalAlgo {
    Bfs,
    Dfs,
}

impl TraversalAlgo {
    pub fn complexity(self) -> Complexity {
        match self {
            TraversalAlgo::Bfs => Complexity::new("BFS", "O(V + E)", "O(V)"),
            TraversalAlgo::Dfs => Complexity::new("DFS", "O(V + E)", "O(V)"),
        }
    }
}

/// Breadth-first traversal with a FIFO frontier. A node counts as seen when
/// enqueued; the visit itself is logged at dequeue time.
pub struct BfsDriver {
    graph: Graph,
}

impl BfsDriver {
    pub fn new(graph: Graph) -> BfsDriver {
        BfsDriver { graph }
    }
}

impl Driver<Graph> for BfsDriver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn run(&mut self, em: &mut Emitter<'_, Graph>) -> Result<(), StepError> {
        em.complexity(TraversalAlgo::Bfs.complexity())?;
        let start = self.graph.nodes[0].id;
        let mut q: VecDeque<usize> = VecDeque::from([start]);
        let mut seen: BTreeSet<usize> = BTreeSet::from([start]);

        em.log(format!("Starting BFS from Node {}", self.graph.label(start)))?;
        em.mark(MarkRole::Visited, vec![start], Hold::ZERO)?;
        em.mark(MarkRole::Frontier, vec![start], VISIT_HOLD)?;

        while let Some(curr) = q.pop_front() {
            em.mark(MarkRole::Current, vec![curr], Hold::ZERO)?;
            em.mark(MarkRole::Frontier, q.iter().copied().collect(), Hold::ZERO)?;
            em.log_held(format!("Visiting Node {}", self.graph.label(curr)), VISIT_HOLD)?;

            for nb in self.graph.neighbors(curr) {
                if seen.insert(nb) {
                    q.push_back(nb);
                    em.mark(MarkRole::Visited, seen.iter().copied().collect(), Hold::ZERO)?;
                    em.mark(MarkRole::Frontier, q.iter().copied().collect(), Hold::ZERO)?;
                    em.log_held(
                        format!("Queueing Node {}", self.graph.label(nb)),
                        ENQUEUE_HOLD,
                    )?;
                }
            }
        }

        em.mark(MarkRole::Current, vec![], Hold::ZERO)?;
        em.log("BFS Completed")?;
        Ok(())
    }
}

/// Depth-first traversal with an explicit LIFO frontier; a node becomes
/// visited when popped. Duplicate stack entries are suppressed by tracking
/// frontier membership alongside the visited set, which leaves the visited
/// set and the visit order unchanged while keeping the frontier readable.
pub struct DfsDriver {
    graph: Graph,
}

impl DfsDriver {
    pub fn new(graph: Graph) -> DfsDriver {
        DfsDriver { graph }
    }
}

impl Driver<Graph> for DfsDriver {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn run(&mut self, em: &mut Emitter<'_, Graph>) -> Result<(), StepError> {
        em.complexity(TraversalAlgo::Dfs.complexity())?;
        let start = self.graph.nodes[0].id;
        let mut stack: Vec<usize> = vec![start];
        let mut on_stack: BTreeSet<usize> = BTreeSet::from([start]);
        let mut seen: BTreeSet<usize> = BTreeSet::new();

        em.log(format!("Starting DFS from Node {}", self.graph.label(start)))?;
        em.mark(MarkRole::Frontier, vec![start], Hold::ZERO)?;

        while let Some(curr) = stack.pop() {
            on_stack.remove(&curr);
            seen.insert(curr);
            em.mark(MarkRole::Visited, seen.iter().copied().collect(), Hold::ZERO)?;
            em.mark(MarkRole::Current, vec![curr], Hold::ZERO)?;
            em.log_held(format!("Visiting Node {}", self.graph.label(curr)), VISIT_HOLD)?;

            let mut neighbors = self.graph.neighbors(curr);
            neighbors.reverse();
            for nb in neighbors {
                if !seen.contains(&nb) && on_stack.insert(nb) {
                    stack.push(nb);
                    em.log(format!("Pushing Node {} to stack", self.graph.label(nb)))?;
                }
            }
            em.mark(MarkRole::Frontier, stack.clone(), POP_HOLD)?;
        }

        em.mark(MarkRole::Current, vec![], Hold::ZERO)?;
        em.log("DFS Completed")?;
        Ok(())
    }
}

/// A preset graph plus the sequencer annotating it.
pub struct GraphWorld {
    seq: Sequencer<Graph>,
}

impl GraphWorld {
    pub fn new(preset: GraphPreset, pacer: Box<dyn Pacer>) -> GraphWorld {
        let mut world = GraphWorld {
            seq: Sequencer::new(Graph::default(), pacer),
        };
        world.seq.seed(preset.build());
        world
    }

    /// Swaps in a different preset; clears visitation state first.
    pub fn select(&mut self, preset: GraphPreset) {
        self.seq.reset();
        self.seq.seed(preset.build());
    }

    pub fn traverse(&mut self, algo: TraversalAlgo) -> Result<RunOutcome, Reject> {
        let graph = self.seq.stage().snapshot().clone();
        if graph.nodes.is_empty() {
            return Err(Reject::InvalidInput("graph has no nodes".to_string()));
        }
        match algo {
            TraversalAlgo::Bfs => self.seq.run(&mut BfsDriver::new(graph)),
            TraversalAlgo::Dfs => self.seq.run(&mut DfsDriver::new(graph)),
        }
    }

    pub fn seq(&self) -> &Sequencer<Graph> {
        &self.seq
    }

    pub fn reset(&mut self) {
        let graph = self.seq.stage().snapshot().clone();
        self.seq.reset();
        self.seq.seed(graph);
    }
}
