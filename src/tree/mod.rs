//! Binary search tree visualization.
//!
//! The logical tree lives in [`Bst`]; the rendered snapshot is the
//! [`TreeLayout`] produced by a full relayout after every structural
//! mutation. Relayout is never driven by a timer.

mod bst;
mod layout;

pub use bst::{Bst, Node};
pub use layout::{
    H_SPACING, MIN_HEIGHT, MIN_WIDTH, PADDING, PlacedNode, START_Y, TreeLayout, V_SPACING, layout,
};

use crate::seq::{
    Complexity, Driver, Emitter, Hold, Pacer, Reject, RunOutcome, Sequencer, StepError,
};
use tracing::debug;

const INSERT_HOLD: Hold = Hold(300);

struct Insert {
    value: i64,
    layout: TreeLayout,
    was_empty: bool,
}

impl Driver<TreeLayout> for Insert {
    fn name(&self) -> &'static str {
        "bst insert"
    }

    fn run(&mut self, em: &mut Emitter<'_, TreeLayout>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Insert", "O(log n)", "O(n)"))?;
        if self.was_empty {
            em.log(format!("Inserting {}", self.value))?;
            em.snapshot(self.layout.clone(), Hold::ZERO)?;
            em.log(format!("Root created: {}", self.value))?;
        } else {
            em.log_held(format!("Inserting {}", self.value), INSERT_HOLD)?;
            em.snapshot(self.layout.clone(), Hold::ZERO)?;
        }
        Ok(())
    }
}

/// Persistent BST plus the sequencer over its rendered layout.
pub struct TreeWorld {
    bst: Bst,
    seq: Sequencer<TreeLayout>,
}

impl TreeWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> TreeWorld {
        TreeWorld {
            bst: Bst::default(),
            // an empty tree still renders the minimum viewport
            seq: Sequencer::new(layout(None), pacer),
        }
    }

    pub fn bst(&self) -> &Bst {
        &self.bst
    }

    /// Inserts a value and animates the relayout. Duplicates are rejected
    /// before layout is invoked; the tree stays unchanged.
    pub fn insert(&mut self, value: i64) -> Result<RunOutcome, Reject> {
        let was_empty = self.bst.is_empty();
        if let Err(reject) = self.bst.insert(value) {
            debug!(%reject, "insert rejected");
            self.seq.post_message(format!("{value} already exists"));
            return Err(reject);
        }
        let layout = layout(self.bst.root());
        self.seq.run(&mut Insert {
            value,
            layout,
            was_empty,
        })
    }

    pub fn seq(&self) -> &Sequencer<TreeLayout> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.bst = Bst::default();
        self.seq.reset();
    }
}
