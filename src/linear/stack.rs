//! Bounded stack drivers.

use super::{ENTER_HOLD, Entry, LEAVE_HOLD, non_empty};
use crate::seq::{
    Complexity, Driver, Emitter, Hold, MarkRole, Pacer, Reject, RunOutcome, Sequencer, StepError,
};
use tracing::debug;

pub const STACK_CAPACITY: usize = 8;

const PEEK_HOLD: Hold = Hold(1000);

struct Push {
    stack: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for Push {
    fn name(&self) -> &'static str {
        "stack push"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Push", "O(1)", "O(1)"))?;
        em.log(format!("Pushing {} onto stack", self.entry.value))?;

        self.stack.push(self.entry.clone());
        em.snapshot(self.stack.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Pending, vec![self.stack.len() - 1], ENTER_HOLD)?;

        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        em.log(format!("Pushed {}", self.entry.value))?;
        Ok(())
    }
}

struct Pop {
    stack: Vec<Entry>,
}

impl Driver<Vec<Entry>> for Pop {
    fn name(&self) -> &'static str {
        "stack pop"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Pop", "O(1)", "O(1)"))?;
        let top = self.stack.len() - 1;
        let value = self.stack[top].value.clone();
        em.log(format!("Popping {value} from stack"))?;

        em.mark(MarkRole::Deleted, vec![top], LEAVE_HOLD)?;
        self.stack.pop();
        em.snapshot(self.stack.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Deleted, vec![], Hold::ZERO)?;
        em.log(format!("Popped {value}"))?;
        Ok(())
    }
}

struct Peek {
    stack: Vec<Entry>,
}

impl Driver<Vec<Entry>> for Peek {
    fn name(&self) -> &'static str {
        "stack peek"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Peek", "O(1)", "O(1)"))?;
        let top = self.stack.len() - 1;
        em.log(format!("Top element is {}", self.stack[top].value))?;
        em.mark(MarkRole::Highlight, vec![top], PEEK_HOLD)?;
        em.mark(MarkRole::Highlight, vec![], Hold::ZERO)?;
        Ok(())
    }
}

/// Bounded stack plus its sequencer. Renderers draw the last entry as the
/// top of the stack.
pub struct StackWorld {
    seq: Sequencer<Vec<Entry>>,
    capacity: usize,
    next_id: u64,
}

impl StackWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> StackWorld {
        StackWorld::with_capacity(STACK_CAPACITY, pacer)
    }

    pub fn with_capacity(capacity: usize, pacer: Box<dyn Pacer>) -> StackWorld {
        StackWorld {
            seq: Sequencer::new(Vec::new(), pacer),
            capacity,
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.seq.stage().snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, value: &str) -> Result<RunOutcome, Reject> {
        let value = non_empty(value)?;
        if self.len() >= self.capacity {
            let reject = Reject::Overflow {
                structure: "Stack",
                capacity: self.capacity,
            };
            debug!(%reject, "push rejected");
            self.seq.post_message("Stack Overflow! Cannot push more items.");
            return Err(reject);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.seq.run(&mut Push {
            stack: self.seq.stage().snapshot().clone(),
            entry: Entry { id, value },
        })
    }

    pub fn pop(&mut self) -> Result<RunOutcome, Reject> {
        if self.is_empty() {
            let reject = Reject::Underflow { structure: "Stack" };
            debug!(%reject, "pop rejected");
            self.seq.post_message("Stack Underflow! Stack is empty.");
            return Err(reject);
        }
        self.seq.run(&mut Pop {
            stack: self.seq.stage().snapshot().clone(),
        })
    }

    /// Highlights the top entry without mutating anything.
    pub fn peek(&mut self) -> Result<RunOutcome, Reject> {
        if self.is_empty() {
            let reject = Reject::Underflow { structure: "Stack" };
            self.seq.post_message("Stack is empty");
            return Err(reject);
        }
        let top = self.seq.stage().snapshot().last().cloned();
        let out = self.seq.run(&mut Peek {
            stack: self.seq.stage().snapshot().clone(),
        })?;
        if let Some(entry) = top {
            self.seq.post_message(format!("Top Element: {}", entry.value));
        }
        Ok(out)
    }

    pub fn seq(&self) -> &Sequencer<Vec<Entry>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
