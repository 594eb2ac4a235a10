//! Doubly linked list drivers.

use super::{ENTER_HOLD, Entry, LEAVE_HOLD, non_empty};
use crate::seq::{
    Complexity, Driver, Emitter, Hold, MarkRole, Pacer, Reject, RunOutcome, Sequencer, StepError,
};

const TAIL_ENTER_HOLD: Hold = Hold(300);

struct InsertHead {
    list: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for InsertHead {
    fn name(&self) -> &'static str {
        "dll insert-head"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Insert Head", "O(1)", "O(1)"))?;
        em.log_held(
            format!("Inserting {} at Head", self.entry.value),
            ENTER_HOLD,
        )?;

        self.list.insert(0, self.entry.clone());
        em.snapshot(self.list.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Pending, vec![0], ENTER_HOLD)?;
        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        Ok(())
    }
}

struct InsertTail {
    list: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for InsertTail {
    fn name(&self) -> &'static str {
        "dll insert-tail"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        // the tail pointer makes this O(1), unlike the singly list
        em.complexity(Complexity::new("Insert Tail", "O(1)", "O(1)"))?;
        em.log_held(
            format!("Inserting {} at Tail", self.entry.value),
            TAIL_ENTER_HOLD,
        )?;

        self.list.push(self.entry.clone());
        em.snapshot(self.list.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Pending, vec![self.list.len() - 1], ENTER_HOLD)?;
        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        Ok(())
    }
}

struct DeleteHead {
    list: Vec<Entry>,
}

impl Driver<Vec<Entry>> for DeleteHead {
    fn name(&self) -> &'static str {
        "dll delete-head"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Delete Head", "O(1)", "O(1)"))?;
        em.log("Deleting Head")?;

        em.mark(MarkRole::Deleted, vec![0], LEAVE_HOLD)?;
        self.list.remove(0);
        em.snapshot(self.list.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Deleted, vec![], Hold::ZERO)?;
        Ok(())
    }
}

/// Persistent doubly linked list plus its sequencer.
pub struct DllWorld {
    seq: Sequencer<Vec<Entry>>,
    next_id: u64,
}

impl DllWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> DllWorld {
        DllWorld {
            seq: Sequencer::new(Vec::new(), pacer),
            next_id: 0,
        }
    }

    fn fresh_entry(&mut self, value: String) -> Entry {
        let id = self.next_id;
        self.next_id += 1;
        Entry { id, value }
    }

    pub fn insert_head(&mut self, value: &str) -> Result<RunOutcome, Reject> {
        let value = non_empty(value)?;
        let entry = self.fresh_entry(value);
        self.seq.run(&mut InsertHead {
            list: self.seq.stage().snapshot().clone(),
            entry,
        })
    }

    pub fn insert_tail(&mut self, value: &str) -> Result<RunOutcome, Reject> {
        let value = non_empty(value)?;
        let entry = self.fresh_entry(value);
        self.seq.run(&mut InsertTail {
            list: self.seq.stage().snapshot().clone(),
            entry,
        })
    }

    pub fn delete_head(&mut self) -> Result<RunOutcome, Reject> {
        if self.seq.stage().snapshot().is_empty() {
            self.seq.post_message("List is empty");
            return Err(Reject::Underflow { structure: "List" });
        }
        self.seq.run(&mut DeleteHead {
            list: self.seq.stage().snapshot().clone(),
        })
    }

    pub fn seq(&self) -> &Sequencer<Vec<Entry>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
