//! Singly linked list drivers.

use super::{COMMIT_HOLD, ENTER_HOLD, Entry, SCAN_HOLD, non_empty};
use crate::seq::{
    Complexity, Driver, Emitter, Hold, MarkRole, Pacer, Reject, RunOutcome, Sequencer, StepError,
};

const DELETE_SCAN_HOLD: Hold = Hold(500);

struct InsertHead {
    list: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for InsertHead {
    fn name(&self) -> &'static str {
        "list insert-head"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Insert Head", "O(1)", "O(1)"))?;
        em.log_held(
            format!("Preparing to insert {} at Head", self.entry.value),
            ENTER_HOLD,
        )?;

        em.log(format!(
            "New node {} points to current Head",
            self.entry.value
        ))?;
        self.list.insert(0, self.entry.clone());
        em.snapshot(self.list.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Pending, vec![0], COMMIT_HOLD)?;

        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        em.log(format!("Inserted {} at Head", self.entry.value))?;
        Ok(())
    }
}

struct InsertTail {
    list: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for InsertTail {
    fn name(&self) -> &'static str {
        "list insert-tail"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        // no tail pointer in the rendered list, so the walk is visible
        em.complexity(Complexity::new("Insert Tail", "O(n) or O(1)", "O(1)"))?;
        em.log_held(
            format!("Preparing to insert {} at Tail", self.entry.value),
            ENTER_HOLD,
        )?;

        if self.list.is_empty() {
            self.list.push(self.entry.clone());
            em.snapshot(self.list.clone(), Hold::ZERO)?;
            em.log(format!("List empty, {} becomes Head", self.entry.value))?;
        } else {
            em.log("Traversing to end of list...")?;
            for i in 0..self.list.len() {
                em.mark(MarkRole::Highlight, vec![i], SCAN_HOLD)?;
            }
            em.mark(MarkRole::Highlight, vec![], Hold::ZERO)?;

            self.list.push(self.entry.clone());
            em.snapshot(self.list.clone(), Hold::ZERO)?;
            em.mark(MarkRole::Pending, vec![self.list.len() - 1], COMMIT_HOLD)?;
            em.log(format!("Inserted {} at Tail", self.entry.value))?;
        }

        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        Ok(())
    }
}

struct DeleteValue {
    list: Vec<Entry>,
    value: String,
}

impl Driver<Vec<Entry>> for DeleteValue {
    fn name(&self) -> &'static str {
        "list delete-value"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Delete Value", "O(n)", "O(1)"))?;
        em.log(format!("Searching for {} to delete", self.value))?;

        let mut found = None;
        for i in 0..self.list.len() {
            em.mark(MarkRole::Highlight, vec![i], DELETE_SCAN_HOLD)?;
            if self.list[i].value == self.value {
                em.log(format!("Found {} at index {i}", self.value))?;
                found = Some(i);
                break;
            }
        }

        match found {
            Some(i) => {
                em.log(format!("Deleting node {}", self.value))?;
                em.mark(MarkRole::Deleted, vec![i], COMMIT_HOLD)?;
                self.list.remove(i);
                em.snapshot(self.list.clone(), Hold::ZERO)?;
                em.log(format!("Deleted {}", self.value))?;
                em.mark(MarkRole::Deleted, vec![], Hold::ZERO)?;
            }
            None => {
                em.log(format!("Value {} not found", self.value))?;
            }
        }
        em.mark(MarkRole::Highlight, vec![], Hold::ZERO)?;
        Ok(())
    }
}

/// Persistent singly linked list plus its sequencer.
pub struct ListWorld {
    seq: Sequencer<Vec<Entry>>,
    next_id: u64,
}

impl ListWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> ListWorld {
        ListWorld {
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

    /// Scans left to right; a miss leaves the list unchanged.
    pub fn delete_value(&mut self, value: &str) -> Result<RunOutcome, Reject> {
        let value = non_empty(value)?;
        self.seq.run(&mut DeleteValue {
            list: self.seq.stage().snapshot().clone(),
            value,
        })
    }

    pub fn seq(&self) -> &Sequencer<Vec<Entry>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
