//! Bounded queue drivers.

use super::{ENTER_HOLD, Entry, LEAVE_HOLD, non_empty};
use crate::seq::{
    Complexity, Driver, Emitter, Hold, MarkRole, Pacer, Reject, RunOutcome, Sequencer, StepError,
};
use tracing::debug;

pub const QUEUE_CAPACITY: usize = 7;

struct Enqueue {
    queue: Vec<Entry>,
    entry: Entry,
}

impl Driver<Vec<Entry>> for Enqueue {
    fn name(&self) -> &'static str {
        "queue enqueue"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Enqueue", "O(1)", "O(1)"))?;
        em.log(format!("Enqueueing {}", self.entry.value))?;

        self.queue.push(self.entry.clone());
        em.snapshot(self.queue.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Pending, vec![self.queue.len() - 1], ENTER_HOLD)?;

        em.mark(MarkRole::Pending, vec![], Hold::ZERO)?;
        em.log(format!("Enqueued {}", self.entry.value))?;
        Ok(())
    }
}

struct Dequeue {
    queue: Vec<Entry>,
}

impl Driver<Vec<Entry>> for Dequeue {
    fn name(&self) -> &'static str {
        "queue dequeue"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Entry>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Dequeue", "O(1)", "O(1)"))?;
        let value = self.queue[0].value.clone();
        em.log(format!("Dequeueing {value}"))?;

        em.mark(MarkRole::Deleted, vec![0], LEAVE_HOLD)?;
        self.queue.remove(0);
        em.snapshot(self.queue.clone(), Hold::ZERO)?;
        em.mark(MarkRole::Deleted, vec![], Hold::ZERO)?;
        em.log(format!("Dequeued {value}"))?;
        Ok(())
    }
}

/// Bounded FIFO queue plus its sequencer. The front of the queue is index 0.
pub struct QueueWorld {
    seq: Sequencer<Vec<Entry>>,
    capacity: usize,
    next_id: u64,
}

impl QueueWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> QueueWorld {
        QueueWorld::with_capacity(QUEUE_CAPACITY, pacer)
    }

    pub fn with_capacity(capacity: usize, pacer: Box<dyn Pacer>) -> QueueWorld {
        QueueWorld {
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

    pub fn enqueue(&mut self, value: &str) -> Result<RunOutcome, Reject> {
        let value = non_empty(value)?;
        if self.len() >= self.capacity {
            let reject = Reject::Overflow {
                structure: "Queue",
                capacity: self.capacity,
            };
            debug!(%reject, "enqueue rejected");
            self.seq.post_message("Queue Overflow! Max size reached.");
            return Err(reject);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.seq.run(&mut Enqueue {
            queue: self.seq.stage().snapshot().clone(),
            entry: Entry { id, value },
        })
    }

    pub fn dequeue(&mut self) -> Result<RunOutcome, Reject> {
        if self.is_empty() {
            let reject = Reject::Underflow { structure: "Queue" };
            debug!(%reject, "dequeue rejected");
            self.seq.post_message("Queue Underflow! Queue is empty.");
            return Err(reject);
        }
        self.seq.run(&mut Dequeue {
            queue: self.seq.stage().snapshot().clone(),
        })
    }

    pub fn seq(&self) -> &Sequencer<Vec<Entry>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
