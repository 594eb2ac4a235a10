//! Call-stack visualization for a bounded recursive factorial.
//!
//! Each logical call pushes a frame in `Active` state; on resolving, the
//! frame turns `Returning` with its value, is held briefly, turns `Popped`
//! and is removed. The most recently pushed frame is last in the snapshot,
//! which renderers draw nearest the top of the stack.

use crate::seq::{
    Complexity, Driver, Emitter, Hold, Pacer, Reject, RunOutcome, Sequencer, StepError,
};
use serde::{Deserialize, Serialize};

/// Inputs above this would grow the frame column without bound.
pub const MAX_INPUT: u64 = 10;

const FRAME_HOLD: Hold = Hold(800);
const POP_HOLD: Hold = Hold(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameState {
    Active,
    Returning,
    Popped,
}

/// One simulated activation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: u64,
    pub label: String,
    pub value: Option<i64>,
    pub state: FrameState,
}

/// Simulates the call stack of `factorial(n)` without real recursion: the
/// descend phase pushes one frame per call, the unwind phase resolves them
/// in reverse order.
pub struct FactorialDriver {
    n: u64,
    frames: Vec<Frame>,
    next_id: u64,
}

impl FactorialDriver {
    pub fn new(n: u64) -> FactorialDriver {
        FactorialDriver {
            n,
            frames: Vec::new(),
            next_id: 0,
        }
    }

    fn push_frame(&mut self, k: u64) {
        let id = self.next_id;
        self.next_id += 1;
        self.frames.push(Frame {
            id,
            label: format!("fact({k})"),
            value: None,
            state: FrameState::Active,
        });
    }
}

impl Driver<Vec<Frame>> for FactorialDriver {
    fn name(&self) -> &'static str {
        "factorial"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<Frame>>) -> Result<(), StepError> {
        em.complexity(Complexity::new("Factorial", "O(n)", "O(n)"))?;
        em.log(format!("Calculating Factorial({})", self.n))?;

        // descend: one frame per logical call, innermost last
        let mut ks: Vec<u64> = Vec::new();
        let mut k = self.n;
        loop {
            em.log(format!("Call: factorial({k})"))?;
            self.push_frame(k);
            ks.push(k);
            em.snapshot(self.frames.clone(), FRAME_HOLD)?;
            if k <= 1 {
                break;
            }
            em.log(format!("Recurse: {k} * fact({})", k - 1))?;
            k -= 1;
        }
        em.log(format!("Base case: factorial({k}) = 1"))?;

        // unwind: innermost frame returns 1, each outer frame multiplies
        let mut result: i64 = 1;
        for step in 0..ks.len() {
            let idx = ks.len() - 1 - step;
            if step > 0 {
                let sub = result;
                result = ks[idx] as i64 * sub;
                em.log(format!("Return: {} * {sub} = {result}", ks[idx]))?;
            }
            self.frames[idx].state = FrameState::Returning;
            self.frames[idx].value = Some(result);
            em.snapshot(self.frames.clone(), FRAME_HOLD)?;

            self.frames[idx].state = FrameState::Popped;
            em.snapshot(self.frames.clone(), POP_HOLD)?;
            self.frames.truncate(idx);
            em.snapshot(self.frames.clone(), Hold::ZERO)?;
        }

        em.log(format!("factorial({}) = {result}", self.n))?;
        em.log("Factorial Calculation Complete")?;
        Ok(())
    }
}

/// Frame column plus its sequencer.
pub struct RecursionWorld {
    seq: Sequencer<Vec<Frame>>,
}

impl RecursionWorld {
    pub fn new(pacer: Box<dyn Pacer>) -> RecursionWorld {
        RecursionWorld {
            seq: Sequencer::new(Vec::new(), pacer),
        }
    }

    pub fn run_factorial(&mut self, n: u64) -> Result<RunOutcome, Reject> {
        if n > MAX_INPUT {
            self.seq
                .post_message(format!("N must be between 0 and {MAX_INPUT}"));
            return Err(Reject::InvalidInput(format!(
                "factorial input {n} out of range 0..={MAX_INPUT}"
            )));
        }
        self.seq.run(&mut FactorialDriver::new(n))
    }

    pub fn seq(&self) -> &Sequencer<Vec<Frame>> {
        &self.seq
    }

    pub fn reset(&mut self) {
        self.seq.reset();
    }
}
