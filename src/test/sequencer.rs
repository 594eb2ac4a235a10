use crate::seq::{
    Control, ControlHandle, Driver, Emitter, EventKind, Hold, InstantPacer, RunOutcome,
    ScriptedPacer, Sequencer, StepError,
};

/// Emits `upto` snapshots of a growing vector, one suspension point each.
struct Count {
    upto: usize,
}

impl Driver<Vec<i64>> for Count {
    fn name(&self) -> &'static str {
        "count"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        let mut v = Vec::new();
        for i in 0..self.upto {
            v.push(i as i64);
            em.snapshot(v.clone(), Hold(10))?;
        }
        Ok(())
    }
}

struct Faulty;

impl Driver<Vec<i64>> for Faulty {
    fn name(&self) -> &'static str {
        "faulty"
    }

    fn run(&mut self, em: &mut Emitter<'_, Vec<i64>>) -> Result<(), StepError> {
        em.snapshot(vec![1], Hold::ZERO)?;
        Err(StepError::Fault("boom".to_string()))
    }
}

fn new_seq() -> Sequencer<Vec<i64>> {
    Sequencer::new(Vec::new(), Box::new(InstantPacer))
}

#[test]
fn completed_run_appends_complete_event() {
    let mut seq = new_seq();
    let outcome = seq.run(&mut Count { upto: 3 }).unwrap();

    assert_eq!(outcome, RunOutcome::Completed);
    assert!(seq.stage().is_done());
    assert_eq!(seq.stage().snapshot(), &vec![0, 1, 2]);
    // three snapshots plus the synthesized terminator
    assert_eq!(seq.tape().len(), 4);
    assert!(matches!(seq.tape().last().unwrap().kind, EventKind::Complete));
}

#[test]
fn cancel_takes_effect_at_next_suspension_point() {
    let ctl = ControlHandle::default();
    let pacer = ScriptedPacer::new(ctl.clone(), Control::Cancel, 2);
    let mut seq = Sequencer::with_control(Vec::new(), Box::new(pacer), ctl);

    let outcome = seq.run(&mut Count { upto: 5 }).unwrap();

    assert_eq!(outcome, RunOutcome::Cancelled);
    // the request lands during the second hold; the third emit observes it
    // before applying, so exactly two events made it onto the tape
    assert_eq!(seq.tape().len(), 2);
    assert_eq!(seq.stage().snapshot(), &vec![0, 1]);
    assert!(!seq.stage().is_done());
}

#[test]
fn run_after_cancel_is_accepted() {
    let ctl = ControlHandle::default();
    let pacer = ScriptedPacer::new(ctl.clone(), Control::Cancel, 1);
    let mut seq = Sequencer::with_control(Vec::new(), Box::new(pacer), ctl);

    assert_eq!(seq.run(&mut Count { upto: 3 }).unwrap(), RunOutcome::Cancelled);
    assert_eq!(seq.run(&mut Count { upto: 3 }).unwrap(), RunOutcome::Completed);
    assert_eq!(seq.stage().snapshot(), &vec![0, 1, 2]);
}

#[test]
fn reset_wins_over_a_run_in_flight() {
    let ctl = ControlHandle::default();
    let pacer = ScriptedPacer::new(ctl.clone(), Control::Reset, 2);
    let mut seq = Sequencer::with_control(Vec::new(), Box::new(pacer), ctl);

    let outcome = seq.run(&mut Count { upto: 5 }).unwrap();

    assert_eq!(outcome, RunOutcome::Reset);
    assert!(seq.stage().snapshot().is_empty());
    assert!(seq.tape().is_empty());
    assert_eq!(seq.stage().log_len(), 0);
    assert!(!seq.stage().is_done());
}

#[test]
fn reset_while_idle_clears_observable_state() {
    let mut seq = new_seq();
    seq.run(&mut Count { upto: 2 }).unwrap();
    seq.post_message("leftover");

    seq.reset();

    assert!(seq.stage().snapshot().is_empty());
    assert!(seq.tape().is_empty());
    assert_eq!(seq.stage().message(), None);
    assert!(!seq.stage().is_done());
}

#[test]
fn stale_control_request_is_discarded_at_run_start() {
    let mut seq = new_seq();
    // request arrives while idle, e.g. a cancel racing a finished run
    seq.control().cancel();

    let outcome = seq.run(&mut Count { upto: 3 }).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
}

#[test]
fn run_start_clears_the_status_message() {
    let mut seq = new_seq();
    seq.post_message("Stack Overflow! Cannot push more items.");

    seq.run(&mut Count { upto: 1 }).unwrap();
    assert_eq!(seq.stage().message(), None);
}

#[test]
fn fault_surfaces_as_a_log_line() {
    let mut seq = new_seq();
    let outcome = seq.run(&mut Faulty).unwrap();

    assert_eq!(outcome, RunOutcome::Faulted);
    assert!(!seq.stage().is_done());
    assert_eq!(seq.stage().log().next(), Some("Error in faulty: boom"));
    // the applied snapshot before the fault sticks; nothing is rolled back
    assert_eq!(seq.stage().snapshot(), &vec![1]);
}

#[test]
fn seed_replaces_the_snapshot_without_events() {
    let mut seq = new_seq();
    seq.seed(vec![9, 8, 7]);

    assert_eq!(seq.stage().snapshot(), &vec![9, 8, 7]);
    assert!(seq.tape().is_empty());
}
