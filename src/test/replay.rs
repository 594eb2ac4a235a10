use crate::seq::{EventKind, InstantPacer, Stage, VisualEvent};
use crate::sort::{SortAlgo, SortWorld};

fn sorted_world() -> (Vec<i64>, SortWorld) {
    let initial = vec![5, 3, 8, 1];
    let mut world = SortWorld::new(Box::new(InstantPacer));
    world.seed(initial.clone());
    world.sort(SortAlgo::Bubble).unwrap();
    (initial, world)
}

#[test]
fn replaying_the_tape_reproduces_the_stage() {
    let (initial, world) = sorted_world();
    let replayed = Stage::replay(initial, world.seq().tape());
    assert_eq!(&replayed, world.seq().stage());
}

#[test]
fn a_tape_prefix_reproduces_the_intermediate_state() {
    let (initial, world) = sorted_world();
    let tape = world.seq().tape();

    let cut = tape.len() / 2;
    let replayed = Stage::replay(initial, &tape[..cut]);
    assert!(!replayed.is_done());
    assert_eq!(replayed.snapshot().len(), 4);
}

#[test]
fn tapes_survive_a_json_round_trip() {
    let (_, world) = sorted_world();
    let tape = world.seq().tape();

    let json = serde_json::to_string(tape).unwrap();
    let back: Vec<VisualEvent<Vec<i64>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, tape);
}

#[test]
fn events_serialize_with_a_flat_kind_tag() {
    let (_, world) = sorted_world();
    let value = serde_json::to_value(world.seq().tape()).unwrap();
    let events = value.as_array().unwrap();

    assert_eq!(events[0]["kind"], "set_complexity");
    assert_eq!(events[0]["complexity"]["operation"], "Bubble Sort");
    assert_eq!(events.last().unwrap()["kind"], "complete");
    assert!(events.iter().any(|e| e["kind"] == "mutate_snapshot"));
    // hold is a bare millisecond count
    assert!(events[0]["hold"].is_u64());
}
