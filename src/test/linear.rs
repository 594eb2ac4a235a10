use crate::linear::{
    DllWorld, ListWorld, QUEUE_CAPACITY, QueueWorld, STACK_CAPACITY, StackWorld,
};
use crate::seq::{InstantPacer, Reject, RunOutcome};

fn values(world_snapshot: &[crate::linear::Entry]) -> Vec<&str> {
    world_snapshot.iter().map(|e| e.value.as_str()).collect()
}

#[test]
fn stack_rejects_the_ninth_push() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    assert_eq!(stack.capacity(), STACK_CAPACITY);

    for i in 1..=8 {
        assert_eq!(stack.push(&i.to_string()).unwrap(), RunOutcome::Completed);
    }
    assert_eq!(stack.len(), 8);

    let err = stack.push("9").unwrap_err();
    assert_eq!(
        err,
        Reject::Overflow {
            structure: "Stack",
            capacity: 8
        }
    );
    assert_eq!(stack.len(), 8);
    assert_eq!(
        stack.seq().stage().message(),
        Some("Stack Overflow! Cannot push more items.")
    );
}

#[test]
fn stack_pops_in_lifo_order() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    stack.push("A").unwrap();
    stack.push("B").unwrap();

    stack.pop().unwrap();
    assert_eq!(values(stack.seq().stage().snapshot()), ["A"]);

    stack.pop().unwrap();
    assert!(stack.is_empty());
}

#[test]
fn stack_pop_on_empty_underflows() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    let err = stack.pop().unwrap_err();
    assert_eq!(err, Reject::Underflow { structure: "Stack" });
    assert_eq!(
        stack.seq().stage().message(),
        Some("Stack Underflow! Stack is empty.")
    );
    assert!(stack.seq().tape().is_empty());
}

#[test]
fn stack_peek_reports_the_top_without_mutating() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    stack.push("A").unwrap();
    stack.push("B").unwrap();

    stack.peek().unwrap();
    assert_eq!(stack.seq().stage().message(), Some("Top Element: B"));
    assert_eq!(values(stack.seq().stage().snapshot()), ["A", "B"]);
}

#[test]
fn blank_values_are_rejected_and_inputs_trimmed() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    assert!(matches!(
        stack.push("   ").unwrap_err(),
        Reject::InvalidInput(_)
    ));
    assert!(stack.is_empty());

    stack.push("  x  ").unwrap();
    assert_eq!(values(stack.seq().stage().snapshot()), ["x"]);
}

#[test]
fn entry_ids_are_never_reused() {
    let mut stack = StackWorld::new(Box::new(InstantPacer));
    stack.push("A").unwrap();
    stack.pop().unwrap();
    stack.push("B").unwrap();

    assert_eq!(stack.seq().stage().snapshot()[0].id, 1);
}

#[test]
fn queue_is_fifo_with_the_smaller_bound() {
    let mut queue = QueueWorld::new(Box::new(InstantPacer));
    assert_eq!(queue.capacity(), QUEUE_CAPACITY);

    queue.enqueue("A").unwrap();
    queue.enqueue("B").unwrap();
    queue.enqueue("C").unwrap();

    queue.dequeue().unwrap();
    assert_eq!(values(queue.seq().stage().snapshot()), ["B", "C"]);
}

#[test]
fn queue_overflow_and_underflow_report_messages() {
    let mut queue = QueueWorld::with_capacity(2, Box::new(InstantPacer));
    queue.enqueue("A").unwrap();
    queue.enqueue("B").unwrap();

    assert!(matches!(
        queue.enqueue("C").unwrap_err(),
        Reject::Overflow { structure: "Queue", capacity: 2 }
    ));
    assert_eq!(
        queue.seq().stage().message(),
        Some("Queue Overflow! Max size reached.")
    );

    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert!(matches!(
        queue.dequeue().unwrap_err(),
        Reject::Underflow { structure: "Queue" }
    ));
    assert_eq!(
        queue.seq().stage().message(),
        Some("Queue Underflow! Queue is empty.")
    );
}

#[test]
fn list_insert_head_prepends_and_tail_appends() {
    let mut list = ListWorld::new(Box::new(InstantPacer));
    list.insert_head("B").unwrap();
    list.insert_head("A").unwrap();
    list.insert_tail("C").unwrap();

    assert_eq!(values(list.seq().stage().snapshot()), ["A", "B", "C"]);
}

#[test]
fn list_insert_tail_into_empty_becomes_head() {
    let mut list = ListWorld::new(Box::new(InstantPacer));
    list.insert_tail("A").unwrap();

    assert_eq!(values(list.seq().stage().snapshot()), ["A"]);
    let log: Vec<&str> = list.seq().stage().log().collect();
    assert!(log.contains(&"List empty, A becomes Head"));
}

#[test]
fn list_delete_removes_the_first_match() {
    let mut list = ListWorld::new(Box::new(InstantPacer));
    for v in ["A", "B", "C"] {
        list.insert_tail(v).unwrap();
    }

    assert_eq!(list.delete_value("B").unwrap(), RunOutcome::Completed);
    assert_eq!(values(list.seq().stage().snapshot()), ["A", "C"]);
    let log: Vec<&str> = list.seq().stage().log().collect();
    assert!(log.contains(&"Found B at index 1"));
}

#[test]
fn list_delete_miss_completes_and_leaves_the_list_alone() {
    let mut list = ListWorld::new(Box::new(InstantPacer));
    list.insert_head("A").unwrap();

    assert_eq!(list.delete_value("Z").unwrap(), RunOutcome::Completed);
    assert_eq!(values(list.seq().stage().snapshot()), ["A"]);
    let log: Vec<&str> = list.seq().stage().log().collect();
    assert!(log.contains(&"Value Z not found"));
}

#[test]
fn dll_supports_both_ends() {
    let mut dll = DllWorld::new(Box::new(InstantPacer));
    dll.insert_head("B").unwrap();
    dll.insert_head("A").unwrap();
    dll.insert_tail("C").unwrap();
    assert_eq!(values(dll.seq().stage().snapshot()), ["A", "B", "C"]);

    dll.delete_head().unwrap();
    assert_eq!(values(dll.seq().stage().snapshot()), ["B", "C"]);
}

#[test]
fn dll_delete_head_on_empty_underflows() {
    let mut dll = DllWorld::new(Box::new(InstantPacer));
    let err = dll.delete_head().unwrap_err();
    assert_eq!(err, Reject::Underflow { structure: "List" });
    assert_eq!(dll.seq().stage().message(), Some("List is empty"));
}

#[test]
fn reset_empties_a_populated_structure() {
    let mut queue = QueueWorld::new(Box::new(InstantPacer));
    queue.enqueue("A").unwrap();
    queue.enqueue("B").unwrap();

    queue.reset();
    assert!(queue.is_empty());
    assert_eq!(queue.seq().stage().log_len(), 0);
}
