use crate::session::{OpSpec, SessionSpec, StructureSpec};

#[test]
fn parses_a_bounded_stack_script() {
    let spec: SessionSpec = serde_json::from_str(
        r#"{
            "schema_version": 1,
            "meta": {"label": "overflow demo"},
            "structure": {"kind": "stack", "capacity": 2},
            "ops": [
                {"op": "push", "value": "A"},
                {"op": "push", "value": "B"},
                {"op": "push", "value": "C"},
                {"op": "pop"}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(spec.schema_version, 1);
    assert_eq!(spec.meta.unwrap().label.as_deref(), Some("overflow demo"));
    assert!(matches!(
        spec.structure,
        StructureSpec::Stack { capacity: Some(2) }
    ));
    assert_eq!(spec.ops.len(), 4);
    assert_eq!(spec.ops[0].label(), "push");
    assert_eq!(spec.ops[3].label(), "pop");
}

#[test]
fn capacity_and_ops_are_optional() {
    let spec: SessionSpec = serde_json::from_str(
        r#"{"schema_version": 1, "structure": {"kind": "queue"}}"#,
    )
    .unwrap();

    assert!(spec.meta.is_none());
    assert!(matches!(
        spec.structure,
        StructureSpec::Queue { capacity: None }
    ));
    assert!(spec.ops.is_empty());
}

#[test]
fn tree_and_recursion_ops_carry_numeric_payloads() {
    let spec: SessionSpec = serde_json::from_str(
        r#"{
            "schema_version": 1,
            "structure": {"kind": "tree"},
            "ops": [
                {"op": "insert", "value": 5},
                {"op": "insert", "value": -3},
                {"op": "reset"}
            ]
        }"#,
    )
    .unwrap();

    assert!(matches!(spec.ops[0], OpSpec::Insert { value: 5 }));
    assert!(matches!(spec.ops[1], OpSpec::Insert { value: -3 }));
    assert!(matches!(spec.ops[2], OpSpec::Reset));

    let rec: SessionSpec = serde_json::from_str(
        r#"{
            "schema_version": 1,
            "structure": {"kind": "recursion"},
            "ops": [{"op": "factorial", "n": 5}]
        }"#,
    )
    .unwrap();
    assert!(matches!(rec.ops[0], OpSpec::Factorial { n: 5 }));
}

#[test]
fn op_tags_round_trip() {
    let op = OpSpec::Push {
        value: "A".to_string(),
    };
    let json = serde_json::to_string(&op).unwrap();
    assert_eq!(json, r#"{"op":"push","value":"A"}"#);

    let back: OpSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back.label(), "push");
}
