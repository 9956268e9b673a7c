use zero_core::{is_zero, Heap, HeapRef, Value, ZeroEvaluator};

// Builds `slot = f(slot)` so the stored value can point at its own slot.
fn knot(heap: &mut Heap, f: impl FnOnce(HeapRef) -> Value) -> HeapRef {
    let slot = heap.reserve().expect("reserve failed");
    heap.store(slot, f(slot)).expect("store failed");
    slot
}

#[test]
fn self_pointer_is_zero() {
    let mut heap = Heap::new();
    let p = knot(&mut heap, Value::reference);
    assert!(is_zero(&heap, &Value::reference(p)));
}

#[test]
fn dyn_pointing_at_itself_is_zero() {
    // var p any; p = &p
    let mut heap = Heap::new();
    let p = knot(&mut heap, |slot| Value::boxed(Value::reference(slot)));
    assert!(is_zero(&heap, &Value::reference(p)));
    assert!(is_zero(&heap, &Value::boxed(Value::reference(p))));
}

#[test]
fn self_containing_sequence_is_not_zero() {
    let mut heap = Heap::new();
    let s = knot(&mut heap, |slot| Value::seq([Value::reference(slot)]));
    assert!(!is_zero(&heap, &Value::reference(s)));
}

#[test]
fn two_node_ring() {
    let mut heap = Heap::new();
    let a = heap.reserve().expect("reserve failed");
    let b = heap.reserve().expect("reserve failed");
    let node = |next: HeapRef, id: i64| {
        Value::record("Ring", [("next", Value::reference(next)), ("id", Value::from(id))])
    };

    heap.store(a, node(b, 0)).expect("store failed");
    heap.store(b, node(a, 0)).expect("store failed");
    assert!(is_zero(&heap, &Value::reference(a)));
    assert!(is_zero(&heap, &Value::reference(b)));

    heap.store(b, node(a, 9)).expect("store failed");
    assert!(!is_zero(&heap, &Value::reference(a)));
    assert!(!is_zero(&heap, &Value::reference(b)));
}

#[test]
fn self_record_checks_remaining_fields() {
    let mut heap = Heap::new();
    let zero = knot(&mut heap, |slot| {
        Value::record("Node", [("me", Value::reference(slot)), ("name", Value::from(""))])
    });
    let named = knot(&mut heap, |slot| {
        Value::record("Node", [("me", Value::reference(slot)), ("name", Value::from("x"))])
    });

    assert!(is_zero(&heap, &Value::reference(zero)));
    assert!(!is_zero(&heap, &Value::reference(named)));
}

#[test]
fn aliased_siblings_short_circuit() {
    // Both fields alias one zero slot; the second visit is answered from the
    // seen set instead of a fresh expansion.
    let mut heap = Heap::new();
    let shared = heap.alloc(Value::from(0)).expect("alloc failed");
    let pair = heap
        .alloc(Value::record(
            "Pair",
            [("left", Value::reference(shared)), ("right", Value::reference(shared))],
        ))
        .expect("alloc failed");

    let root = Value::reference(pair);
    assert!(ZeroEvaluator::new(&heap).evaluate(&root));
}

#[test]
fn deep_chain_without_cycle() {
    let mut heap = Heap::new();
    let mut next = Value::null_ref();
    for _ in 0..256 {
        let r = heap.alloc(next).expect("alloc failed");
        next = Value::reference(r);
    }
    assert!(is_zero(&heap, &next));

    let tail = heap.alloc(Value::from(true)).expect("alloc failed");
    heap.store(HeapRef(0), Value::reference(tail)).expect("store failed");
    assert!(!is_zero(&heap, &next));
}
