//! Zero checks on a plain record and on pointers to it.
//!
//! Prints:
//! true
//! true
//! false
//! false

use zero_core::{is_zero, Heap, Value, ZeroResult};

fn structure(id: i64) -> Value {
    Value::record("Structure", [("id", Value::from(id))])
}

fn main() -> ZeroResult<()> {
    let mut heap = Heap::new();

    let zero_structure = structure(0);
    let zero_structure_pointer = Value::reference(heap.alloc(zero_structure.clone())?);
    let non_zero = structure(1);
    let non_zero_pointer = Value::reference(heap.alloc(non_zero.clone())?);

    println!("{}", is_zero(&heap, &zero_structure));
    println!("{}", is_zero(&heap, &zero_structure_pointer));
    println!("{}", is_zero(&heap, &non_zero));
    println!("{}", is_zero(&heap, &non_zero_pointer));
    Ok(())
}
