use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zero_core::{is_zero, Heap, Value};

fn detail_with_param() -> Value {
    Value::record(
        "Detail",
        [
            ("id", Value::from(0)),
            ("detail", Value::nil()),
            (
                "data",
                Value::record(
                    "DetailSub",
                    [
                        ("id", Value::from(0)),
                        ("params", Value::seq([Value::record("DetailParam", [("id", Value::from(55))])])),
                    ],
                ),
            ),
        ],
    )
}

fn empty_param() -> Value {
    Value::record("DetailParam", [("id", Value::from(0))])
}

/// One-level emptiness of a single member, used as a baseline: no recursion,
/// no cycle tracking, arrays judged by length.
fn is_empty_member(value: &Value) -> bool {
    match value.underlying() {
        Value::Array(items) | Value::Seq(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Str(s) => s.is_empty(),
        Value::Bool(b) => !*b,
        Value::Int(n) => *n == 0,
        Value::Uint(n) => *n == 0,
        Value::Float(x) => *x == 0.0,
        Value::Ref(r) => r.is_none(),
        Value::Dyn(d) => d.is_none(),
        _ => false,
    }
}

fn is_empty_record(heap: &Heap, pointer: &Value) -> bool {
    let Value::Ref(Some(r)) = pointer else {
        return false;
    };
    match heap.get(*r) {
        Some(Value::Struct(s)) => s.fields.iter().all(|field| is_empty_member(&field.value)),
        _ => false,
    }
}

fn bench_zero(c: &mut Criterion) {
    let mut heap = Heap::new();
    let detail = match heap.alloc(detail_with_param()) {
        Ok(r) => Value::reference(r),
        Err(e) => panic!("alloc failed in bench detail.rs: {}", e),
    };
    let simple = match heap.alloc(empty_param()) {
        Ok(r) => Value::reference(r),
        Err(e) => panic!("alloc failed in bench detail.rs: {}", e),
    };

    c.bench_function("detail", |b| b.iter(|| is_zero(&heap, black_box(&detail))));
    c.bench_function("detail_simple", |b| b.iter(|| is_zero(&heap, black_box(&simple))));
    c.bench_function("is_empty", |b| b.iter(|| is_empty_record(&heap, black_box(&detail))));
    c.bench_function("is_empty_simple", |b| b.iter(|| is_empty_record(&heap, black_box(&simple))));
}

criterion_group!(benches, bench_zero);
criterion_main!(benches);
