//! Zero Evaluator
//!
//! Recursive, kind-driven check of whether a value equals the default value of
//! its type. Aggregates (arrays, structs) are zero when every member is zero;
//! collections (sequences, text, maps) are zero when empty, whatever they hold.
//!
//! Addressable values (heap slots reached through a `Ref`, and members of
//! addressable aggregates) are recorded before their children are visited.
//! A second visit of the same storage with the same type is treated as zero,
//! which bounds the traversal on cyclic graphs. This also short-circuits
//! aliased sibling branches; entries are kept for the whole evaluation.

use tracing::{debug, trace, warn};

use crate::runtime::{Heap, Value};

use super::seen::{SeenSet, Visit};

/// Per-call evaluator state
#[derive(Debug)]
pub struct ZeroEvaluator<'a> {
    heap: &'a Heap,
    seen: SeenSet<'a>,
}

impl<'a> ZeroEvaluator<'a> {
    pub fn new(heap: &'a Heap) -> Self {
        ZeroEvaluator {
            heap,
            seen: SeenSet::new(),
        }
    }

    pub fn with_capacity(heap: &'a Heap, capacity: usize) -> Self {
        ZeroEvaluator {
            heap,
            seen: SeenSet::with_capacity(capacity),
        }
    }

    /// Evaluate `value`, consuming the evaluator and its seen set
    pub fn evaluate(mut self, value: &'a Value) -> bool {
        // the root is a transient copy, never addressable
        let zero = self.visit(value, false);
        debug!(zero, visited = self.seen.len(), kind = %value.kind(), "zero evaluation finished");
        zero
    }

    fn visit(&mut self, value: &'a Value, addressable: bool) -> bool {
        if addressable {
            let visit = Visit::of(value);
            if !self.seen.insert(visit) {
                trace!(address = visit.address, ty = %visit.ty, "value already visited, treating as zero");
                return true;
            }
        }
        self.dispatch(value, addressable)
    }

    fn dispatch(&mut self, value: &'a Value, addressable: bool) -> bool {
        let heap = self.heap;
        match value {
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
            Value::Complex { re, im } => *re == 0.0 && *im == 0.0,

            Value::Ref(None) | Value::Dyn(None) => true,
            Value::Ref(Some(r)) => match heap.get(*r) {
                Some(target) => self.visit(target, true),
                None => {
                    warn!(reference = %r, heap_len = heap.len(), "unresolvable heap reference, treating as non-zero");
                    false
                }
            },
            Value::Dyn(Some(inner)) => self.visit(inner, false),

            Value::Array(items) => items.iter().all(|item| self.visit(item, addressable)),
            Value::Struct(s) => s
                .fields
                .iter()
                .all(|field| self.visit(&field.value, addressable)),

            Value::Seq(items) => items.is_empty(),
            Value::Str(s) => s.is_empty(),
            Value::Map(entries) => entries.is_empty(),

            Value::Func(f) => f.is_none(),
            Value::Chan(c) => c.is_none(),
            Value::RawPtr(p) => p.is_none(),

            // same storage as the wrapper, already recorded under the named type
            Value::Named(named) => self.dispatch(&named.value, addressable),
        }
    }
}

/// Report whether `value` is zero for its type, resolving references in `heap`
pub fn is_zero(heap: &Heap, value: &Value) -> bool {
    heap.is_zero(value)
}
