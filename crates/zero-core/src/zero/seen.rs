//! Visit tracking for cycle suppression
//!
//! A visit is identified by the storage address of a borrowed value plus its
//! type. Addresses stay valid for as long as the heap and the root value are
//! borrowed, which covers exactly one evaluation.

use rustc_hash::FxHashSet;

use crate::runtime::{TypeKey, Value};

/// Identity of one addressable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit<'a> {
    pub address: usize,
    pub ty: TypeKey<'a>,
}

impl<'a> Visit<'a> {
    pub fn of(value: &'a Value) -> Self {
        Visit {
            address: value as *const Value as usize,
            ty: value.type_key(),
        }
    }
}

/// Visits recorded during one evaluation. Entries are never removed.
#[derive(Debug, Default)]
pub struct SeenSet<'a> {
    visits: FxHashSet<Visit<'a>>,
}

impl<'a> SeenSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SeenSet {
            visits: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record `visit`; returns `false` if it was already present
    pub fn insert(&mut self, visit: Visit<'a>) -> bool {
        self.visits.insert(visit)
    }

    pub fn contains(&self, visit: &Visit<'a>) -> bool {
        self.visits.contains(visit)
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_storage_different_type_is_distinct() {
        let inner = Value::from("");
        let named = Value::named("myString", Value::from(""));
        let a = Visit::of(&inner);
        let b = Visit { address: a.address, ty: named.type_key() };

        let mut seen = SeenSet::new();
        assert!(seen.insert(a));
        assert!(seen.insert(b));
        assert!(!seen.insert(a));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn distinct_storage_same_type_is_distinct() {
        let values = [Value::from(0), Value::from(0)];
        let mut seen = SeenSet::with_capacity(2);
        assert!(seen.insert(Visit::of(&values[0])));
        assert!(seen.insert(Visit::of(&values[1])));
        assert!(seen.contains(&Visit::of(&values[0])));
    }
}
