//! Heap Memory Model
//!
//! Index-based arena of value slots. A [`HeapRef`] is the stable identity of a
//! slot; slots may be reserved before they are filled so that values can
//! point at themselves.

use tracing::debug;

use crate::config::ZeroConfig;
use crate::error::{ZeroError, ZeroResult};
use crate::zero::ZeroEvaluator;

use super::handle::HeapRef;
use super::value::Value;

/// Heap slot storage
#[derive(Debug, Clone)]
pub struct Heap {
    slots: Vec<Value>,
    max_slots: usize,
    seen_capacity: usize,
}

impl Default for Heap {
    fn default() -> Self {
        Heap::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        Self::with_config(&ZeroConfig::default())
    }

    pub fn with_config(config: &ZeroConfig) -> Self {
        Heap {
            slots: Vec::new(),
            max_slots: config.max_heap_slots,
            seen_capacity: config.seen_capacity,
        }
    }

    /// Build a heap from pre-filled slots (document loading)
    pub fn from_slots(slots: Vec<Value>, config: &ZeroConfig) -> ZeroResult<Self> {
        if slots.len() > config.max_heap_slots {
            return Err(ZeroError::HeapExhausted { limit: config.max_heap_slots });
        }
        debug!(slots = slots.len(), "heap built from slots");
        Ok(Heap {
            slots,
            max_slots: config.max_heap_slots,
            seen_capacity: config.seen_capacity,
        })
    }

    /// Allocate a slot holding `value`
    pub fn alloc(&mut self, value: Value) -> ZeroResult<HeapRef> {
        if self.slots.len() >= self.max_slots {
            return Err(ZeroError::HeapExhausted { limit: self.max_slots });
        }
        let index = u32::try_from(self.slots.len())
            .map_err(|_| ZeroError::HeapExhausted { limit: self.max_slots })?;
        self.slots.push(value);
        Ok(HeapRef(index))
    }

    /// Allocate a nil slot to be filled later with [`Heap::store`]
    pub fn reserve(&mut self) -> ZeroResult<HeapRef> {
        self.alloc(Value::nil())
    }

    pub fn get(&self, r: HeapRef) -> Option<&Value> {
        self.slots.get(r.index())
    }

    pub fn load(&self, r: HeapRef) -> ZeroResult<&Value> {
        self.get(r).ok_or(ZeroError::InvalidRef(r))
    }

    pub fn load_mut(&mut self, r: HeapRef) -> ZeroResult<&mut Value> {
        self.slots.get_mut(r.index()).ok_or(ZeroError::InvalidRef(r))
    }

    pub fn store(&mut self, r: HeapRef, value: Value) -> ZeroResult<()> {
        *self.load_mut(r)? = value;
        Ok(())
    }

    pub fn contains(&self, r: HeapRef) -> bool {
        r.index() < self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Report whether `value`, resolved against this heap, is zero
    pub fn is_zero(&self, value: &Value) -> bool {
        ZeroEvaluator::with_capacity(self, self.seen_capacity).evaluate(value)
    }
}
