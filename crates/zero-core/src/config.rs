//! Zero Core Configuration
//!
//! Defines limits for heap construction and sizing hints for evaluation.
//! Configuration specifies constraints only; enforcement is handled by the heap.

use serde::{Deserialize, Serialize};

/// Evaluator and heap configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroConfig {
    /// Maximum number of slots a heap may hold
    pub max_heap_slots: usize,

    /// Initial capacity of the per-call seen set
    pub seen_capacity: usize,
}

impl Default for ZeroConfig {
    fn default() -> Self {
        ZeroConfig {
            max_heap_slots: 1 << 20,
            seen_capacity: 16,
        }
    }
}

impl ZeroConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
