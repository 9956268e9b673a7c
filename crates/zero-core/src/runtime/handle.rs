//! Handle identifiers
//!
//! Small, copyable ids for heap slots, executable references and channels.
//! No policy here: ids carry identity only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a slot in a [`Heap`](super::Heap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeapRef(pub u32);

impl HeapRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for HeapRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for HeapRef {
    fn from(raw: u32) -> Self {
        HeapRef(raw)
    }
}

impl From<HeapRef> for u32 {
    fn from(r: HeapRef) -> Self {
        r.0
    }
}

/// Executable reference (function value) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuncId(pub u32);

/// Channel handle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChanId(pub u32);

impl From<u32> for FuncId {
    fn from(raw: u32) -> Self {
        FuncId(raw)
    }
}

impl From<u32> for ChanId {
    fn from(raw: u32) -> Self {
        ChanId(raw)
    }
}
