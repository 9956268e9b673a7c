//! Zero Core Error Types
//!
//! Error conditions produced by the scaffolding around the evaluator:
//! heap construction, slot access, document loading and file IO.
//! The evaluator itself is total and never reports an error.

use std::io;

use thiserror::Error;

use crate::runtime::HeapRef;

#[derive(Debug, Error)]
pub enum ZeroError {
    // Heap errors
    #[error("heap exhausted: limit of {limit} slots reached")]
    HeapExhausted { limit: usize },

    #[error("invalid heap reference: {0}")]
    InvalidRef(HeapRef),

    // Document errors
    #[error("dangling heap reference {reference} (heap has {heap_len} slots)")]
    DanglingRef { reference: HeapRef, heap_len: usize },

    #[error("malformed value document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    // IO boundary
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type ZeroResult<T> = Result<T, ZeroError>;
