//! Value Document Loader
//!
//! Loads and validates JSON value documents of the form
//! `{"heap": [Value, ...], "root": Value}`.
//! This layer performs structural validation only: every heap reference must
//! resolve and the heap must fit the configured slot limit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ZeroConfig;
use crate::error::{ZeroError, ZeroResult};
use crate::runtime::{Heap, HeapRef, Value};

/// Serialized form of a value graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDocument {
    #[serde(default)]
    pub heap: Vec<Value>,
    pub root: Value,
}

/// Validated document ready for evaluation
#[derive(Debug)]
pub struct LoadedDocument {
    pub heap: Heap,
    pub root: Value,
}

impl LoadedDocument {
    pub fn is_zero(&self) -> bool {
        self.heap.is_zero(&self.root)
    }
}

/// Document loader
pub struct DocumentLoader;

impl DocumentLoader {
    /// Load a document from a JSON file
    pub fn load_path(path: &Path, config: &ZeroConfig) -> ZeroResult<LoadedDocument> {
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read value document");
        Self::load(&bytes, config)
    }

    /// Load a document from raw JSON bytes
    pub fn load(bytes: &[u8], config: &ZeroConfig) -> ZeroResult<LoadedDocument> {
        let document: ValueDocument = serde_json::from_slice(bytes)?;
        Self::from_document(document, config)
    }

    /// Validate an in-memory document
    pub fn from_document(document: ValueDocument, config: &ZeroConfig) -> ZeroResult<LoadedDocument> {
        let heap_len = document.heap.len();
        if heap_len > config.max_heap_slots {
            return Err(ZeroError::HeapExhausted { limit: config.max_heap_slots });
        }

        for slot in &document.heap {
            Self::check_refs(slot, heap_len)?;
        }
        Self::check_refs(&document.root, heap_len)?;

        let heap = Heap::from_slots(document.heap, config)?;
        Ok(LoadedDocument { heap, root: document.root })
    }

    /// Reject references that do not resolve in a heap of `heap_len` slots
    fn check_refs(value: &Value, heap_len: usize) -> ZeroResult<()> {
        match value {
            Value::Ref(Some(reference)) => {
                if reference.index() >= heap_len {
                    return Err(ZeroError::DanglingRef { reference: *reference, heap_len });
                }
                Ok(())
            }
            Value::Seq(items) | Value::Array(items) => {
                items.iter().try_for_each(|item| Self::check_refs(item, heap_len))
            }
            Value::Map(entries) => entries.iter().try_for_each(|(k, v)| {
                Self::check_refs(k, heap_len)?;
                Self::check_refs(v, heap_len)
            }),
            Value::Struct(s) => s
                .fields
                .iter()
                .try_for_each(|field| Self::check_refs(&field.value, heap_len)),
            Value::Dyn(Some(inner)) => Self::check_refs(inner, heap_len),
            Value::Named(named) => Self::check_refs(&named.value, heap_len),
            _ => Ok(()),
        }
    }
}

/// A small document whose root points at a self-referential record
pub fn sample_document() -> ValueDocument {
    let node = HeapRef(0);
    ValueDocument {
        heap: vec![Value::record(
            "Node",
            [
                ("id", Value::from(0)),
                ("next", Value::reference(node)),
                ("tags", Value::seq([])),
            ],
        )],
        root: Value::reference(node),
    }
}
