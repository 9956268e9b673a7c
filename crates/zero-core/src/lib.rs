//! Zero Core Library
//!
//! Public API surface for the cycle-safe zero-value evaluator.

pub mod error;
pub mod config;
pub mod runtime;
pub mod zero;
pub mod document;

// Re-export commonly used types
pub use error::{ZeroError, ZeroResult};
pub use config::ZeroConfig;
pub use runtime::{Heap, HeapRef, Value};
pub use zero::{is_zero, ZeroEvaluator};
pub use document::DocumentLoader;
