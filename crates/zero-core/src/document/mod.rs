pub mod loader;

pub use loader::{sample_document, DocumentLoader, LoadedDocument, ValueDocument};
