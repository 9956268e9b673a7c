pub mod handle;
pub mod heap;
pub mod value;

pub use handle::{ChanId, FuncId, HeapRef};
pub use heap::Heap;
pub use value::{Field, Kind, NamedValue, StructValue, TypeKey, Value};
