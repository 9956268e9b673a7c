pub mod evaluator;
pub mod seen;

pub use evaluator::{is_zero, ZeroEvaluator};
pub use seen::{SeenSet, Visit};
