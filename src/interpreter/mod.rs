pub mod error;
pub mod evaluator;

pub use error::ParsingError;
pub use evaluator::{evaluate, evaluate_with_diagnostics, Interpreter};
