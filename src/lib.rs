pub mod cli;
pub mod diagnostic;
pub mod interpreter;
pub mod token;

pub use interpreter::{evaluate, Interpreter, ParsingError};
pub use token::{Token, TokenKind};
