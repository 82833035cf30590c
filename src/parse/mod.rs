mod lexer;
mod parser;
mod token;

pub use lexer::{Field, Lexer, Line};
pub use parser::*;
pub use token::Token;
