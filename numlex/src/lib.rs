pub use token::{OPERATORS, Token};
pub use tokenizer::{LexError, tokenize};

mod token;
mod tokenizer;
