pub use calc::{calculate, parse};
pub use error::{CalcError, EvalError, MathError, Result, SyntaxError};
pub use parser::{RPNExpr, precedence, to_postfix};
pub use rpneval::evaluate;
pub use session::{Key, Session};

mod calc;
mod error;
mod parser;
mod rpneval;
mod rpnprint;
mod session;

#[cfg(test)]
mod rpneval_test;
