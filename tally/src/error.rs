use numlex::LexError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Structural failure while converting infix tokens to postfix.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyntaxError {
    #[error("unmatched closing parenthesis")]
    UnmatchedCParen,
}

/// Arithmetic failure while evaluating.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MathError {
    #[error("cannot divide by zero")]
    DivideByZero,
    #[error("'{0}' is not a number")]
    BadNumber(String),
    #[error("result is not a number")]
    NotANumber,
}

/// Malformed postfix stream. Streams built by [`crate::parse`] from
/// well-formed input never trigger these.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("unexpected token '{0}' in postfix stream")]
    BadToken(String),
    #[error("{0} values left after evaluation")]
    LeftoverOperands(usize),
}

/// Any failure the pipeline can surface, tagged by stage.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
