#![deny(warnings)]

use std::fmt;

/// The binary operator characters the scanner recognizes.
pub const OPERATORS: &[char] = &['+', '-', '*', '/'];

/// A lexical unit of calculator input.
///
/// Each token is tagged with its kind when the scanner creates it and the
/// tag is never re-derived downstream. Numbers carry their textual spelling
/// (an optional leading minus folded in by the scanner, digits, at most one
/// decimal point) and are only converted to `f64` at evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(String),
    Op(char),
    OParen,
    CParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}
