#![deny(warnings)]

use crate::token::{OPERATORS, Token};
use thiserror::Error;

/// Ways an input string can fail to scan.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LexError {
    #[error("invalid number '{0}'")]
    MultipleDecimalPoints(String),
    #[error("operator '{1}' cannot follow '{0}'")]
    InvalidOperatorSequence(char, char),
    #[error("empty parentheses")]
    EmptyParens,
    #[error("expression ends with an operator or open parenthesis")]
    UnexpectedEnd,
    #[error("unexpected character '{0}'")]
    UnknownChar(char),
}

/// Split an infix expression into tagged tokens.
///
/// Scans left to right buffering number spellings until an adjacent
/// non-number character flushes them. Along the way it folds unary signs
/// into the upcoming number, inserts `*` for implicit multiplication, and
/// rejects malformed input.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Tokenizer::default();
    for ch in expr.chars() {
        scanner.scan(ch)?;
    }
    scanner.finish()
}

#[derive(Default)]
struct Tokenizer {
    tokens: Vec<Token>,
    pending: String,
}

impl Tokenizer {
    fn scan(&mut self, ch: char) -> Result<(), LexError> {
        match ch {
            // whitespace separates nothing, "1 2" scans like "12"
            c if c.is_whitespace() => {}
            '0'..='9' | '.' => self.scan_digit(ch)?,
            c if OPERATORS.contains(&c) => self.scan_op(c)?,
            '(' => self.scan_oparen(),
            ')' => self.scan_cparen()?,
            c => return Err(LexError::UnknownChar(c)),
        }
        Ok(())
    }

    fn scan_digit(&mut self, ch: char) -> Result<(), LexError> {
        if ch == '.' && self.pending.contains('.') {
            self.pending.push(ch);
            return Err(LexError::MultipleDecimalPoints(std::mem::take(
                &mut self.pending,
            )));
        }
        // a digit straight after ')' multiplies, as in "(2)3"
        if self.tokens.last() == Some(&Token::CParen) {
            self.tokens.push(Token::Op('*'));
        }
        self.pending.push(ch);
        Ok(())
    }

    fn scan_op(&mut self, ch: char) -> Result<(), LexError> {
        self.flush_pending();
        let unary = matches!(
            self.tokens.last(),
            None | Some(Token::Op(_)) | Some(Token::OParen)
        );
        if unary && ch == '-' {
            // the sign becomes part of the upcoming number's spelling
            self.pending.push('-');
            return Ok(());
        }
        if unary && ch == '+' {
            return Ok(());
        }
        if let Some(&Token::Op(prev)) = self.tokens.last() {
            return Err(LexError::InvalidOperatorSequence(prev, ch));
        }
        self.tokens.push(Token::Op(ch));
        Ok(())
    }

    fn scan_oparen(&mut self) {
        // "2(" and ")(" multiply implicitly
        if !self.pending.is_empty() || self.tokens.last() == Some(&Token::CParen) {
            self.flush_pending();
            self.tokens.push(Token::Op('*'));
        }
        self.tokens.push(Token::OParen);
    }

    fn scan_cparen(&mut self) -> Result<(), LexError> {
        self.flush_pending();
        if self.tokens.last() == Some(&Token::OParen) {
            return Err(LexError::EmptyParens);
        }
        self.tokens.push(Token::CParen);
        Ok(())
    }

    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            self.tokens
                .push(Token::Number(std::mem::take(&mut self.pending)));
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, LexError> {
        // a dangling sign buffer is a trailing operator, "5*-" and "-"
        if self.pending == "-" {
            return Err(LexError::UnexpectedEnd);
        }
        self.flush_pending();
        let trailing = matches!(
            self.tokens.last(),
            Some(Token::Op(_)) | Some(Token::OParen)
        );
        if trailing {
            return Err(LexError::UnexpectedEnd);
        }
        Ok(self.tokens)
    }
}
