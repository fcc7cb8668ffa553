use crate::error::SyntaxError;
use numlex::Token;

/// A postfix (reverse polish) rendering of an infix expression.
#[derive(Clone, Debug, PartialEq)]
pub struct RPNExpr(pub Vec<Token>);

impl RPNExpr {
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }
}

/// Binding strength used to decide stack pops. Parentheses rank highest
/// but only ever mark boundaries on the stack, they are never compared
/// as operators.
pub fn precedence(token: &Token) -> usize {
    match token {
        Token::OParen | Token::CParen => 3,
        Token::Op('*') | Token::Op('/') => 2,
        Token::Op('+') | Token::Op('-') => 1,
        _ => 0,
    }
}

/// Reorder infix tokens into postfix with the shunting yard algorithm.
///
/// Equal precedence pops the stack first, so `1-2+3` evaluates left to
/// right. An unmatched `(` is not detected here; it flows into the output
/// where evaluation rejects it.
pub fn to_postfix(tokens: Vec<Token>) -> Result<RPNExpr, SyntaxError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => out.push(token),
            Token::Op(_) => {
                while let Some(top) = stack.last() {
                    if !matches!(top, Token::Op(_)) || precedence(&token) > precedence(top) {
                        break;
                    }
                    out.push(stack.pop().unwrap());
                }
                stack.push(token);
            }
            Token::OParen => stack.push(token),
            Token::CParen => loop {
                match stack.pop() {
                    Some(Token::OParen) => break,
                    Some(top) => out.push(top),
                    None => return Err(SyntaxError::UnmatchedCParen),
                }
            },
        }
    }
    while let Some(top) = stack.pop() {
        out.push(top);
    }
    Ok(RPNExpr(out))
}
