use crate::error::{EvalError, MathError};
use crate::parser::RPNExpr;
use numlex::Token;

/// Evaluate a postfix expression down to a single value.
///
/// Number spellings are parsed to `f64` here, not at scan time, so a
/// degenerate spelling like a bare `-` surfaces as [`MathError::BadNumber`].
/// The right operand of an operator is popped first.
pub fn evaluate(rpn: &RPNExpr) -> crate::Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in rpn.iter() {
        match token {
            Token::Number(text) => match text.parse::<f64>() {
                Ok(num) => operands.push(num),
                Err(_) => return Err(MathError::BadNumber(text.clone()).into()),
            },
            Token::Op(op) => {
                let rhs = operands.pop().ok_or(EvalError::MissingOperand)?;
                let lhs = operands.pop().ok_or(EvalError::MissingOperand)?;
                operands.push(apply(*op, lhs, rhs)?);
            }
            stray => return Err(EvalError::BadToken(stray.to_string()).into()),
        }
    }

    let value = operands.pop().ok_or(EvalError::MissingOperand)?;
    if !operands.is_empty() {
        return Err(EvalError::LeftoverOperands(operands.len() + 1).into());
    }
    if value.is_nan() {
        return Err(MathError::NotANumber.into());
    }
    Ok(value)
}

fn apply(op: char, lhs: f64, rhs: f64) -> crate::Result<f64> {
    match op {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        '/' if rhs == 0.0 => Err(MathError::DivideByZero.into()),
        '/' => Ok(lhs / rhs),
        other => Err(EvalError::BadToken(other.to_string()).into()),
    }
}
