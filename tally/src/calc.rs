use crate::parser::{RPNExpr, to_postfix};
use crate::rpneval::evaluate;
use numlex::tokenize;

/// Scan and reorder an infix expression into its postfix form.
pub fn parse(expr: &str) -> crate::Result<RPNExpr> {
    let tokens = tokenize(expr)?;
    Ok(to_postfix(tokens)?)
}

/// Evaluate an infix expression and render the result as a string.
///
/// The whole pipeline runs under one [`crate::Result`], so callers see a
/// structured [`crate::CalcError`] no matter which stage failed.
pub fn calculate(expr: &str) -> crate::Result<String> {
    match parse(expr).and_then(|rpn| evaluate(&rpn)) {
        Ok(value) => Ok(value.to_string()),
        Err(err) => {
            tracing::debug!("cannot evaluate '{}': {}", expr, err);
            Err(err)
        }
    }
}
