use crate::error::{CalcError, EvalError, MathError};
use crate::parser::{RPNExpr, to_postfix};
use crate::rpneval::evaluate;
use numlex::{Token, tokenize};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

fn eval_str(expr: &str) -> crate::Result<f64> {
    evaluate(&to_postfix(tokenize(expr).unwrap()).unwrap())
}

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn evaluates_mixed_expressions() {
    fuzzy_eq!(eval_str("3+4*2/(1-5)").unwrap(), 1.0);
    fuzzy_eq!(eval_str("(3+4)*3").unwrap(), 21.0);
    fuzzy_eq!(eval_str("1+2*3-4").unwrap(), 3.0);
}

#[test]
fn division_is_left_associative() {
    fuzzy_eq!(eval_str("8/4/2").unwrap(), 1.0);
    fuzzy_eq!(eval_str("8/(4/2)").unwrap(), 4.0);
}

#[test]
fn negative_operands() {
    fuzzy_eq!(eval_str("2--3").unwrap(), 5.0);
    fuzzy_eq!(eval_str("2*-3").unwrap(), -6.0);
    fuzzy_eq!(eval_str("-2*-3").unwrap(), 6.0);
}

#[test]
fn division_by_zero() {
    assert_eq!(
        eval_str("1/0"),
        Err(CalcError::Math(MathError::DivideByZero))
    );
    assert_eq!(
        eval_str("5/(3-3)"),
        Err(CalcError::Math(MathError::DivideByZero))
    );
    // negative zero is still zero
    assert_eq!(
        eval_str("1/-0"),
        Err(CalcError::Math(MathError::DivideByZero))
    );
    fuzzy_eq!(eval_str("0/5").unwrap(), 0.0);
}

#[test]
fn degenerate_sign_spellings_fail_to_parse() {
    assert_eq!(
        eval_str("--1"),
        Err(CalcError::Math(MathError::BadNumber("-".to_string())))
    );
    assert_eq!(
        eval_str("-(2)"),
        Err(CalcError::Math(MathError::BadNumber("-".to_string())))
    );
}

#[test]
fn overflowing_literals_can_produce_nan() {
    let big = "9".repeat(400);
    assert_eq!(
        eval_str(&format!("{}-{}", big, big)),
        Err(CalcError::Math(MathError::NotANumber))
    );
}

#[test]
fn stray_open_paren_rejected() {
    assert_eq!(
        eval_str("(1+2"),
        Err(CalcError::Eval(EvalError::BadToken("(".to_string())))
    );
}

#[test]
fn malformed_streams_rejected() {
    assert_eq!(
        evaluate(&RPNExpr(vec![])),
        Err(CalcError::Eval(EvalError::MissingOperand))
    );
    assert_eq!(
        evaluate(&RPNExpr(vec![Token::Op('+')])),
        Err(CalcError::Eval(EvalError::MissingOperand))
    );
    assert_eq!(
        evaluate(&RPNExpr(vec![number("1"), Token::Op('+')])),
        Err(CalcError::Eval(EvalError::MissingOperand))
    );
    assert_eq!(
        evaluate(&RPNExpr(vec![number("1"), number("2")])),
        Err(CalcError::Eval(EvalError::LeftoverOperands(2)))
    );
}
