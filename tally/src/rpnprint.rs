use crate::parser::{RPNExpr, precedence};
use numlex::Token;
use std::fmt;

enum Ast<'a> {
    Leaf(&'a str),
    Node(char, Box<Ast<'a>>, Box<Ast<'a>>),
}

impl RPNExpr {
    // rebuild the expression tree, None if the stream is malformed
    fn build_ast(&self) -> Option<Ast<'_>> {
        let mut nodes = Vec::new();
        for token in self.iter() {
            match token {
                Token::Number(text) => nodes.push(Ast::Leaf(text)),
                Token::Op(op) => {
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(Ast::Node(*op, Box::new(lhs), Box::new(rhs)));
                }
                _ => return None,
            }
        }
        match (nodes.pop(), nodes.is_empty()) {
            (Some(root), true) => Some(root),
            _ => None,
        }
    }
}

impl fmt::Display for RPNExpr {
    /// Write the expression back in infix form with minimal parentheses.
    /// Malformed streams fall back to the space joined token sequence.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_infix(root: &Ast) -> (String, usize) {
            match root {
                Ast::Leaf(text) => (text.to_string(), usize::MAX),
                Ast::Node(op, lhs, rhs) => {
                    let prec = precedence(&Token::Op(*op));
                    let (ltext, lprec) = write_infix(lhs);
                    let (rtext, rprec) = write_infix(rhs);
                    let lh = if lprec < prec {
                        format!("({})", ltext)
                    } else {
                        ltext
                    };
                    // all four operators are left associative, so ties on
                    // the right keep their parentheses
                    let rh = if rprec <= prec {
                        format!("({})", rtext)
                    } else {
                        rtext
                    };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", write_infix(&ast).0),
            None => {
                let tokens: Vec<String> = self.iter().map(|t| t.to_string()).collect();
                write!(f, "{}", tokens.join(" "))
            }
        }
    }
}
