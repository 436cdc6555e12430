//! Plain-text formatting of expressions.
//!
//! Operands are parenthesized only where the precedence or associativity of the surrounding
//! operator requires it, so the output parses back into an equivalent tree.

use std::fmt::{Display, Formatter, Result};
use super::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
    Associativity,
};

/// The side of a binary operator an operand appears on.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

/// Returns true if `operand` must be parenthesized when it appears on the given `side` of `op`.
fn needs_parens(operand: &Expr, op: BinOpKind, side: Side) -> bool {
    let (inner, outer) = (operand.precedence(), op.precedence());
    if inner != outer {
        return inner < outer;
    }

    match (op.associativity(), side) {
        (Associativity::Left, Side::Left) | (Associativity::Right, Side::Right) => false,
        (Associativity::Left, Side::Right) => match operand {
            // `a + (b + c)` and `a * (b * c)` print without parentheses, anything else keeps them
            Expr::Binary(Binary { op: inner_op, .. }) => !(op.is_associative() && *inner_op == op),
            _ => true,
        },
        (Associativity::Right, Side::Left) => true,
    }
}

/// Writes the operand, wrapped in parentheses if `parens` is true.
fn fmt_operand(f: &mut Formatter, operand: &Expr, parens: bool) -> Result {
    if parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Writes a comma-separated argument list, including the surrounding parentheses.
fn fmt_args(f: &mut Formatter, args: &[Expr]) -> Result {
    write!(f, "(")?;
    if let Some((last, args)) = args.split_last() {
        for arg in args {
            write!(f, "{}, ", arg)?;
        }
        write!(f, "{}", last)?;
    }
    write!(f, ")")
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary(binary) => {
                fmt_operand(f, &binary.lhs, needs_parens(&binary.lhs, binary.op, Side::Left))?;
                if binary.op == BinOpKind::Exp {
                    write!(f, "^")?;
                } else {
                    write!(f, " {} ", binary.op)?;
                }
                fmt_operand(f, &binary.rhs, needs_parens(&binary.rhs, binary.op, Side::Right))
            },
            Expr::Unary(unary) => {
                write!(f, "{}", unary.op)?;
                fmt_operand(f, &unary.operand, unary.operand.precedence() <= unary.precedence())
            },
            Expr::Call(call) => {
                write!(f, "{}", call.name)?;
                fmt_args(f, &call.args)
            },
            Expr::Derivative(derivative) => {
                write!(f, "{}{}", derivative.name, "'".repeat(derivative.order as usize))?;
                fmt_args(f, &derivative.args)
            },
            Expr::Nary(nary) => {
                let separator = format!(" {} ", nary.op.binary());
                for (i, arg) in nary.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", separator)?;
                    }
                    fmt_operand(f, arg, arg.precedence() <= nary.precedence())?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::expr::Expr, parse, token::op::NaryOpKind};

    /// Parses the source and formats it back.
    fn reformat(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn fmt_display() {
        assert_eq!(reformat("3x + 6"), "3 * x + 6");
        assert_eq!(reformat("f(x) = x^2 + 5x + 6"), "f(x) = x^2 + 5 * x + 6");
    }

    #[test]
    fn keeps_required_parentheses() {
        assert_eq!(reformat("(1 + 2) * 3"), "(1 + 2) * 3");
        assert_eq!(reformat("1 - (2 - 3)"), "1 - (2 - 3)");
        assert_eq!(reformat("(2^3)^2"), "(2^3)^2");
        assert_eq!(reformat("(-x)^2"), "(-x)^2");
        assert_eq!(reformat("(a < b) < c"), "(a < b) < c");
    }

    #[test]
    fn drops_redundant_parentheses() {
        assert_eq!(reformat("(1 - 2) - 3"), "1 - 2 - 3");
        assert_eq!(reformat("2^(3^2)"), "2^3^2");
        assert_eq!(reformat("a + (b + c)"), "a + b + c");
        assert_eq!(reformat("-(x^2)"), "-x^2");
        assert_eq!(reformat("a < (b < c)"), "a < b < c");
    }

    #[test]
    fn calls_and_derivatives() {
        assert_eq!(reformat("max(1, 2, x)"), "max(1, 2, x)");
        assert_eq!(reformat("fun()"), "fun()");
        assert_eq!(reformat("f'''(2)"), "f'''(2)");
    }

    #[test]
    fn reformatted_output_reparses_to_same_tree() {
        for source in ["-(a * b) / c // d % e", "x^-2 - -3", "a = b = f(x) == 2 * -y"] {
            let expr = parse(source).unwrap();
            assert_eq!(parse(&expr.to_string()).unwrap(), expr, "{}", source);
        }
    }

    #[test]
    fn nary_nodes() {
        let expr = Expr::nary(NaryOpKind::Product, vec![
            Expr::Number(2.0),
            Expr::nary(NaryOpKind::Sum, vec![Expr::var("x"), Expr::Number(1.0)]),
        ]);
        assert_eq!(expr.to_string(), "2 * (x + 1)");
    }
}
