//! Simplification rules for products, including combining like factors.

use calc_parser::parser::{ast::{binary::Binary, expr::Expr}, token::op::{BinOpKind, NaryOpKind}};
use crate::symbolic::simplify::simplify_nary;
use super::power::simplify_power;

/// Splits a factor into its base and exponent.
///
/// - `x` -> `(x, 1)`
/// - `x^2` -> `(x, 2)`
/// - `sin(x)^y` -> `(sin(x), y)`
///
/// Numbers have no such split.
fn split_power(factor: &Expr) -> Option<(&Expr, Expr)> {
    match factor {
        Expr::Number(_) => None,
        Expr::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => Some((lhs, (**rhs).clone())),
        _ => Some((factor, Expr::Number(1.0))),
    }
}

/// `a*b` for numbers, `0*a = 0`, `1*a = a`, and `b^m * b^n = b^(m+n)`.
pub fn combine(u: &Expr, v: &Expr) -> Option<Expr> {
    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) => return Some(Expr::Number(a * b)),
        (zero, _) | (_, zero) if zero.is_number(0.0) => return Some(Expr::Number(0.0)),
        (one, other) | (other, one) if one.is_number(1.0) => return Some(other.clone()),
        _ => (),
    }

    let (b1, e1) = split_power(u)?;
    let (b2, e2) = split_power(v)?;
    if b1 == b2 {
        Some(simplify_power(b1.clone(), simplify_nary(NaryOpKind::Sum, vec![e1, e2])))
    } else {
        None
    }
}
