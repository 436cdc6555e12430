//! Simplification rules for sums, including combining like terms.

use calc_parser::parser::{ast::{expr::Expr, nary::Nary}, token::op::NaryOpKind};
use crate::symbolic::simplify::simplify_nary;
use super::product_of;

/// Splits a term into its numeric coefficient and the rest of the term.
///
/// - `x` -> `(1, x)`
/// - `3*x` -> `(3, x)`
/// - `-2*x*y` -> `(-2, x*y)`
///
/// Numbers have no such split.
fn split_coefficient(term: &Expr) -> Option<(f64, Expr)> {
    match term {
        Expr::Number(_) => None,
        Expr::Nary(Nary { op: NaryOpKind::Product, args }) => match args.split_first() {
            Some((Expr::Number(c), rest)) => Some((*c, product_of(rest.to_vec()))),
            _ => Some((1.0, term.clone())),
        },
        _ => Some((1.0, term.clone())),
    }
}

/// `a+b` for numbers, `0+a = a`, and `c1*t + c2*t = (c1+c2)*t`.
pub fn combine(u: &Expr, v: &Expr) -> Option<Expr> {
    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) => return Some(Expr::Number(a + b)),
        (zero, other) | (other, zero) if zero.is_number(0.0) => return Some(other.clone()),
        _ => (),
    }

    let (c1, t1) = split_coefficient(u)?;
    let (c2, t2) = split_coefficient(v)?;
    if t1 == t2 {
        Some(simplify_nary(NaryOpKind::Product, vec![Expr::Number(c1 + c2), t1]))
    } else {
        None
    }
}
