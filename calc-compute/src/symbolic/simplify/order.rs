//! The total order that sorts the operands of canonical sums and products.
//!
//! Like terms and like factors end up next to each other under this order, so merging two sorted
//! operand lists can combine them in one pass. Numbers sort first, so a numeric coefficient
//! always leads its product.

use calc_parser::parser::{
    ast::{binary::Binary, expr::Expr, nary::Nary},
    token::op::{BinOpKind, NaryOpKind},
};
use std::{cmp::Ordering, slice};

/// The kinds of non-numeric expressions, as far as the order is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Product,
    Power,
    Sum,
    Call,
    Symbol,
    Other,
}

fn kind(expr: &Expr) -> Kind {
    match expr {
        Expr::Nary(Nary { op: NaryOpKind::Product, .. }) => Kind::Product,
        Expr::Nary(Nary { op: NaryOpKind::Sum, .. }) => Kind::Sum,
        Expr::Binary(Binary { op: BinOpKind::Exp, .. }) => Kind::Power,
        Expr::Call(_) => Kind::Call,
        Expr::Variable(_) => Kind::Symbol,
        _ => Kind::Other,
    }
}

/// Compares two operands.
pub fn compare(u: &Expr, v: &Expr) -> Ordering {
    match (u, v) {
        (Expr::Number(a), Expr::Number(b)) => a.total_cmp(b),
        (Expr::Number(_), _) => Ordering::Less,
        (_, Expr::Number(_)) => Ordering::Greater,
        (Expr::Variable(a), Expr::Variable(b)) => a.cmp(b),
        (Expr::Nary(a), Expr::Nary(b)) if a.op == b.op => compare_from_end(&a.args, &b.args),
        (
            Expr::Binary(Binary { lhs: base_a, op: BinOpKind::Exp, rhs: exp_a }),
            Expr::Binary(Binary { lhs: base_b, op: BinOpKind::Exp, rhs: exp_b }),
        ) => compare(base_a, base_b).then_with(|| compare(exp_a, exp_b)),
        (Expr::Call(a), Expr::Call(b)) => a.name
            .cmp(&b.name)
            .then_with(|| compare_from_start(&a.args, &b.args)),
        _ => compare_lifted(u, v),
    }
}

/// Compares operands of different kinds by treating the simpler one as a one-element sum or
/// product, or as a power with exponent 1.
fn compare_lifted(u: &Expr, v: &Expr) -> Ordering {
    match (kind(u), kind(v), u) {
        (Kind::Other, Kind::Other, _) => rank(u)
            .cmp(&rank(v))
            .then_with(|| u.to_string().cmp(&v.to_string())),
        (Kind::Other, _, _) => Ordering::Greater,
        (_, Kind::Other, _) => Ordering::Less,
        (Kind::Product, _, Expr::Nary(product)) => compare_from_end(&product.args, slice::from_ref(v)),
        (Kind::Power, Kind::Sum | Kind::Call | Kind::Symbol, Expr::Binary(power)) => {
            compare(&power.lhs, v).then_with(|| compare(&power.rhs, &Expr::Number(1.0)))
        },
        (Kind::Sum, Kind::Call | Kind::Symbol, Expr::Nary(sum)) => compare_from_end(&sum.args, slice::from_ref(v)),
        (Kind::Call, Kind::Symbol, Expr::Call(call)) => match v {
            Expr::Variable(name) if *name == call.name => Ordering::Greater,
            Expr::Variable(name) => call.name.cmp(name),
            _ => Ordering::Greater,
        },
        _ => compare(v, u).reverse(),
    }
}

/// Orders the node types that have no algebraic meaning to the simplifier.
fn rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Binary(_) => 0,
        Expr::Unary(_) => 1,
        _ => 2,
    }
}

/// Compares the last operands of each list, then the ones before them, and so on. If one list
/// runs out first, it is the smaller.
fn compare_from_end(a: &[Expr], b: &[Expr]) -> Ordering {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .map(|(u, v)| compare(u, v))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compares operands pairwise from the front. If one list runs out first, it is the smaller.
fn compare_from_start(a: &[Expr], b: &[Expr]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(u, v)| compare(u, v))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use calc_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::canonical;

    fn canon(source: &str) -> Expr {
        canonical(&parse(source).unwrap())
    }

    fn corpus() -> Vec<Expr> {
        [
            "-2", "0.5", "3", "x", "y", "z", "x^2", "x^3", "y^2", "2x", "3y", "x * y", "2 * x * y",
            "x + 1", "x + y", "sin(x)", "sin(y)", "cos(x)", "x^y", "sin(x)^2", "x", "f(x, y)",
            "f(x)", "x < y", "g'(x)",
        ]
            .into_iter()
            .map(canon)
            .collect()
    }

    #[test]
    fn numbers_first() {
        assert_eq!(compare(&Expr::Number(100.0), &canon("x")), Ordering::Less);
        assert_eq!(compare(&Expr::Number(-1.0), &Expr::Number(2.0)), Ordering::Less);
        assert_eq!(compare(&canon("sin(x)"), &Expr::Number(0.0)), Ordering::Greater);
    }

    #[test]
    fn like_operands_are_adjacent() {
        // x < 2x < x^2 < y
        let order = ["x", "2x", "x^2", "y"].map(canon);
        for pair in order.windows(2) {
            assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
        }

        assert_eq!(compare(&canon("cos(x)"), &canon("x")), Ordering::Less);
        assert_eq!(compare(&canon("x + 1"), &canon("x")), Ordering::Greater);
    }

    #[test]
    fn antisymmetric() {
        let corpus = corpus();
        for u in &corpus {
            for v in &corpus {
                assert_eq!(compare(u, v), compare(v, u).reverse(), "{} vs {}", u, v);
            }
        }
    }

    #[test]
    fn transitive() {
        let corpus = corpus();
        for u in &corpus {
            for v in &corpus {
                for w in &corpus {
                    if compare(u, v).is_le() && compare(v, w).is_le() {
                        assert!(compare(u, w).is_le(), "{} <= {} <= {}", u, v, w);
                    }
                }
            }
        }
    }
}
