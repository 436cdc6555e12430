//! Formatting of canonical trees with ordinary binary and unary operators.

use calc_parser::parser::{
    ast::{binary::Binary, call::Derivative, expr::Expr, nary::Nary, unary::Unary},
    token::op::{BinOpKind, NaryOpKind},
};
use super::rules::product_of;

/// Rewrites sums and products into binary operations. Negative terms are written with `-`, and
/// factors with a negative numeric exponent are moved into a denominator.
pub fn pretty(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => expr,
        Expr::Nary(Nary { op: NaryOpKind::Sum, args }) => pretty_sum(args),
        Expr::Nary(Nary { op: NaryOpKind::Product, args }) => pretty_product(args),
        Expr::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => match *rhs {
            Expr::Number(n) if n < 0.0 => Expr::Number(1.0) / pretty_power(*lhs, -n),
            rhs => pretty(*lhs).pow(pretty(rhs)),
        },
        Expr::Binary(Binary { lhs, op, rhs }) => Expr::binary(pretty(*lhs), op, pretty(*rhs)),
        Expr::Unary(Unary { operand, op }) => Expr::Unary(Unary { operand: Box::new(pretty(*operand)), op }),
        Expr::Call(call) => Expr::call(call.name, call.args.into_iter().map(pretty).collect()),
        Expr::Derivative(Derivative { name, args, order }) => Expr::Derivative(Derivative {
            name,
            args: args.into_iter().map(pretty).collect(),
            order,
        }),
    }
}

/// `base^exp`, or just `base` if `exp` is 1.
fn pretty_power(base: Expr, exp: f64) -> Expr {
    if exp == 1.0 {
        pretty(base)
    } else {
        pretty(base).pow(exp)
    }
}

/// Joins the expressions with the given operator, grouping to the left.
fn fold(exprs: Vec<Expr>, op: BinOpKind) -> Option<Expr> {
    exprs.into_iter().reduce(|lhs, rhs| Expr::binary(lhs, op, rhs))
}

/// Splits a term into whether it is negative, and its magnitude.
fn split_sign(term: Expr) -> (bool, Expr) {
    match term {
        Expr::Number(n) if n < 0.0 => (true, Expr::Number(-n)),
        Expr::Nary(Nary { op: NaryOpKind::Product, mut args }) => match args.first() {
            Some(&Expr::Number(c)) if c < 0.0 && args.len() > 1 => {
                if c == -1.0 {
                    args.remove(0);
                } else {
                    args[0] = Expr::Number(-c);
                }
                (true, product_of(args))
            },
            _ => (false, Expr::nary(NaryOpKind::Product, args)),
        },
        term => (false, term),
    }
}

/// `a + b - c`, starting with the first positive term. If every term is negative, the whole sum
/// is negated instead: `-(a + b)`.
fn pretty_sum(terms: Vec<Expr>) -> Expr {
    let terms = terms
        .into_iter()
        .map(|term| {
            let (negative, magnitude) = split_sign(term);
            (negative, pretty(magnitude))
        })
        .collect::<Vec<_>>();

    let Some(start) = terms.iter().position(|(negative, _)| !negative) else {
        let magnitudes = terms.into_iter().map(|(_, magnitude)| magnitude).collect();
        return match fold(magnitudes, BinOpKind::Add) {
            Some(sum) => -sum,
            None => Expr::Number(0.0),
        };
    };

    let mut terms = terms;
    let (_, first) = terms.remove(start);
    terms.into_iter().fold(first, |sum, (negative, magnitude)| {
        if negative {
            sum - magnitude
        } else {
            sum + magnitude
        }
    })
}

/// `a * b / (c * d)`, moving factors with a negative exponent into the denominator. A leading
/// `-1` becomes a negation.
fn pretty_product(mut factors: Vec<Expr>) -> Expr {
    if factors.len() > 1 && factors[0].is_number(-1.0) {
        factors.remove(0);
        return -pretty_product(factors);
    }

    let mut numerator = Vec::new();
    let mut denominator = Vec::new();
    for factor in factors {
        match factor {
            Expr::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => match *rhs {
                Expr::Number(n) if n < 0.0 => denominator.push(pretty_power(*lhs, -n)),
                rhs => numerator.push(pretty(*lhs).pow(pretty(rhs))),
            },
            factor => numerator.push(pretty(factor)),
        }
    }

    let numerator = fold(numerator, BinOpKind::Mul).unwrap_or(Expr::Number(1.0));
    match fold(denominator, BinOpKind::Mul) {
        Some(denominator) => numerator / denominator,
        None => numerator,
    }
}
