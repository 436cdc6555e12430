//! Algebraic simplification of expressions.
//!
//! Simplification runs in three passes:
//!
//! 1. [`lower`](lower::lower) rewrites the tree into sums, products and powers.
//! 2. The lowered tree is simplified bottom-up. The operands of every sum and product are
//!    flattened, sorted by [`order::compare`], and merged so that like terms and like factors are
//!    combined. The result is the canonical form returned by [`canonical`].
//! 3. [`pretty`](pretty::pretty) turns the canonical form back into binary and unary operations,
//!    writing subtraction, negation and division where they read better.
//!
//! ```
//! use calc_compute::symbolic::simplify::simplify;
//! use calc_parser::parser::parse;
//!
//! let expr = parse("(x + 1) + (x + 1)").unwrap();
//! assert_eq!(simplify(&expr).to_string(), "2 + 2 * x");
//! ```

pub mod lower;
pub mod order;
pub mod pretty;
pub mod rules;

use calc_parser::parser::{
    ast::{binary::Binary, call::Derivative, expr::Expr, nary::Nary, unary::Unary},
    token::op::{BinOpKind, NaryOpKind, UnaryOpKind},
};
use crate::numerical::eval::apply_binary;
use std::{cmp::Ordering, collections::VecDeque};
use tracing::trace;

/// Simplifies the expression and formats the result with ordinary operators.
///
/// The output is a fixed point: simplifying it again gives the same tree.
pub fn simplify(expr: &Expr) -> Expr {
    let canonical = canonical(expr);
    trace!(%expr, %canonical, "canonical form");
    pretty::pretty(canonical)
}

/// Returns the canonical form of the expression, built from sorted [`Nary`] sums and products.
pub fn canonical(expr: &Expr) -> Expr {
    simplify_tree(lower::lower(expr))
}

/// Simplifies a lowered tree, children first.
fn simplify_tree(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => expr,
        Expr::Nary(Nary { op, args }) => simplify_nary(op, args.into_iter().map(simplify_tree).collect()),
        Expr::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => {
            rules::power::simplify_power(simplify_tree(*lhs), simplify_tree(*rhs))
        },
        Expr::Binary(Binary { lhs, op, rhs }) => match (simplify_tree(*lhs), simplify_tree(*rhs)) {
            (Expr::Number(a), Expr::Number(b)) if op != BinOpKind::Assign => Expr::Number(apply_binary(op, a, b)),
            (lhs, rhs) => Expr::binary(lhs, op, rhs),
        },
        Expr::Unary(Unary { operand, op: UnaryOpKind::Neg }) => {
            simplify_nary(NaryOpKind::Product, vec![Expr::Number(-1.0), simplify_tree(*operand)])
        },
        Expr::Call(call) => Expr::call(call.name, call.args.into_iter().map(simplify_tree).collect()),
        Expr::Derivative(Derivative { name, args, order }) => Expr::Derivative(Derivative {
            name,
            args: args.into_iter().map(simplify_tree).collect(),
            order,
        }),
    }
}

/// Builds the simplified sum or product of operands that are already simplified.
pub(crate) fn simplify_nary(op: NaryOpKind, operands: Vec<Expr>) -> Expr {
    if op == NaryOpKind::Product && operands.iter().any(|operand| operand.is_number(0.0)) {
        return Expr::Number(0.0);
    }

    let mut operands = simplify_operands(op, operands);
    if operands.len() < 2 {
        return operands.pop().unwrap_or(Expr::Number(op.identity()));
    }

    // c*(a + b) = c*a + c*b
    if let (NaryOpKind::Product, [Expr::Number(c), Expr::Nary(Nary { op: NaryOpKind::Sum, args })]) =
        (op, operands.as_slice())
    {
        let terms = args
            .iter()
            .map(|term| simplify_nary(NaryOpKind::Product, vec![Expr::Number(*c), term.clone()]))
            .collect();
        return simplify_nary(NaryOpKind::Sum, terms);
    }

    Expr::nary(op, operands)
}

/// Returns the operands of `expr` as an operand of `op`: the operands of a nested `op` node, or
/// the expression itself.
fn into_operands(op: NaryOpKind, expr: Expr) -> Vec<Expr> {
    match expr {
        Expr::Nary(nary) if nary.op == op => nary.args,
        expr => vec![expr],
    }
}

/// Flattens, sorts and combines a list of simplified operands.
///
/// The operands are merged in from the last to the first, so each one is combined with the
/// already simplified operands after it.
fn simplify_operands(op: NaryOpKind, operands: Vec<Expr>) -> Vec<Expr> {
    let mut operands = operands.into_iter().rev();
    let Some(last) = operands.next() else {
        return Vec::new();
    };
    operands.fold(into_operands(op, last), |merged, operand| {
        merge(op, into_operands(op, operand), merged)
    })
}

/// The result of simplifying a pair of operands.
#[derive(Debug)]
enum Pair {
    /// The operands combined into one. `None` if they combined into the identity.
    Combined(Option<Expr>),

    /// The operands cannot be combined; they are returned in order.
    Kept {
        first: Expr,
        second: Expr,

        /// True if `second` was the first operand given.
        swapped: bool,
    },
}

fn pair(op: NaryOpKind, u: Expr, v: Expr) -> Pair {
    match rules::combine(op, &u, &v) {
        Some(combined) if combined.is_number(op.identity()) => Pair::Combined(None),
        Some(combined) => Pair::Combined(Some(combined)),
        None if order::compare(&v, &u) == Ordering::Less => Pair::Kept { first: v, second: u, swapped: true },
        None => Pair::Kept { first: u, second: v, swapped: false },
    }
}

/// Merges two sorted and simplified operand lists into one.
///
/// When two operands combine, the combined operand still has to be merged with the operands that
/// follow it. That merge is deferred until everything after it is merged, and is recorded in
/// `pending` along with where its part of the output starts.
fn merge(op: NaryOpKind, p: Vec<Expr>, q: Vec<Expr>) -> Vec<Expr> {
    let mut merged = Vec::with_capacity(p.len() + q.len());
    let mut pending = Vec::new();
    merge_into(op, &mut merged, p, q, &mut pending);

    while let Some((start, combined)) = pending.pop() {
        let rest = merged.split_off(start);
        merge_into(op, &mut merged, combined, rest, &mut pending);
    }
    merged
}

/// Appends the merge of `p` and `q` to `merged`, leaving combined operands in `pending`.
fn merge_into(
    op: NaryOpKind,
    merged: &mut Vec<Expr>,
    p: Vec<Expr>,
    q: Vec<Expr>,
    pending: &mut Vec<(usize, Vec<Expr>)>,
) {
    let (mut p, mut q) = (VecDeque::from(p), VecDeque::from(q));
    loop {
        let (p1, q1) = match (p.pop_front(), q.pop_front()) {
            (Some(p1), Some(q1)) => (p1, q1),
            (p1, q1) => {
                merged.extend(p1.into_iter().chain(p).chain(q1).chain(q));
                return;
            },
        };

        match pair(op, p1, q1) {
            Pair::Combined(None) => {},
            Pair::Combined(Some(combined)) => pending.push((merged.len(), into_operands(op, combined))),
            Pair::Kept { first, second, swapped } => {
                if swapped {
                    p.push_front(second);
                } else {
                    q.push_front(second);
                }
                merged.push(first);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calc_parser::parser::parse;
    use crate::{funcs::calculus::eval_at, numerical::ctxt::Ctxt};
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplify_str(source: &str) -> String {
        simplify(&parse(source).unwrap()).to_string()
    }

    #[test]
    fn combines_like_terms() {
        assert_eq!(simplify_str("(x + 1) + (x + 1)"), "2 + 2 * x");
        assert_eq!(simplify(&parse("(x + 1) + (x + 1)").unwrap()), simplify(&parse("2 * x + 2").unwrap()));
        assert_eq!(simplify_str("x + x + x"), "3 * x");
        assert_eq!(simplify_str("3x + y - x"), "2 * x + y");
        assert_eq!(simplify_str("x - x"), "0");
        assert_eq!(simplify_str("x - (x + 1)"), "-1");
    }

    #[test]
    fn combines_like_factors() {
        assert_eq!(simplify_str("x * x * x"), "x^3");
        assert_eq!(simplify_str("x^2 * x^-2"), "1");
        assert_eq!(simplify_str("2x * 3x"), "6 * x^2");
        assert_eq!(simplify_str("x / x"), "1");
        assert_eq!(simplify_str("0 * sin(x)"), "0");
        assert_eq!(simplify_str("y * x * 2"), "2 * x * y");
    }

    #[test]
    fn evaluates_numeric_parts() {
        assert_eq!(simplify_str("2 + 3 * 4"), "14");
        assert_eq!(simplify_str("2^10"), "1024");
        assert_eq!(simplify_str("7 // 2 + x"), "3 + x");
        assert_eq!(simplify_str("sin(1 + 1)"), "sin(2)");
    }

    #[test]
    fn pretty_forms() {
        assert_eq!(simplify_str("x - 1"), "x - 1");
        assert_eq!(simplify_str("1 / x"), "1 / x");
        assert_eq!(simplify_str("-x - y"), "-(x + y)");
        assert_eq!(simplify_str("y - x"), "y - x");
        assert_eq!(simplify_str("x / y^2"), "x / y^2");
        assert_eq!(simplify_str("2 / (x * y)"), "2 / (x * y)");
        assert_eq!(simplify_str("-(3x)"), "-3 * x");
    }

    #[test]
    fn idempotent() {
        let sources = [
            "(x + 1) + (x + 1)",
            "x - 1",
            "1 / x",
            "-x - y",
            "2 / (x * y)",
            "x^3 * (0 * ln(x) + 1 / x * 3)",
            "sin(x) * cos(x) - cos(x) * sin(x) + tan(x)",
            "x^y * x^2 / x",
            "(x^2)^0.5",
            "2 * (x + 1) - 3 * (y - x)",
            "-(x / y) + f(x, y)^-2",
            "a < b + b",
        ];
        for source in sources {
            let once = simplify(&parse(source).unwrap());
            let twice = simplify(&once);
            assert_eq!(twice, once, "{}", source);
        }
    }

    #[test]
    fn preserves_value() {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("y", 0.7);
        let sources = [
            "(x + 1) * (x - 1) - x * x",
            "x / (x + y) + y / (x + y)",
            "2 * (x + 1) - 3 * (y - x)",
            "x^y * x^2 / x",
            "-x - y + 4 * x",
        ];
        for source in sources {
            let expr = parse(source).unwrap();
            let simplified = simplify(&expr);
            for at in [0.25, 1.5, 2.0] {
                let expected = eval_at(&expr, "x", at, &mut ctxt).unwrap();
                let actual = eval_at(&simplified, "x", at, &mut ctxt).unwrap();
                assert_float_absolute_eq!(expected, actual, 1e-9);
            }
        }
    }

    #[test]
    fn linear_in_constants() {
        // simplify(a*u + b*u) == simplify((a+b)*u)
        for u in ["x", "sin(x)", "x^2 * y"] {
            let lhs = simplify(&parse(&format!("2 * {u} + 5 * {u}")).unwrap());
            let rhs = simplify(&parse(&format!("7 * {u}")).unwrap());
            assert_eq!(lhs, rhs, "{}", u);
        }
    }

    #[test]
    fn long_operand_lists() {
        let sum = Expr::nary(NaryOpKind::Sum, vec![Expr::var("x"); 10_000]);
        assert_eq!(simplify(&sum).to_string(), "10000 * x");

        let product = Expr::nary(NaryOpKind::Product, vec![Expr::var("y"); 10_000]);
        assert_eq!(simplify(&product).to_string(), "y^10000");

        let terms = (0..1_000).map(|i| Expr::var(format!("x{:04}", i))).collect::<Vec<_>>();
        let mut reversed = terms.clone();
        reversed.reverse();
        let simplified = canonical(&Expr::nary(NaryOpKind::Sum, reversed));
        assert_eq!(simplified, Expr::nary(NaryOpKind::Sum, terms));

        let chain = parse(&format!("{}x", "x + ".repeat(499))).unwrap();
        assert_eq!(simplify(&chain).to_string(), "500 * x");
    }

    #[test]
    fn nested_nary_input() {
        let expr = Expr::nary(NaryOpKind::Sum, vec![
            Expr::var("x"),
            Expr::nary(NaryOpKind::Sum, vec![Expr::var("x"), Expr::Number(2.0)]),
        ]);
        assert_eq!(simplify(&expr).to_string(), "2 + 2 * x");
    }
}
