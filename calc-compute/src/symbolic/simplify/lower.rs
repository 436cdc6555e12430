//! Conversion of parsed trees into the n-ary form the simplifier works on.

use calc_parser::parser::{
    ast::{binary::Binary, call::Derivative, expr::Expr, unary::Unary},
    token::op::{BinOpKind, NaryOpKind, UnaryOpKind},
};

/// Rewrites arithmetic into sums, products and powers:
///
/// - `a + b` becomes `Sum[a, b]`
/// - `a - b` becomes `Sum[a, Product[-1, b]]`
/// - `a * b` becomes `Product[a, b]`
/// - `a / b` becomes `Product[a, b^-1]`
/// - `-a` becomes `Product[-1, a]`, or a negative number if `a` is a number
///
/// Every other node is kept, with its children lowered.
pub fn lower(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => expr.clone(),
        Expr::Binary(Binary { lhs, op, rhs }) => {
            let (lhs, rhs) = (lower(lhs), lower(rhs));
            match op {
                BinOpKind::Add => Expr::nary(NaryOpKind::Sum, vec![lhs, rhs]),
                BinOpKind::Sub => Expr::nary(NaryOpKind::Sum, vec![lhs, negate(rhs)]),
                BinOpKind::Mul => Expr::nary(NaryOpKind::Product, vec![lhs, rhs]),
                BinOpKind::Div => Expr::nary(NaryOpKind::Product, vec![lhs, rhs.pow(-1.0)]),
                op => Expr::binary(lhs, *op, rhs),
            }
        },
        Expr::Unary(Unary { operand, op: UnaryOpKind::Neg }) => match lower(operand) {
            Expr::Number(n) => Expr::Number(-n),
            operand => negate(operand),
        },
        Expr::Call(call) => Expr::call(call.name.clone(), call.args.iter().map(lower).collect()),
        Expr::Derivative(derivative) => Expr::Derivative(Derivative {
            name: derivative.name.clone(),
            args: derivative.args.iter().map(lower).collect(),
            order: derivative.order,
        }),
        Expr::Nary(nary) => Expr::nary(nary.op, nary.args.iter().map(lower).collect()),
    }
}

fn negate(expr: Expr) -> Expr {
    Expr::nary(NaryOpKind::Product, vec![Expr::Number(-1.0), expr])
}
