//! Rules that combine two adjacent operands of a sum or product.
//!
//! Each rule takes two simplified operands and returns `Some(expr)` with their combination if the
//! rule applies, or `None` if the operands must be kept apart.

pub mod add;
pub mod multiply;
pub mod power;

use calc_parser::parser::{ast::expr::Expr, token::op::NaryOpKind};

/// Combines two operands of the given operation, if possible.
pub fn combine(op: NaryOpKind, u: &Expr, v: &Expr) -> Option<Expr> {
    match op {
        NaryOpKind::Sum => add::combine(u, v),
        NaryOpKind::Product => multiply::combine(u, v),
    }
}

/// Wraps the factors in a product, unless there is only one.
pub(crate) fn product_of(mut factors: Vec<Expr>) -> Expr {
    if factors.len() == 1 {
        factors.remove(0)
    } else {
        Expr::nary(NaryOpKind::Product, factors)
    }
}
