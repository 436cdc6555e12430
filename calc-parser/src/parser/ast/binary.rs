use crate::parser::{ast::expr::Expr, token::op::BinOpKind, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`, `x = 3` or `a < b`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a new binary expression.
    pub fn new(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }

    /// Returns the precedence of the binary expression.
    pub fn precedence(&self) -> Precedence {
        self.op.precedence()
    }
}
