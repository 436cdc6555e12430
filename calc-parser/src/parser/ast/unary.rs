use crate::parser::{ast::expr::Expr, token::op::UnaryOpKind, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary operation, such as `-x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary operation.
    pub operand: Box<Expr>,

    /// The operator of the unary operation.
    pub op: UnaryOpKind,
}

impl Unary {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        self.op.precedence()
    }
}
