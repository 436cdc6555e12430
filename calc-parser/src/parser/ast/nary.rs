use crate::parser::{ast::expr::Expr, token::op::NaryOpKind, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A flattened sum or product of any number of operands.
///
/// The parser never produces this node. It exists so that the simplifier can work with
/// associative operations without caring how the binary operations were nested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nary {
    /// The operation folded over the operands.
    pub op: NaryOpKind,

    /// The operands, in order.
    pub args: Vec<Expr>,
}

impl Nary {
    /// Returns the precedence of the equivalent binary operation.
    pub fn precedence(&self) -> Precedence {
        self.op.binary().precedence()
    }
}
