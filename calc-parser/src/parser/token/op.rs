//! Binary and unary operators.

use crate::{
    parser::{Associativity, Precedence},
    tokenizer::TokenKind,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg => Precedence::Neg,
        }
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    IntDiv,
    Mod,
    Add,
    Sub,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Eq,
    NotEq,
    Assign,
}

impl BinOpKind {
    /// Returns the binary operator that the given token represents, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Exp => Self::Exp,
            TokenKind::Mul => Self::Mul,
            TokenKind::Div => Self::Div,
            TokenKind::IntDiv => Self::IntDiv,
            TokenKind::Mod => Self::Mod,
            TokenKind::Add => Self::Add,
            TokenKind::Sub => Self::Sub,
            TokenKind::Greater => Self::Greater,
            TokenKind::GreaterEq => Self::GreaterEq,
            TokenKind::Less => Self::Less,
            TokenKind::LessEq => Self::LessEq,
            TokenKind::Eq => Self::Eq,
            TokenKind::NotEq => Self::NotEq,
            TokenKind::Assign => Self::Assign,
            _ => return None,
        })
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div | Self::IntDiv | Self::Mod => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Greater | Self::GreaterEq | Self::Less | Self::LessEq
                | Self::Eq | Self::NotEq => Precedence::Compare,
            Self::Assign => Precedence::Assign,
        }
    }

    /// Returns the associativity of the binary operation.
    ///
    /// Comparisons and assignments parse their right operand as a whole expression, so they
    /// group to the right.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp
                | Self::Greater | Self::GreaterEq | Self::Less | Self::LessEq
                | Self::Eq | Self::NotEq
                | Self::Assign => Associativity::Right,
            Self::Mul | Self::Div | Self::IntDiv | Self::Mod
                | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Returns true if `(a op b) op c` always equals `a op (b op c)`.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns true if the operation is a comparison.
    pub fn is_comparison(&self) -> bool {
        self.precedence() == Precedence::Compare
    }

    /// Returns the source symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntDiv => "//",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Assign => "=",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The operation folded by an n-ary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NaryOpKind {
    Sum,
    Product,
}

impl NaryOpKind {
    /// Returns the binary operator this n-ary operation folds.
    pub fn binary(&self) -> BinOpKind {
        match self {
            Self::Sum => BinOpKind::Add,
            Self::Product => BinOpKind::Mul,
        }
    }

    /// Returns the identity element of the operation.
    pub fn identity(&self) -> f64 {
        match self {
            Self::Sum => 0.0,
            Self::Product => 1.0,
        }
    }
}
