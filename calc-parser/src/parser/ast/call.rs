use crate::parser::ast::expr::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `func(x, -40)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: String,

    /// The arguments to the function.
    pub args: Vec<Expr>,
}

impl Call {
    /// Creates a new function call.
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self { name: name.into(), args }
    }

    /// Returns the parameter names if every argument of this call is a plain identifier, which is
    /// what a function header on the left side of an assignment looks like.
    ///
    /// On failure, returns the first argument that is not an identifier.
    pub fn header_params(&self) -> Result<Vec<&str>, &Expr> {
        self.args
            .iter()
            .map(|arg| arg.as_variable().ok_or(arg))
            .collect()
    }
}

/// A request for the numeric derivative of a function at a point, such as `f''(2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Derivative {
    /// The name of the function to differentiate.
    pub name: String,

    /// The arguments to the function. Evaluation requires exactly one.
    pub args: Vec<Expr>,

    /// The order of the derivative, i.e. the number of apostrophes. Always at least 1.
    pub order: u32,
}
