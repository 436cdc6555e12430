//! Errors raised while differentiating an expression.

use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A variable other than the one being differentiated appeared while partial derivatives are
/// disabled.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("can't take non-partial derivative of `{}` with respect to {}", var, target),
    labels = ["this derivative"],
    help = format!("set `{}` to treat other variables as constants", "PARTIAL = 1".fg(EXPR)),
)]
pub struct NonPartialDerivative {
    /// The variable that was found.
    pub var: String,

    /// The variable being differentiated with respect to.
    pub target: String,
}

/// The expression contains an operation with no derivative rule, such as a comparison.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate expression: `{}`", expr),
    labels = ["this derivative"],
)]
pub struct Undifferentiable {
    /// The string form of the offending subexpression.
    pub expr: String,
}

/// A native function with no derivative rule was called, such as `floor`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("can't differentiate function `{}`", name),
    labels = ["this derivative"],
)]
pub struct UndifferentiableFunction {
    /// The name of the function.
    pub name: String,
}

/// A function was called with the wrong number of arguments inside a differentiated expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {} argument(s) for `{}`; got {}", expected, name, given),
    labels = ["this derivative"],
)]
pub struct DerivativeArity {
    /// The name of the function.
    pub name: String,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// User-defined functions were inlined into each other too many times.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`: functions are nested more than {} levels deep", name, max),
    labels = ["this derivative"],
    help = "recursive functions cannot be differentiated symbolically",
)]
pub struct InliningTooDeep {
    /// The function that would have been inlined.
    pub name: String,

    /// The maximum inlining depth.
    pub max: usize,
}
