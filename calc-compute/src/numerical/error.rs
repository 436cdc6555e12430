//! Errors raised while evaluating an expression.

use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;
use super::ctxt::Ctxt;

pub use calc_error::Error;

/// Tried to call a function that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = FunctionCall,
    message = format!("no such function: `{}`", name),
    labels = ["this function"],
    help = if suggestions.is_empty() {
        "see the documentation for a list of available functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedFunction {
    /// The name of the function that was called.
    pub name: String,

    /// Functions with a similar name.
    pub suggestions: Vec<String>,
}

impl UndefinedFunction {
    /// Creates the error, suggesting functions in the context with a similar name.
    pub fn new(name: &str, ctxt: &Ctxt) -> Self {
        Self {
            name: name.to_string(),
            suggestions: ctxt.get_similar_funcs(name)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = FunctionCall,
    message = format!("wrong number of arguments ({} given, {} expected)", given, expected),
    labels = [format!("calling `{}` here", name)],
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A function that takes any number of arguments was given too few.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = FunctionCall,
    message = format!("wrong number of arguments ({} given, at least {} expected)", given, min),
    labels = [format!("calling `{}` here", name)],
)]
pub struct TooFewArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The minimum number of arguments the function takes.
    pub min: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// `INT_NUM_RECTS` is not a usable number of rectangles.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Argument,
    message = format!("`INT_NUM_RECTS` must be between 1 and {}; got {}", max, value),
    labels = ["this integral"],
    help = format!("assign a smaller value, like `{}`", "INT_NUM_RECTS = 100".fg(EXPR)),
)]
pub struct InvalidRectangleCount {
    /// The value of `INT_NUM_RECTS`.
    pub value: f64,

    /// The largest accepted value.
    pub max: f64,
}

/// A native function was given an argument outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Argument,
    message = format!("argument {} of `{}` {}", index + 1, name, reason),
    labels = ["this argument"],
)]
pub struct InvalidArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The index of the offending argument.
    pub index: usize,

    /// What is wrong with the argument.
    pub reason: &'static str,
}

/// An argument that must be a variable name was something else.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("argument {} of `{}` must be an identifier", index + 1, name),
    labels = ["this argument"],
    help = format!("write a plain variable name, like `{}`", "x".fg(EXPR)),
)]
pub struct NonIdentifierArgument {
    /// The name of the function or macro that was called.
    pub name: String,

    /// The index of the offending argument.
    pub index: usize,
}

/// User-defined functions called each other too many times without returning.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = FunctionCall,
    message = format!("maximum call depth of {} exceeded", max),
    labels = ["this function call"],
    help = "check that recursive functions eventually stop calling themselves",
)]
pub struct StackOverflow {
    /// The maximum call depth of the context.
    pub max: usize,
}

/// A function definition would shadow a macro or a native function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot define function `{}`: a {} with that name already exists", name, existing),
    labels = ["this assignment"],
    help = "pick a different name for the function",
)]
pub struct NameConflict {
    /// The name of the function being defined.
    pub name: String,

    /// What already owns the name.
    pub existing: &'static str,
}

/// A derivative node was applied to the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *given == 0 {
        "can't implicitly differentiate a function with no arguments"
    } else {
        "can't implicitly differentiate a function with more than one argument"
    },
    labels = [format!("differentiating `{}` here", name)],
    help = format!("use `{}` for a derivative with respect to one variable", "nderiv(expr, var, at)".fg(EXPR)),
)]
pub struct DerivativeArgumentCount {
    /// The name of the differentiated function.
    pub name: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A derivative node has more apostrophes than can be computed in reasonable time.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("derivative order {} is higher than the supported maximum of {}", order, max),
    labels = ["this derivative"],
)]
pub struct DerivativeOrderTooHigh {
    /// The requested order.
    pub order: u32,

    /// The highest supported order.
    pub max: u32,
}
