use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A character in the input does not begin any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Token,
    message = format!("invalid token at char {} ({})", index, found),
    labels = ["this character"],
)]
pub struct InvalidToken {
    /// The index of the character, counted in characters from the start of the input.
    pub index: usize,

    /// The character itself.
    pub found: char,
}

/// The input did not contain any expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// A token was found where no expression can continue, such as a leftover token after a complete
/// statement.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected `{}`", found),
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedToken {
    /// The lexeme of the token.
    pub found: String,
}

/// A parenthesis was never matched with its counterpart.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *opening { "unclosed parenthesis" } else { "unmatched parenthesis" },
    labels = [if *opening { "this parenthesis is never closed" } else { "this parenthesis was never opened" }],
    help = if *opening {
        format!("add a closing parenthesis `{}`", ")".fg(EXPR))
    } else {
        format!("remove this parenthesis, or add an opening `{}` before it", "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the unmatched parenthesis is an opening parenthesis.
    pub opening: bool,
}

/// Parentheses were found with nothing, or nothing understandable, inside them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty or invalid parenthetical",
    labels = ["this parenthesis"],
    help = format!("add an {} inside the parentheses", "expression".fg(EXPR)),
)]
pub struct EmptyParenthesis;

/// A binary operator was not followed by its right operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected operand after `{}`", op),
    labels = ["this operator"],
)]
pub struct ExpectedOperand {
    /// The lexeme of the operator.
    pub op: String,
}

/// A negation sign was not followed by anything it could negate.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected negation",
    labels = ["this negation sign"],
)]
pub struct UnexpectedNegation;

/// The left side of an assignment is neither a variable nor a function header.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid lhs in assignment",
    labels = ["this assignment"],
    help = format!(
        "only {} and {} can be assigned to",
        "variables".fg(EXPR),
        "function headers like `f(x, y)`".fg(EXPR),
    ),
)]
pub struct InvalidAssignTarget;

/// A parameter in a function header is not a plain identifier.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("parameter `{}` of function `{}` is not an identifier", param, name),
    labels = ["this assignment"],
)]
pub struct NonIdentifierParam {
    /// The name of the function being defined.
    pub name: String,

    /// The string form of the offending parameter.
    pub param: String,
}

/// The same parameter name appears more than once in a function header.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("argument id `{}` used twice in function assignment", param),
    labels = ["this assignment"],
)]
pub struct DuplicateParam {
    /// The repeated parameter name.
    pub param: String,
}

/// Derivative markers were not followed by an argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "trailing apostrophe",
    labels = ["these apostrophes"],
    help = format!("derivative markers must be followed by arguments, like `{}`", "f'(x)".fg(EXPR)),
)]
pub struct TrailingApostrophe;

/// A comma in an argument list was not followed by another argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected argument after `,`",
    labels = ["this comma"],
)]
pub struct ExpectedArgument;

/// The expression contains too many nested parentheses or argument lists.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is nested more than {} levels deep", max),
    labels = ["this parenthesis"],
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}

/// The expression has more operations stacked on each other than the parser accepts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is more than {} operations deep", max),
    labels = ["this operation"],
    help = "split the expression into smaller pieces with variables or functions",
)]
pub struct TooManyOperations {
    /// The maximum height of a tree.
    pub max: usize,
}
