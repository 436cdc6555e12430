//! Derivatives of the native functions, with the chain rule applied.

use calc_parser::parser::ast::expr::Expr;

/// Builds `f'(u) * du` for some function `f`, given the argument `u` and its derivative `du`.
pub type ChainRule = fn(Expr, Expr) -> Expr;

fn call(name: &str, u: Expr) -> Expr {
    Expr::call(name, vec![u])
}

/// `(1 - u^2)^(-1/2)`, shared by `asin` and `acos`.
fn inverse_sine_factor(u: Expr) -> Expr {
    (Expr::Number(1.0) - u.pow(2.0)).pow(-0.5)
}

/// Returns the chain rule for the named native function, if it has one.
pub(super) fn chain_rule(name: &str) -> Option<ChainRule> {
    let rule: ChainRule = match name {
        "ln" => |u: Expr, du: Expr| du / u,
        "log" => |u: Expr, du: Expr| du / (u * call("ln", Expr::Number(10.0))),
        "exp" => |u: Expr, du: Expr| call("exp", u) * du,
        "sqrt" => |u: Expr, du: Expr| Expr::Number(0.5) * u.pow(-0.5) * du,
        "sin" => |u: Expr, du: Expr| call("cos", u) * du,
        "cos" => |u: Expr, du: Expr| -(call("sin", u) * du),
        "tan" => |u: Expr, du: Expr| call("sec", u).pow(2.0) * du,
        "csc" => |u: Expr, du: Expr| -(call("csc", u.clone()) * call("cot", u) * du),
        "sec" => |u: Expr, du: Expr| call("sec", u.clone()) * call("tan", u) * du,
        "cot" => |u: Expr, du: Expr| -(call("csc", u).pow(2.0) * du),
        "asin" => |u: Expr, du: Expr| inverse_sine_factor(u) * du,
        "acos" => |u: Expr, du: Expr| -(inverse_sine_factor(u) * du),
        "atan" => |u: Expr, du: Expr| du / (Expr::Number(1.0) + u.pow(2.0)),
        _ => return None,
    };
    Some(rule)
}
