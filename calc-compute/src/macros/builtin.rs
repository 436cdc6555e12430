//! Macros for symbolic manipulation and inspection of expressions.

use calc_parser::parser::ast::{call::Call, expr::Expr};
use crate::{
    numerical::{ctxt::Ctxt, error::{Error, NonIdentifierArgument}},
    symbolic::{derivative::Differentiator, simplify::simplify as simplify_expr},
};
use super::take_args;
use tracing::debug;

/// `deriv(expr, var)`: the symbolic derivative of `expr` with respect to `var`, unsimplified.
///
/// Whether other variables are treated as constants is controlled by the `PARTIAL` identifier.
pub fn deriv(call: Call, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    let [expr, var] = take_args(call)?;
    let var = var.as_variable().ok_or_else(|| Error::spanless(NonIdentifierArgument {
        name: "deriv".to_string(),
        index: 1,
    }))?;

    let derivative = Differentiator::new(var, ctxt.partial(), ctxt).diff(&expr)?;
    debug!(%expr, var, %derivative, "differentiated");
    Ok(derivative)
}

/// `simplify(expr)`: the canonical, pretty-printed form of `expr`.
pub fn simplify(call: Call, _: &mut Ctxt) -> Result<Expr, Error> {
    let [expr] = take_args(call)?;
    let simplified = simplify_expr(&expr);
    debug!(%expr, %simplified, "simplified");
    Ok(simplified)
}

/// `print_tree(args…)`: writes each argument to the output buffer of the context.
pub fn print_tree(call: Call, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    for arg in &call.args {
        ctxt.print(arg.to_string());
    }
    Ok(Expr::Number(f64::NAN))
}

/// `ans()`: the value of the last statement that evaluated successfully.
pub fn ans(call: Call, ctxt: &mut Ctxt) -> Result<Expr, Error> {
    let [] = take_args(call)?;
    Ok(Expr::Number(ctxt.last_answer))
}
