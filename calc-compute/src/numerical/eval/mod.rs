//! Numeric evaluation of expressions.
//!
//! Every node is evaluated after its children, with the exception of assignments and calls to
//! variadic native functions, which decide for themselves which subtrees to evaluate.

mod binary;
mod call;
mod derivative;
mod unary;

use calc_parser::parser::{ast::{expr::Expr, nary::Nary}, token::op::NaryOpKind};
use super::{ctxt::Ctxt, error::Error};

pub use binary::apply_binary;
pub use derivative::MAX_DERIVATIVE_ORDER;

/// Any type that can be numerically evaluated.
pub trait Eval {
    /// Evaluate the expression to a number, using the given context for variables and functions.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression with the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&mut Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => Ok(ctxt.get_var(name)),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Derivative(derivative) => derivative.eval(ctxt),
            Expr::Nary(nary) => nary.eval(ctxt),
        }
    }
}

impl Eval for Nary {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let mut acc = self.op.identity();
        for arg in &self.args {
            let value = arg.eval(ctxt)?;
            match self.op {
                NaryOpKind::Sum => acc += value,
                NaryOpKind::Product => acc *= value,
            }
        }
        Ok(acc)
    }
}
