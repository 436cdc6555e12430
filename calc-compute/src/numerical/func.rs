//! Functions that can be called from an expression.

use calc_parser::parser::ast::expr::Expr;
use std::sync::Arc;
use super::{
    ctxt::{Ctxt, Frame},
    error::{Error, InvalidArgument, WrongArgumentCount},
    eval::Eval,
};

/// A native function was given an argument outside of its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    /// The index of the offending argument.
    pub index: usize,

    /// What is wrong with the argument, phrased to follow "argument N of `f`".
    pub reason: &'static str,
}

/// A function defined by the user with an assignment like `f(x, y) = x + y`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunc {
    /// The names of the parameters, all distinct.
    pub params: Vec<String>,

    /// The body of the function.
    pub body: Expr,
}

impl UserFunc {
    /// Evaluates the body with the parameters bound to the given values.
    pub fn call_with_values(&self, name: &str, values: &[f64], ctxt: &mut Ctxt) -> Result<f64, Error> {
        check_arity(name, self.params.len(), values.len())?;
        let frame = Frame::new(self.params.iter().cloned().zip(values.iter().copied()));
        let mut scope = ctxt.push_frame(frame)?;
        self.body.eval(&mut scope)
    }
}

/// A native function that receives its arguments unevaluated.
#[derive(Debug, Clone, Copy)]
pub struct VariadicFn {
    pub eval: fn(&[Expr], &mut Ctxt) -> Result<f64, Error>,
}

/// A native function taking a fixed number of numeric arguments.
#[derive(Debug, Clone, Copy)]
pub enum FixedFn {
    Nullary(fn() -> f64),
    Unary(fn(f64) -> Result<f64, DomainError>),
    Binary(fn(f64, f64) -> Result<f64, DomainError>),
}

impl FixedFn {
    /// The number of arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            FixedFn::Nullary(_) => 0,
            FixedFn::Unary(_) => 1,
            FixedFn::Binary(_) => 2,
        }
    }

    /// Applies the function to already evaluated arguments.
    pub fn call_with_values(&self, name: &str, values: &[f64]) -> Result<f64, Error> {
        let result = match (self, values) {
            (FixedFn::Nullary(f), []) => Ok(f()),
            (FixedFn::Unary(f), &[x]) => f(x),
            (FixedFn::Binary(f), &[x, y]) => f(x, y),
            _ => return Err(Error::spanless(WrongArgumentCount {
                name: name.to_string(),
                expected: self.arity(),
                given: values.len(),
            })),
        };

        result.map_err(|DomainError { index, reason }| Error::spanless(InvalidArgument {
            name: name.to_string(),
            index,
            reason,
        }))
    }
}

/// A function available for use in a context.
#[derive(Debug, Clone)]
pub enum Func {
    /// A function defined by the user.
    UserDefined(Arc<UserFunc>),

    /// A native function that inspects its argument trees.
    Variadic(VariadicFn),

    /// A native function of a fixed number of numeric arguments.
    Fixed(FixedFn),
}

impl From<FixedFn> for Func {
    fn from(func: FixedFn) -> Self {
        Func::Fixed(func)
    }
}

impl From<VariadicFn> for Func {
    fn from(func: VariadicFn) -> Self {
        Func::Variadic(func)
    }
}

impl Func {
    /// Calls the function with the given argument trees.
    ///
    /// User-defined and fixed-arity functions check the number of arguments before evaluating
    /// any of them.
    pub fn call(&self, name: &str, args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Func::UserDefined(func) => {
                check_arity(name, func.params.len(), args.len())?;
                let values = eval_all(args, ctxt)?;
                func.call_with_values(name, &values, ctxt)
            },
            Func::Variadic(func) => (func.eval)(args, ctxt),
            Func::Fixed(func) => {
                check_arity(name, func.arity(), args.len())?;
                let values = eval_all(args, ctxt)?;
                func.call_with_values(name, &values)
            },
        }
    }

    /// Calls the function with arguments that were already evaluated.
    pub fn call_with_values(&self, name: &str, values: &[f64], ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Func::UserDefined(func) => func.call_with_values(name, values, ctxt),
            Func::Variadic(func) => {
                let args = values.iter().map(|&value| Expr::Number(value)).collect::<Vec<_>>();
                (func.eval)(&args, ctxt)
            },
            Func::Fixed(func) => func.call_with_values(name, values),
        }
    }
}

/// Returns an error if `given` is not `expected`.
pub fn check_arity(name: &str, expected: usize, given: usize) -> Result<(), Error> {
    if expected == given {
        Ok(())
    } else {
        Err(Error::spanless(WrongArgumentCount { name: name.to_string(), expected, given }))
    }
}

/// Evaluates each expression in order, stopping at the first error.
pub fn eval_all(args: &[Expr], ctxt: &mut Ctxt) -> Result<Vec<f64>, Error> {
    args.iter().map(|arg| arg.eval(ctxt)).collect()
}

#[cfg(test)]
mod tests {
    use calc_error::ErrorCategory;
    use pretty_assertions::assert_eq;
    use super::*;

    fn double(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
        Ok(2.0 * eval_all(args, ctxt)?.iter().sum::<f64>())
    }

    #[test]
    fn user_function_binds_params() {
        let func = Func::UserDefined(Arc::new(UserFunc {
            params: vec!["a".to_string(), "b".to_string()],
            body: Expr::var("a") - Expr::var("b"),
        }));
        let mut ctxt = Ctxt::new();
        ctxt.add_var("a", 100.0);

        let args = [Expr::Number(5.0), Expr::var("a")];
        assert_eq!(func.call("f", &args, &mut ctxt).unwrap(), -95.0);
        assert_eq!(ctxt.get_var("a"), 100.0);
        assert_eq!(ctxt.call_depth(), 0);
    }

    #[test]
    fn arity_is_checked() {
        let mut ctxt = Ctxt::new();
        let func = Func::Fixed(FixedFn::Binary(|x, y| Ok(x + y)));
        let err = func.call("add", &[Expr::Number(1.0)], &mut ctxt).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FunctionCall);
        assert_eq!(err.to_string(), "FunctionCallError: wrong number of arguments (1 given, 2 expected).");
    }

    #[test]
    fn domain_errors_become_argument_errors() {
        let func = FixedFn::Unary(|_| Err(DomainError { index: 0, reason: "must be positive" }));
        let err = func.call_with_values("g", &[-1.0]).unwrap_err();
        assert_eq!(err.to_string(), "ArgumentError: argument 1 of `g` must be positive.");
    }

    #[test]
    fn variadic_receives_numbers_when_called_with_values() {
        let mut ctxt = Ctxt::new();
        let func = Func::Variadic(VariadicFn { eval: double });
        assert_eq!(func.call_with_values("double", &[1.5, 2.0], &mut ctxt).unwrap(), 7.0);
    }
}
