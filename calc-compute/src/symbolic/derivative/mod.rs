//! Symbolic differentiation.
//!
//! The derivative is built by structural recursion over the tree, one rule per kind of node. The
//! output is not simplified; pass it through [`simplify`](super::simplify::simplify) to get a
//! readable result.

mod function;

use calc_parser::parser::{
    ast::{binary::Binary, call::Call, expr::Expr, nary::Nary, unary::Unary},
    token::op::{BinOpKind, NaryOpKind, UnaryOpKind},
};
use crate::numerical::{
    ctxt::Ctxt,
    error::{Error, UndefinedFunction},
    func::{Func, UserFunc},
};
use std::collections::HashMap;
use super::error::{
    DerivativeArity,
    InliningTooDeep,
    NonPartialDerivative,
    Undifferentiable,
    UndifferentiableFunction,
};
use tracing::trace;

/// The maximum number of user-defined functions that can be inlined into each other while
/// differentiating.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Differentiates expressions with respect to one variable.
#[derive(Debug)]
pub struct Differentiator<'a> {
    /// The variable to differentiate with respect to.
    var: &'a str,

    /// Whether other variables are constants. If false, they are an error.
    partial: bool,

    /// The context that user-defined functions are looked up in.
    ctxt: &'a Ctxt,

    /// The number of user-defined functions currently inlined.
    depth: usize,
}

impl<'a> Differentiator<'a> {
    /// Creates a differentiator for the given variable.
    pub fn new(var: &'a str, partial: bool, ctxt: &'a Ctxt) -> Self {
        Self { var, partial, ctxt, depth: 0 }
    }

    /// Returns the derivative of the expression.
    pub fn diff(&mut self, expr: &Expr) -> Result<Expr, Error> {
        match expr {
            Expr::Number(_) => Ok(Expr::Number(0.0)),
            Expr::Variable(name) if name == self.var => Ok(Expr::Number(1.0)),
            Expr::Variable(_) if self.partial => Ok(Expr::Number(0.0)),
            Expr::Variable(name) => Err(Error::spanless(NonPartialDerivative {
                var: name.clone(),
                target: self.var.to_string(),
            })),
            Expr::Unary(Unary { operand, op: UnaryOpKind::Neg }) => Ok(-self.diff(operand)?),
            Expr::Binary(binary) => self.diff_binary(binary, expr),
            Expr::Call(call) => self.diff_call(call),
            Expr::Nary(nary) => self.diff_nary(nary),
            Expr::Derivative(_) => Err(undifferentiable(expr)),
        }
    }

    /// Applies the rule for a binary operation.
    fn diff_binary(&mut self, binary: &Binary, expr: &Expr) -> Result<Expr, Error> {
        let (u, v) = (&*binary.lhs, &*binary.rhs);
        match binary.op {
            BinOpKind::Add => Ok(self.diff(u)? + self.diff(v)?),
            BinOpKind::Sub => Ok(self.diff(u)? + -self.diff(v)?),
            BinOpKind::Mul => Ok(self.diff(u)? * v.clone() + self.diff(v)? * u.clone()),
            BinOpKind::Div => self.diff(&(u.clone() * v.clone().pow(-1.0))),
            BinOpKind::Exp => {
                // u^v * (v' * ln(u) + u' / u * v)
                let dv = self.diff(v)?;
                let du = self.diff(u)?;
                let ln_u = Expr::call("ln", vec![u.clone()]);
                Ok(u.clone().pow(v.clone()) * (dv * ln_u + du / u.clone() * v.clone()))
            },
            _ => Err(undifferentiable(expr)),
        }
    }

    /// Applies the sum rule or the general product rule to a flattened operation.
    fn diff_nary(&mut self, nary: &Nary) -> Result<Expr, Error> {
        let terms = match nary.op {
            NaryOpKind::Sum => nary.args
                .iter()
                .map(|arg| self.diff(arg))
                .collect::<Result<Vec<_>, _>>()?,
            NaryOpKind::Product => (0..nary.args.len())
                .map(|i| {
                    let mut factors = nary.args.clone();
                    factors[i] = self.diff(&nary.args[i])?;
                    Ok(Expr::nary(NaryOpKind::Product, factors))
                })
                .collect::<Result<Vec<_>, Error>>()?,
        };
        Ok(Expr::nary(NaryOpKind::Sum, terms))
    }

    /// Differentiates a function call, inlining user-defined functions.
    fn diff_call(&mut self, call: &Call) -> Result<Expr, Error> {
        let ctxt = self.ctxt;
        let found = ctxt.get_func(&call.name);
        if let Some(Func::UserDefined(func)) = found {
            return self.inline(call, func);
        }

        let Some(rule) = function::chain_rule(&call.name) else {
            return Err(match found {
                Some(_) => Error::spanless(UndifferentiableFunction { name: call.name.clone() }),
                None => Error::spanless(UndefinedFunction::new(&call.name, ctxt)),
            });
        };

        let [u] = call.args.as_slice() else {
            return Err(Error::spanless(DerivativeArity {
                name: call.name.clone(),
                expected: 1,
                given: call.args.len(),
            }));
        };
        let du = self.diff(u)?;
        Ok(rule(u.clone(), du))
    }

    /// Substitutes the arguments of the call into a copy of the function body, then
    /// differentiates the result.
    fn inline(&mut self, call: &Call, func: &UserFunc) -> Result<Expr, Error> {
        if call.args.len() != func.params.len() {
            return Err(Error::spanless(DerivativeArity {
                name: call.name.clone(),
                expected: func.params.len(),
                given: call.args.len(),
            }));
        }
        if self.depth >= MAX_INLINE_DEPTH {
            return Err(Error::spanless(InliningTooDeep {
                name: call.name.clone(),
                max: MAX_INLINE_DEPTH,
            }));
        }

        let bindings = func.params
            .iter()
            .map(String::as_str)
            .zip(&call.args)
            .collect::<HashMap<_, _>>();
        let inlined = func.body.substitute(&bindings);
        trace!(name = %call.name, %inlined, "inlined function");

        self.depth += 1;
        let result = self.diff(&inlined);
        self.depth -= 1;
        result
    }
}

fn undifferentiable(expr: &Expr) -> Error {
    Error::spanless(Undifferentiable { expr: expr.to_string() })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calc_error::ErrorCategory;
    use calc_parser::parser::parse;
    use crate::{
        funcs::calculus::eval_at,
        numerical::eval::Eval,
        symbolic::simplify::simplify,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn deriv(source: &str, ctxt: &Ctxt) -> Result<Expr, Error> {
        Differentiator::new("x", true, ctxt).diff(&parse(source)?)
    }

    /// Central difference of the expression with respect to `x`.
    fn numeric(expr: &Expr, at: f64, ctxt: &mut Ctxt) -> f64 {
        let h = 1e-6;
        let ahead = eval_at(expr, "x", at + h, ctxt).unwrap();
        let behind = eval_at(expr, "x", at - h, ctxt).unwrap();
        (ahead - behind) / (2.0 * h)
    }

    #[test]
    fn raw_rules() {
        let ctxt = Ctxt::default();
        assert_eq!(deriv("x + y", &ctxt).unwrap(), parse("1 + 0").unwrap());
        assert_eq!(deriv("x - 3", &ctxt).unwrap(), parse("1 + -0").unwrap());
        assert_eq!(deriv("2x", &ctxt).unwrap(), parse("0 * x + 1 * 2").unwrap());
        assert_eq!(deriv("-x", &ctxt).unwrap(), parse("-1").unwrap());
        assert_eq!(deriv("sin(x)", &ctxt).unwrap(), parse("cos(x) * 1").unwrap());
        assert_eq!(deriv("ln(x)", &ctxt).unwrap(), parse("1 / x").unwrap());
    }

    #[test]
    fn power_rule_shape() {
        let ctxt = Ctxt::default();
        assert_eq!(
            deriv("x^3", &ctxt).unwrap(),
            parse("x^3 * (0 * ln(x) + 1 / x * 3)").unwrap(),
        );
    }

    #[test]
    fn simplified_results() {
        let ctxt = Ctxt::default();
        let cases = [
            ("x^3", "3 * x^2"),
            ("5x^2 + 3x", "3 + 10 * x"),
            ("sin(x) * x", "sin(x) + cos(x) * x"),
            ("y * x", "y"),
            ("cos(2x)", "-2 * sin(2 * x)"),
        ];
        for (source, expected) in cases {
            let derivative = simplify(&deriv(source, &ctxt).unwrap());
            assert_eq!(derivative.to_string(), expected, "d/dx {}", source);
        }
    }

    #[test]
    fn linear() {
        let ctxt = Ctxt::default();
        for (f, g) in [("x^2", "sin(x)"), ("3x", "x * ln(x)"), ("exp(2x)", "1 / x")] {
            let whole = deriv(&format!("({}) + ({})", f, g), &ctxt).unwrap();
            let parts = deriv(f, &ctxt).unwrap() + deriv(g, &ctxt).unwrap();
            assert_eq!(simplify(&whole), simplify(&parts), "{} + {}", f, g);
        }
    }

    #[test]
    fn agrees_with_central_difference() {
        let mut ctxt = Ctxt::default();
        let sources = [
            "x^3 - 2x + 1",
            "sin(x) * cos(x)",
            "x / (1 + x^2)",
            "tan(x) + sec(x) - csc(x) + cot(x)",
            "asin(x / 2) + acos(x / 3) + atan(x)",
            "ln(x^2 + 1) * exp(x)",
            "sqrt(x) + log(x)",
            "2^x",
            "x^x",
        ];
        for source in sources {
            let derivative = simplify(&deriv(source, &ctxt).unwrap());
            let expr = parse(source).unwrap();
            for at in [0.3, 0.7, 1.2] {
                let symbolic = eval_at(&derivative, "x", at, &mut ctxt).unwrap();
                let numeric = numeric(&expr, at, &mut ctxt);
                assert_float_absolute_eq!(symbolic, numeric, 1e-4);
            }
        }
    }

    #[test]
    fn user_functions_are_inlined() {
        let mut ctxt = Ctxt::default();
        parse("f(t) = t^2 + t").unwrap().eval(&mut ctxt).unwrap();
        let derivative = simplify(&deriv("f(3x)", &ctxt).unwrap());
        assert_eq!(derivative, parse("3 + 18 * x").unwrap());

        let err = deriv("f(x, 1)", &ctxt).unwrap_err();
        assert_eq!(err.message(), "expected 1 argument(s) for `f`; got 2");
    }

    #[test]
    fn recursive_functions_are_rejected() {
        let mut ctxt = Ctxt::default();
        parse("f(t) = f(t) + 1").unwrap().eval(&mut ctxt).unwrap();
        let err = deriv("f(x)", &ctxt).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Expression);
        assert_eq!(err.message(), format!(
            "cannot differentiate `f`: functions are nested more than {} levels deep",
            MAX_INLINE_DEPTH,
        ));
    }

    #[test]
    fn errors() {
        let ctxt = Ctxt::default();
        assert_eq!(deriv("floor(x)", &ctxt).unwrap_err().message(), "can't differentiate function `floor`");
        assert_eq!(deriv("sin(x, 2)", &ctxt).unwrap_err().message(), "expected 1 argument(s) for `sin`; got 2");
        assert_eq!(deriv("x < 2", &ctxt).unwrap_err().message(), "cannot differentiate expression: `x < 2`");
        assert_eq!(deriv("x % 2", &ctxt).unwrap_err().message(), "cannot differentiate expression: `x % 2`");
        assert_eq!(deriv("g'(x)", &ctxt).unwrap_err().message(), "cannot differentiate expression: `g'(x)`");

        let err = deriv("foo(x)", &ctxt).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FunctionCall);
        assert_eq!(err.message(), "no such function: `foo`");

        let err = Differentiator::new("x", false, &ctxt).diff(&parse("x * y").unwrap()).unwrap_err();
        assert_eq!(err.message(), "can't take non-partial derivative of `y` with respect to x");
    }
}
