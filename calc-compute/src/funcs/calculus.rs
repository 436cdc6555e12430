//! Numeric differentiation and integration of an expression with respect to a variable.

use calc_parser::parser::ast::expr::Expr;
use crate::numerical::{
    ctxt::Ctxt,
    error::{Error, InvalidRectangleCount, NonIdentifierArgument},
    eval::Eval,
    func::check_arity,
};

/// The largest value of `INT_NUM_RECTS` that [`nintegral`] accepts.
pub const MAX_INT_NUM_RECTS: f64 = 1e7;

/// Returns the name of the variable given as the argument at `index`.
pub(crate) fn identifier_arg<'a>(func: &str, args: &'a [Expr], index: usize) -> Result<&'a str, Error> {
    args.get(index)
        .and_then(Expr::as_variable)
        .ok_or_else(|| Error::spanless(NonIdentifierArgument { name: func.to_string(), index }))
}

/// Evaluates `expr` with `var` bound to `at`.
///
/// The binding is made in a copy of the innermost call frame, so the parameters of an enclosing
/// user function stay visible.
pub(crate) fn eval_at(expr: &Expr, var: &str, at: f64, ctxt: &mut Ctxt) -> Result<f64, Error> {
    let mut frame = ctxt.current_frame().cloned().unwrap_or_default();
    frame.bind(var, at);
    let mut scope = ctxt.push_frame(frame)?;
    expr.eval(&mut scope)
}

/// `nderiv(expr, var, at)`: the derivative of `expr` with respect to `var` at `at`, computed with
/// a central difference of step `DERIV_STEP`.
pub fn nderiv(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
    check_arity("nderiv", 3, args.len())?;
    let var = identifier_arg("nderiv", args, 1)?;
    let at = args[2].eval(ctxt)?;
    let step = ctxt.deriv_step();

    let ahead = eval_at(&args[0], var, at + step, ctxt)?;
    let behind = eval_at(&args[0], var, at - step, ctxt)?;
    Ok((ahead - behind) / (2.0 * step))
}

/// `nintegral(expr, var, lo, hi)`: the integral of `expr` with respect to `var` from `lo` to `hi`,
/// computed with the midpoint rule over `INT_NUM_RECTS` rectangles.
pub fn nintegral(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
    check_arity("nintegral", 4, args.len())?;
    let var = identifier_arg("nintegral", args, 1)?;
    let lo = args[2].eval(ctxt)?;
    let hi = args[3].eval(ctxt)?;

    let rects = ctxt.int_num_rects();
    if !(1.0..=MAX_INT_NUM_RECTS).contains(&rects) {
        return Err(Error::spanless(InvalidRectangleCount { value: rects, max: MAX_INT_NUM_RECTS }));
    }
    let rects = rects as u64;
    let width = (hi - lo) / rects as f64;
    let mut area = 0.0;
    for i in 0..rects {
        let mid = lo + (i as f64 + 0.5) * width;
        area += eval_at(&args[0], var, mid, ctxt)? * width;
    }
    Ok(area)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calc_error::ErrorCategory;
    use calc_parser::parser::parse;
    use super::*;

    fn run(ctxt: &mut Ctxt, source: &str) -> Result<f64, Error> {
        parse(source)?.eval(ctxt)
    }

    #[test]
    fn derivative_at_point() {
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(run(&mut ctxt, "nderiv(x^2, x, 3)").unwrap(), 6.0, 1e-4);
        assert_float_absolute_eq!(run(&mut ctxt, "nderiv(sin(t), t, 0)").unwrap(), 1.0, 1e-4);
    }

    #[test]
    fn integral_over_interval() {
        let mut ctxt = Ctxt::default();
        assert_float_absolute_eq!(run(&mut ctxt, "nintegral(x^2, x, 0, 3)").unwrap(), 9.0, 1e-2);

        ctxt.add_var("INT_NUM_RECTS", 1000.0);
        assert_float_absolute_eq!(run(&mut ctxt, "nintegral(cos(x), x, 0, pi / 2)").unwrap(), 1.0, 1e-4);
    }

    #[test]
    fn rectangle_count_is_bounded() {
        let mut ctxt = Ctxt::default();
        for rects in [f64::INFINITY, 1e15, 0.0, -3.0, f64::NAN] {
            ctxt.add_var("INT_NUM_RECTS", rects);
            let err = run(&mut ctxt, "nintegral(x, x, 0, 1)").unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Argument);
        }

        ctxt.add_var("INT_NUM_RECTS", f64::INFINITY);
        assert_eq!(
            run(&mut ctxt, "nintegral(x, x, 0, 1)").unwrap_err().message(),
            "`INT_NUM_RECTS` must be between 1 and 10000000; got inf",
        );

        ctxt.add_var("INT_NUM_RECTS", 1.0);
        assert_float_absolute_eq!(run(&mut ctxt, "nintegral(x, x, 0, 1)").unwrap(), 0.5, 1e-9);
    }

    #[test]
    fn binding_is_local() {
        let mut ctxt = Ctxt::default();
        ctxt.add_var("x", 10.0);
        run(&mut ctxt, "nderiv(x^2, x, 3)").unwrap();
        assert_eq!(ctxt.get_var("x"), 10.0);
        assert_eq!(ctxt.call_depth(), 0);
    }

    #[test]
    fn sees_enclosing_parameters() {
        let mut ctxt = Ctxt::default();
        run(&mut ctxt, "slope(a) = nderiv(a * x^2, x, 1)").unwrap();
        assert_float_absolute_eq!(run(&mut ctxt, "slope(5)").unwrap(), 10.0, 1e-4);
    }

    #[test]
    fn variable_must_be_identifier() {
        let mut ctxt = Ctxt::default();
        let err = run(&mut ctxt, "nderiv(x^2, 2, 3)").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Expression);
        assert_eq!(err.message(), "argument 2 of `nderiv` must be an identifier");

        let err = run(&mut ctxt, "nintegral(x, x, 1)").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::FunctionCall);
    }
}
