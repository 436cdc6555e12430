use calc_parser::parser::ast::call::Derivative;
use crate::numerical::{
    ctxt::Ctxt,
    error::{DerivativeArgumentCount, DerivativeOrderTooHigh, Error},
    func::Func,
};
use super::{call::lookup, Eval};

/// The highest derivative order `f'…'(x)` can request. Each order doubles the number of
/// function evaluations.
pub const MAX_DERIVATIVE_ORDER: u32 = 10;

/// Computes the `order`-th derivative of `func` at `at` with repeated central differences.
fn central_difference(
    func: &Func,
    name: &str,
    order: u32,
    at: f64,
    step: f64,
    ctxt: &mut Ctxt,
) -> Result<f64, Error> {
    if order == 0 {
        return func.call_with_values(name, &[at], ctxt);
    }

    let ahead = central_difference(func, name, order - 1, at + step, step, ctxt)?;
    let behind = central_difference(func, name, order - 1, at - step, step, ctxt)?;
    Ok((ahead - behind) / (2.0 * step))
}

impl Eval for Derivative {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let [arg] = self.args.as_slice() else {
            return Err(Error::spanless(DerivativeArgumentCount {
                name: self.name.clone(),
                given: self.args.len(),
            }));
        };

        if self.order > MAX_DERIVATIVE_ORDER {
            return Err(Error::spanless(DerivativeOrderTooHigh {
                order: self.order,
                max: MAX_DERIVATIVE_ORDER,
            }));
        }

        let func = lookup(&self.name, ctxt)?;
        let at = arg.eval(ctxt)?;
        let step = ctxt.deriv_step();
        central_difference(&func, &self.name, self.order, at, step, ctxt)
    }
}
