//! Rounding, absolute value, random numbers, and functions over any number of arguments.

use calc_parser::parser::ast::expr::Expr;
use crate::{
    consts::RAND_MAX,
    numerical::{ctxt::Ctxt, error::{Error, TooFewArguments}, func::{eval_all, DomainError}},
};
use rand::Rng;

pub fn floor(n: f64) -> Result<f64, DomainError> {
    Ok(n.floor())
}

pub fn ceil(n: f64) -> Result<f64, DomainError> {
    Ok(n.ceil())
}

pub fn abs(n: f64) -> Result<f64, DomainError> {
    Ok(n.abs())
}

/// Returns a random integer between `0` and [`RAND_MAX`], inclusive.
pub fn random() -> f64 {
    rand::thread_rng().gen_range(0..=RAND_MAX as u32) as f64
}

/// Evaluates every argument, returning an error if there are none.
fn eval_nonempty(name: &str, args: &[Expr], ctxt: &mut Ctxt) -> Result<Vec<f64>, Error> {
    if args.is_empty() {
        return Err(Error::spanless(TooFewArguments {
            name: name.to_string(),
            min: 1,
            given: 0,
        }));
    }
    eval_all(args, ctxt)
}

/// The smallest of the arguments.
pub fn min(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
    Ok(eval_nonempty("min", args, ctxt)?.into_iter().fold(f64::INFINITY, f64::min))
}

/// The largest of the arguments.
pub fn max(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
    Ok(eval_nonempty("max", args, ctxt)?.into_iter().fold(f64::NEG_INFINITY, f64::max))
}

/// The greatest common divisor of the arguments, each truncated to an integer.
pub fn gcd(args: &[Expr], ctxt: &mut Ctxt) -> Result<f64, Error> {
    let result = eval_nonempty("gcd", args, ctxt)?
        .into_iter()
        .map(|n| (n as i64).unsigned_abs())
        .fold(0, |mut a, mut b| {
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a
        });
    Ok(result as f64)
}
