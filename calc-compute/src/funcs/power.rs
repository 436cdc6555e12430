//! Powers, roots, exponentials, and logarithms.
//!
//! Arguments outside of the real domain of a function produce NaN, like the `^` operator does.

use crate::numerical::func::DomainError;

/// `b^e`, identical to the `^` operator.
pub fn pow(b: f64, e: f64) -> Result<f64, DomainError> {
    Ok(b.powf(e))
}

pub fn sqrt(n: f64) -> Result<f64, DomainError> {
    Ok(n.sqrt())
}

/// `e^n`
pub fn exp(n: f64) -> Result<f64, DomainError> {
    Ok(n.exp())
}

/// Natural logarithm.
pub fn ln(n: f64) -> Result<f64, DomainError> {
    Ok(n.ln())
}

/// Base 10 logarithm.
pub fn log(n: f64) -> Result<f64, DomainError> {
    Ok(n.log10())
}
