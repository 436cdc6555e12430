//! Factorials, permutations, and combinations.

use crate::numerical::func::DomainError;

const NON_NEGATIVE_INTEGER: &str = "must be a non-negative integer";

/// Returns the argument as an integer if it is a non-negative integer.
fn natural(n: f64, index: usize) -> Result<u64, DomainError> {
    if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 {
        Ok(n as u64)
    } else {
        Err(DomainError { index, reason: NON_NEGATIVE_INTEGER })
    }
}

/// Multiplies the integers in `from..=to` as floats.
fn product(from: u64, to: u64) -> f64 {
    // past 170!, the product overflows to infinity anyway
    (from..=to).take(171).fold(1.0, |acc, k| acc * k as f64)
}

/// `n!`
pub fn factorial(n: f64) -> Result<f64, DomainError> {
    let n = natural(n, 0)?;
    Ok(product(1, n))
}

/// The number of ordered arrangements of `k` items out of `n`, `n! / (n - k)!`.
pub fn perm(n: f64, k: f64) -> Result<f64, DomainError> {
    let (n, k) = (natural(n, 0)?, natural(k, 1)?);
    if k > n {
        return Ok(0.0);
    }
    Ok(product(n - k + 1, n))
}

/// The number of unordered selections of `k` items out of `n`, `n! / ((n - k)! * k!)`.
pub fn comb(n: f64, k: f64) -> Result<f64, DomainError> {
    let (n, k) = (natural(n, 0)?, natural(k, 1)?);
    if k > n {
        return Ok(0.0);
    }

    // multiply and divide alternately to keep intermediate values small
    let k = k.min(n - k);
    let result = (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64);
    Ok(result.round())
}
