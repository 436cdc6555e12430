//! Trigonometric functions and their inverses. All angles are in radians.

use crate::numerical::func::DomainError;

/// Build trigonometric functions that take in a single argument.
macro_rules! build_trig {
    ($($(#[$doc:meta])* $name:ident; $func:expr),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(n: f64) -> Result<f64, DomainError> {
                // `$func` may be a closure literal
                #[allow(clippy::redundant_closure_call)]
                Ok(($func)(n))
            }
        )*
    };
}

build_trig! {
    sin; f64::sin,
    cos; f64::cos,
    tan; f64::tan,

    /// Cosecant, `1 / sin(n)`.
    csc; |n: f64| n.sin().recip(),

    /// Secant, `1 / cos(n)`.
    sec; |n: f64| n.cos().recip(),

    /// Cotangent, `1 / tan(n)`.
    cot; |n: f64| n.tan().recip(),

    asin; f64::asin,
    acos; f64::acos,
    atan; f64::atan,
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn reciprocal_functions() {
        assert_float_absolute_eq!(csc(PI / 2.0).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(sec(PI).unwrap(), -1.0, 1e-12);
        assert_float_absolute_eq!(cot(PI / 4.0).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn inverses() {
        assert_float_absolute_eq!(asin(1.0).unwrap(), PI / 2.0, 1e-12);
        assert_float_absolute_eq!(acos(-1.0).unwrap(), PI, 1e-12);
        assert_float_absolute_eq!(atan(1.0).unwrap(), PI / 4.0, 1e-12);
    }
}
