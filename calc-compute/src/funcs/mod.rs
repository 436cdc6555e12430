//! The native function library available in every default context.
//!
//! Most functions take a fixed number of numeric arguments and are plain Rust functions of
//! [`f64`]s. Variadic functions (`min`, `max`, `gcd`, `nderiv`, `nintegral`) receive the argument
//! trees and evaluate them as they see fit.
//!
//! # Example
//!
//! ```
//! use calc_compute::funcs::{combinatoric, trigonometry};
//!
//! assert_eq!(combinatoric::comb(5.0, 2.0), Ok(10.0));
//! assert_eq!(trigonometry::sin(0.0), Ok(0.0));
//! ```

pub mod angle;
pub mod calculus;
pub mod combinatoric;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use crate::numerical::func::{FixedFn, Func, VariadicFn};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every native function, by name.
pub static BUILTINS: Lazy<HashMap<&'static str, Func>> = Lazy::new(all);

/// Returns a list of all native functions.
pub fn all() -> HashMap<&'static str, Func> {
    use angle::*;
    use calculus::*;
    use combinatoric::*;
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        (@func nullary $func:path) => { Func::from(FixedFn::Nullary($func)) };
        (@func unary $func:path) => { Func::from(FixedFn::Unary($func)) };
        (@func binary $func:path) => { Func::from(FixedFn::Binary($func)) };
        (@func variadic $func:path) => { Func::from(VariadicFn { eval: $func }) };
        ($($name:literal $kind:ident $func:path),* $(,)?) => {
            [
                $(
                    ($name, build!(@func $kind $func)),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "floor" unary floor,
        "ceil" unary ceil,
        "abs" unary abs,
        "rand" nullary random,
        "min" variadic min,
        "max" variadic max,
        "gcd" variadic gcd,

        "factorial" unary factorial,
        "perm" binary perm,
        "comb" binary comb,

        "pow" binary pow,
        "sqrt" unary sqrt,
        "exp" unary exp,
        "ln" unary ln,
        "log" unary log,

        "deg" unary deg,
        "rad" unary rad,

        "sin" unary sin,
        "cos" unary cos,
        "tan" unary tan,
        "csc" unary csc,
        "sec" unary sec,
        "cot" unary cot,
        "asin" unary asin,
        "acos" unary acos,
        "atan" unary atan,

        "nderiv" variadic nderiv,
        "nintegral" variadic nintegral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_arities() {
        let arity = |name: &str| match &BUILTINS[name] {
            Func::Fixed(func) => Some(func.arity()),
            _ => None,
        };
        assert_eq!(arity("rand"), Some(0));
        assert_eq!(arity("sin"), Some(1));
        assert_eq!(arity("comb"), Some(2));
        assert_eq!(arity("max"), None);
        assert_eq!(BUILTINS.len(), 28);
    }
}
