//! Symbolic manipulation of expressions.
//!
//! - [`derivative`] differentiates a tree with respect to one variable, producing a new,
//!   unsimplified tree.
//! - [`simplify`] rewrites a tree into a canonical form where like terms and like factors are
//!   combined, then formats the result back into ordinary binary and unary operations.
//!
//! ```
//! use calc_compute::numerical::ctxt::Ctxt;
//! use calc_compute::symbolic::{derivative::Differentiator, simplify::simplify};
//! use calc_parser::parser::parse;
//!
//! let ctxt = Ctxt::default();
//! let expr = parse("x^3 + 2x").unwrap();
//! let derivative = Differentiator::new("x", true, &ctxt).diff(&expr).unwrap();
//! assert_eq!(simplify(&derivative).to_string(), "2 + 3 * x^2");
//! ```

pub mod derivative;
pub mod error;
pub mod simplify;
