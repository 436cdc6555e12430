//! Numerical evaluation of expressions.
//!
//! The [`ctxt::Ctxt`] holds every variable, function and macro a statement can refer to, and
//! [`eval::Eval`] evaluates a parsed tree against it.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod fmt;
pub mod func;
