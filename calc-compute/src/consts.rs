//! Constants and configuration identifiers registered in every default [`Ctxt`].
//!
//! Configuration identifiers are ordinary variables, so statements like `DERIV_STEP = 1e-4` change
//! the behavior of later statements.
//!
//! [`Ctxt`]: crate::numerical::ctxt::Ctxt

pub use std::f64::consts::{E, PI};

/// The largest value `rand()` can return.
pub const RAND_MAX: f64 = 2147483647.0;

/// Step size used by numeric differentiation.
pub const DERIV_STEP: &str = "DERIV_STEP";

/// Number of rectangles used by `nintegral`.
pub const INT_NUM_RECTS: &str = "INT_NUM_RECTS";

/// When nonzero, `deriv` treats every variable other than the target as a constant.
pub const PARTIAL: &str = "PARTIAL";

/// When nonzero, `calculate` echoes the parsed (and expanded) tree before the result.
pub const ECHO: &str = "ECHO";

/// Returns every identifier defined in a default context, with its initial value.
pub fn all() -> [(&'static str, f64); 8] {
    [
        ("pi", PI),
        ("e", E),
        ("NaN", f64::NAN),
        ("RAND_MAX", RAND_MAX),
        (DERIV_STEP, 1e-6),
        (INT_NUM_RECTS, 100.0),
        (PARTIAL, 1.0),
        (ECHO, 0.0),
    ]
}
