//! Conversions between radians and degrees.

use crate::numerical::func::DomainError;

/// Converts radians to degrees.
pub fn deg(n: f64) -> Result<f64, DomainError> {
    Ok(n.to_degrees())
}

/// Converts degrees to radians.
pub fn rad(n: f64) -> Result<f64, DomainError> {
    Ok(n.to_radians())
}
