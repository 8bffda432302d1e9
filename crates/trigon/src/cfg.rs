//! Tolerance defaults for triangle construction (internal).
//!
//! Policy
//! - Fixed constants, shared by every construction mode. Inputs are
//!   dimensionless, so absolute tolerances are used except where a shape
//!   constraint compares two lengths (relative to the larger one).

/// Guard for denominators (`2·p·q`, `sin θ`) in the Law of Cosines/Sines.
pub const DIV_EPS: f64 = 1e-10;
/// Tolerance for angle identities, e.g. the right-triangle check `a1 + a2 = 90`.
pub const ANGLE_EPS: f64 = 1e-9;
/// Relative tolerance for "these two sides are equal" shape constraints.
pub const SHAPE_EPS: f64 = 1e-9;

/// `x ≈ y` relative to the larger magnitude (falls back to absolute near zero).
#[inline]
pub(crate) fn lengths_match(x: f64, y: f64) -> bool {
    (x - y).abs() <= SHAPE_EPS * x.abs().max(y.abs()).max(1.0)
}
