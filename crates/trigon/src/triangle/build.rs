//! Factory: one constructor per input mode.
//!
//! Every constructor validates all of its inputs before deriving anything, so
//! an `Err` never carries or leaves behind a half-built value. Derived sides
//! are re-checked against the triangle inequality before the record is built.

use crate::error::TriangleError;
use crate::math::{law_of_cosines_angle, side_by_law_of_sines, third_side_by_law_of_cosines};

use super::types::{Record, Triangle};

pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), TriangleError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TriangleError::invalid(format!(
            "{name} must be a positive finite length, got {value}"
        )))
    }
}

pub(crate) fn require_open_angle(name: &str, degrees: f64) -> Result<(), TriangleError> {
    if degrees > 0.0 && degrees < 180.0 {
        Ok(())
    } else {
        Err(TriangleError::invalid(format!(
            "{name} must lie strictly between 0° and 180°, got {degrees}"
        )))
    }
}

pub(crate) fn require_two_angles(angle1: f64, angle2: f64) -> Result<(), TriangleError> {
    require_open_angle("angle1", angle1)?;
    require_open_angle("angle2", angle2)?;
    let sum = angle1 + angle2;
    if sum < 180.0 {
        Ok(())
    } else {
        Err(TriangleError::invalid(format!(
            "angle sum {angle1}° + {angle2}° = {sum}° leaves no room for a third angle (needs < 180°)"
        )))
    }
}

/// Strict `x + y > z` for all three permutations.
pub(crate) fn require_triangle_inequality(a: f64, b: f64, c: f64) -> Result<(), TriangleError> {
    for (x, y, z) in [(a, b, c), (b, c, a), (c, a, b)] {
        if !(x + y > z) {
            return Err(TriangleError::invalid(format!(
                "sides {a}, {b}, {c} violate the triangle inequality ({x} + {y} <= {z})"
            )));
        }
    }
    Ok(())
}

/// All three angles from validated sides, each via the Law of Cosines.
fn record_from_sides(a: f64, b: f64, c: f64) -> Result<Record, TriangleError> {
    Ok(Record {
        side_a: a,
        side_b: b,
        side_c: c,
        angle_alpha: law_of_cosines_angle(a, b, c)?,
        angle_beta: law_of_cosines_angle(b, a, c)?,
        angle_gamma: law_of_cosines_angle(c, a, b)?,
    })
}

impl Triangle {
    /// SSS: three side lengths.
    pub fn from_three_sides(a: f64, b: f64, c: f64) -> Result<Triangle, TriangleError> {
        require_positive("side a", a)?;
        require_positive("side b", b)?;
        require_positive("side c", c)?;
        require_triangle_inequality(a, b, c)?;
        Ok(Triangle::General(record_from_sides(a, b, c)?))
    }

    /// SAS: `side1` and `side2` become `a` and `b`, `included` is `gamma`.
    pub fn from_two_sides_angle(
        side1: f64,
        side2: f64,
        included: f64,
    ) -> Result<Triangle, TriangleError> {
        require_positive("side1", side1)?;
        require_positive("side2", side2)?;
        require_open_angle("included angle", included)?;
        let side_c = third_side_by_law_of_cosines(side1, side2, included)?;
        require_positive("derived side c", side_c)?;
        require_triangle_inequality(side1, side2, side_c)?;
        Ok(Triangle::General(Record {
            side_a: side1,
            side_b: side2,
            side_c,
            angle_alpha: law_of_cosines_angle(side1, side2, side_c)?,
            angle_beta: law_of_cosines_angle(side2, side1, side_c)?,
            angle_gamma: included,
        }))
    }

    /// ASA: `angle1` (alpha) and `angle2` (beta) sit at the two ends of
    /// `side`, which becomes `c`.
    pub fn from_two_angles_side(
        side: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<Triangle, TriangleError> {
        require_positive("side", side)?;
        require_two_angles(angle1, angle2)?;
        let gamma = 180.0 - angle1 - angle2;
        let side_a = side_by_law_of_sines(side, gamma, angle1)?;
        let side_b = side_by_law_of_sines(side, gamma, angle2)?;
        require_triangle_inequality(side_a, side_b, side)?;
        Ok(Triangle::General(Record {
            side_a,
            side_b,
            side_c: side,
            angle_alpha: angle1,
            angle_beta: angle2,
            angle_gamma: gamma,
        }))
    }

    /// Right triangle from its legs; the hypotenuse follows from Pythagoras.
    pub fn right_from_legs(leg1: f64, leg2: f64) -> Result<Triangle, TriangleError> {
        require_positive("leg1", leg1)?;
        require_positive("leg2", leg2)?;
        let hypotenuse = leg1.hypot(leg2);
        let alpha = leg2.atan2(leg1).to_degrees();
        Ok(Triangle::Right(Record {
            side_a: leg1,
            side_b: leg2,
            side_c: hypotenuse,
            angle_alpha: alpha,
            angle_beta: 90.0 - alpha,
            angle_gamma: 90.0,
        }))
    }

    /// Isosceles triangle: `a = c = leg`, `b = base`.
    ///
    /// One Law-of-Cosines call gives the base angle; the apex follows from the
    /// angle sum, which keeps the sum at 180 up to a single rounding.
    pub fn isosceles_from_base_leg(base: f64, leg: f64) -> Result<Triangle, TriangleError> {
        require_positive("base", base)?;
        require_positive("leg", leg)?;
        if !(2.0 * leg > base) {
            return Err(TriangleError::invalid(format!(
                "legs {leg} + {leg} must exceed base {base} (triangle inequality)"
            )));
        }
        let base_angle = law_of_cosines_angle(leg, base, leg)?;
        Ok(Triangle::Isosceles(Record {
            side_a: leg,
            side_b: base,
            side_c: leg,
            angle_alpha: base_angle,
            angle_beta: 180.0 - 2.0 * base_angle,
            angle_gamma: base_angle,
        }))
    }

    pub fn equilateral(side: f64) -> Result<Triangle, TriangleError> {
        require_positive("side", side)?;
        Ok(Triangle::Equilateral(Record {
            side_a: side,
            side_b: side,
            side_c: side,
            angle_alpha: 60.0,
            angle_beta: 60.0,
            angle_gamma: 60.0,
        }))
    }
}
