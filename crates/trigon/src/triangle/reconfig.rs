//! Reconfiguration: rebuild a triangle from two sides and two angles while
//! keeping its shape.
//!
//! The replacement is always a complete, freshly validated `Triangle` built by
//! the same factory rule as the variant's constructor. `reconfigure` only
//! assigns it once that succeeded, so a failed call leaves `self` untouched.

use crate::cfg::{lengths_match, ANGLE_EPS};
use crate::error::TriangleError;
use crate::math::third_side_by_law_of_cosines;

use super::build::{require_positive, require_two_angles};
use super::types::Triangle;

impl Triangle {
    /// Same shape, new values; `self` is not modified.
    ///
    /// `side1`/`side2` become `a`/`b`; the angle between them is
    /// `180 − angle1 − angle2`. Per shape:
    /// - General: SAS with that included angle.
    /// - Right: `angle1 + angle2` must be 90; the sides are the legs.
    /// - Isosceles: the sides are the legs and must match, the angles are the
    ///   base angles and must match; the base is derived.
    /// - Equilateral: sides must match and both angles must be 60.
    pub fn reconfigured(
        &self,
        side1: f64,
        side2: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<Triangle, TriangleError> {
        require_positive("side1", side1)?;
        require_positive("side2", side2)?;
        require_two_angles(angle1, angle2)?;
        let included = 180.0 - angle1 - angle2;
        match self {
            Triangle::General(_) => Triangle::from_two_sides_angle(side1, side2, included),
            Triangle::Right(_) => {
                if (included - 90.0).abs() > ANGLE_EPS {
                    return Err(TriangleError::invalid(format!(
                        "right triangle needs acute angles summing to 90°, got {angle1}° + {angle2}° = {}°",
                        angle1 + angle2
                    )));
                }
                Triangle::right_from_legs(side1, side2)
            }
            Triangle::Isosceles(_) => {
                require_equal_legs(side1, side2)?;
                if (angle1 - angle2).abs() > ANGLE_EPS {
                    return Err(TriangleError::invalid(format!(
                        "isosceles base angles must be equal, got {angle1}° and {angle2}°"
                    )));
                }
                let base = third_side_by_law_of_cosines(side1, side2, included)?;
                Triangle::isosceles_from_base_leg(base, side1)
            }
            Triangle::Equilateral(_) => {
                require_equal_legs(side1, side2)?;
                if (angle1 - 60.0).abs() > ANGLE_EPS || (angle2 - 60.0).abs() > ANGLE_EPS {
                    return Err(TriangleError::invalid(format!(
                        "equilateral angles must all be 60°, got {angle1}° and {angle2}°"
                    )));
                }
                Triangle::equilateral(side1)
            }
        }
    }

    /// In-place `reconfigured`: on `Err` the triangle keeps its prior values.
    pub fn reconfigure(
        &mut self,
        side1: f64,
        side2: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<(), TriangleError> {
        *self = self.reconfigured(side1, side2, angle1, angle2)?;
        Ok(())
    }
}

fn require_equal_legs(side1: f64, side2: f64) -> Result<(), TriangleError> {
    if lengths_match(side1, side2) {
        Ok(())
    } else {
        Err(TriangleError::invalid(format!(
            "legs must have equal length, got {side1} and {side2}"
        )))
    }
}
