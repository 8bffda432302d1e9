//! Data types: the common side/angle record and the closed set of shapes.
//!
//! Conventions
//! - `angle_alpha` is opposite `side_a`, `angle_beta` opposite `side_b`,
//!   `angle_gamma` opposite `side_c`. Right triangles label their acute
//!   angles by leg instead (see `Triangle::Right`).
//! - Angles are degrees in (0, 180), sides are positive and finite.

use std::fmt;

use crate::error::TriangleError;

/// Fully resolved sides and angles of one triangle.
///
/// Only the factory in `triangle::build` creates records, so every value seen
/// outside this crate satisfies the triangle inequality and the angle sum.
///
/// Each angle is opposite its side (`alpha`/`a`, `beta`/`b`, `gamma`/`c`) and
/// the Law of Cosines holds for those pairs, with one exception: in a
/// `Triangle::Right` record `alpha` is the angle adjacent to leg `a` (opposite
/// leg `b`) and `beta` the one adjacent to leg `b`. `gamma`/`c` is unaffected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub(crate) side_a: f64,
    pub(crate) side_b: f64,
    pub(crate) side_c: f64,
    pub(crate) angle_alpha: f64,
    pub(crate) angle_beta: f64,
    pub(crate) angle_gamma: f64,
}

impl Record {
    #[inline]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.side_b
    }
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.side_c
    }
    #[inline]
    pub fn angle_alpha(&self) -> f64 {
        self.angle_alpha
    }
    #[inline]
    pub fn angle_beta(&self) -> f64 {
        self.angle_beta
    }
    #[inline]
    pub fn angle_gamma(&self) -> f64 {
        self.angle_gamma
    }
    /// `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.side_a, self.side_b, self.side_c]
    }
    /// `[alpha, beta, gamma]` in degrees.
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        [self.angle_alpha, self.angle_beta, self.angle_gamma]
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }
    /// `½·a·b·sin γ` (γ is enclosed by `a` and `b`).
    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.side_a * self.side_b * self.angle_gamma.to_radians().sin()
    }
}

/// Shape label of a `Triangle` variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    General,
    Right,
    Isosceles,
    Equilateral,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::General => "general",
            Shape::Right => "right",
            Shape::Isosceles => "isosceles",
            Shape::Equilateral => "equilateral",
        };
        f.write_str(name)
    }
}

/// A resolved triangle. The variant is fixed by the constructor and selects
/// the derivation rule used by `reconfigure` and by `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Triangle {
    /// Built from sides and/or angles via the Laws of Cosines and Sines.
    General(Record),
    /// `side_a`, `side_b` are the legs, `side_c` the hypotenuse, `angle_gamma`
    /// is exactly 90. `angle_alpha` is the acute angle where leg `a` meets the
    /// hypotenuse, `angle_beta` the one where leg `b` does.
    Right(Record),
    /// `side_a == side_c` are the legs, `side_b` the base, `angle_beta` the apex.
    Isosceles(Record),
    /// All sides equal, all angles exactly 60.
    Equilateral(Record),
}

impl Triangle {
    #[inline]
    pub fn record(&self) -> &Record {
        match self {
            Triangle::General(r)
            | Triangle::Right(r)
            | Triangle::Isosceles(r)
            | Triangle::Equilateral(r) => r,
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        match self {
            Triangle::General(_) => Shape::General,
            Triangle::Right(_) => Shape::Right,
            Triangle::Isosceles(_) => Shape::Isosceles,
            Triangle::Equilateral(_) => Shape::Equilateral,
        }
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.record().side_a
    }
    #[inline]
    pub fn side_b(&self) -> f64 {
        self.record().side_b
    }
    #[inline]
    pub fn side_c(&self) -> f64 {
        self.record().side_c
    }
    #[inline]
    pub fn angle_alpha(&self) -> f64 {
        self.record().angle_alpha
    }
    #[inline]
    pub fn angle_beta(&self) -> f64 {
        self.record().angle_beta
    }
    #[inline]
    pub fn angle_gamma(&self) -> f64 {
        self.record().angle_gamma
    }
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        self.record().sides()
    }
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        self.record().angles()
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.record().perimeter()
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.record().area()
    }

    /// Altitude onto `side_b` (the base of an isosceles triangle).
    ///
    /// Isosceles: `√(leg² − (base/2)²)`; equilateral: `side·√3/2`;
    /// otherwise `2·area / side_b = a·sin γ`.
    pub fn height(&self) -> Result<f64, TriangleError> {
        match self {
            Triangle::Isosceles(r) => {
                // leg·√(1 − (base/2 / leg)²) keeps the squares in range.
                let (leg, ratio) = (r.side_a, 0.5 * r.side_b / r.side_a);
                let radicand = 1.0 - ratio * ratio;
                if !(radicand >= 0.0) {
                    return Err(TriangleError::degenerate(format!(
                        "isosceles height radicand {radicand:e} is negative (leg {leg}, base {})",
                        r.side_b
                    )));
                }
                Ok(leg * radicand.sqrt())
            }
            Triangle::Equilateral(r) => Ok(r.side_a * (3f64.sqrt() / 2.0)),
            Triangle::General(r) | Triangle::Right(r) => {
                // 2·area / b, without forming the product a·b.
                Ok(r.side_a * r.angle_gamma.to_radians().sin())
            }
        }
    }

    /// Apex angle of an isosceles (or equilateral) triangle, `None` otherwise.
    #[inline]
    pub fn apex_angle(&self) -> Option<f64> {
        match self {
            Triangle::Isosceles(r) | Triangle::Equilateral(r) => Some(r.angle_beta),
            _ => None,
        }
    }

    #[inline]
    pub fn is_apex_angle_obtuse(&self) -> Option<bool> {
        self.apex_angle().map(|apex| apex > 90.0)
    }

    #[inline]
    pub fn hypotenuse(&self) -> Option<f64> {
        match self {
            Triangle::Right(r) => Some(r.side_c),
            _ => None,
        }
    }
}
