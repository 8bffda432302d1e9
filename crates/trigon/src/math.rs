//! Stateless trigonometric helpers shared by every construction mode.
//!
//! - Angles cross this API in degrees; radians only appear internally.
//! - Divisions are guarded by `cfg::DIV_EPS` and reported as
//!   `TriangleError::DegenerateGeometry` instead of producing inf/NaN.
//!
//! Code cross-refs: `triangle::build` (factory), `triangle::reconfig`.

use crate::cfg::DIV_EPS;
use crate::error::TriangleError;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// `acos` in degrees with the argument clamped to `[-1, 1]`.
///
/// The Law of Cosines can overshoot ±1 by a few ulps on nearly flat
/// triangles; clamping keeps the result finite (0° or 180°).
#[inline]
pub fn clamped_arccos_degrees(cos_value: f64) -> f64 {
    to_degrees(cos_value.clamp(-1.0, 1.0).acos())
}

/// Angle (degrees) opposite `opposite`, enclosed by sides `p` and `q`.
///
/// `cos θ = (p² + q² − opposite²) / (2pq)`, evaluated on the sides divided by
/// the longest one so the squares stay finite for any finite input.
pub fn law_of_cosines_angle(opposite: f64, p: f64, q: f64) -> Result<f64, TriangleError> {
    let denom = 2.0 * p * q;
    if !(denom.abs() > DIV_EPS) {
        return Err(TriangleError::degenerate(format!(
            "law of cosines denominator 2pq = {denom:e} is too close to zero"
        )));
    }
    let scale = opposite.abs().max(p.abs()).max(q.abs());
    let (o, u, v) = (opposite / scale, p / scale, q / scale);
    let cos = (u * u + v * v - o * o) / (2.0 * u * v);
    if !cos.is_finite() {
        return Err(TriangleError::degenerate(format!(
            "law of cosines produced a non-finite cosine for sides {opposite}, {p}, {q}"
        )));
    }
    Ok(clamped_arccos_degrees(cos))
}

/// Side opposite the included angle (degrees) between `p` and `q`.
pub fn third_side_by_law_of_cosines(
    p: f64,
    q: f64,
    included_deg: f64,
) -> Result<f64, TriangleError> {
    let scale = p.abs().max(q.abs());
    let (u, v) = (p / scale, q / scale);
    let sq = u * u + v * v - 2.0 * u * v * to_radians(included_deg).cos();
    if !sq.is_finite() {
        return Err(TriangleError::degenerate(format!(
            "law of cosines radicand is not finite for sides {p}, {q} and angle {included_deg}°"
        )));
    }
    // Rounding can push (p−q)² slightly below zero for p≈q and tiny angles.
    Ok(scale * sq.max(0.0).sqrt())
}

/// Side opposite `target_angle_deg`, given a side and its opposite angle.
pub fn side_by_law_of_sines(
    known_side: f64,
    known_angle_deg: f64,
    target_angle_deg: f64,
) -> Result<f64, TriangleError> {
    let sin_known = to_radians(known_angle_deg).sin();
    if !(sin_known.abs() > DIV_EPS) {
        return Err(TriangleError::degenerate(format!(
            "sin({known_angle_deg}°) is too close to zero for the law of sines"
        )));
    }
    Ok(known_side * to_radians(target_angle_deg).sin() / sin_known)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arccos_clamps_overshoot() {
        assert_eq!(clamped_arccos_degrees(1.0 + 1e-12), 0.0);
        assert!((clamped_arccos_degrees(-1.0 - 1e-12) - 180.0).abs() < 1e-12);
        assert!((clamped_arccos_degrees(0.5) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn cosines_angle_of_345() {
        // Angle opposite the hypotenuse.
        let g = law_of_cosines_angle(5.0, 3.0, 4.0).unwrap();
        assert!((g - 90.0).abs() < 1e-12);
        let a = law_of_cosines_angle(3.0, 4.0, 5.0).unwrap();
        assert!((a - 36.869_897_645_844_02).abs() < 1e-9);
    }

    #[test]
    fn cosines_angle_rejects_zero_adjacent_side() {
        let err = law_of_cosines_angle(1.0, 0.0, 1.0).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
        let err = law_of_cosines_angle(1.0, 1e-6, 1e-6).unwrap_err();
        assert!(err.is_degenerate());
        let err = law_of_cosines_angle(1.0, f64::NAN, 1.0).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn third_side_matches_known_cases() {
        assert!((third_side_by_law_of_cosines(3.0, 4.0, 90.0).unwrap() - 5.0).abs() < 1e-12);
        // 60° between equal sides closes an equilateral triangle.
        assert!((third_side_by_law_of_cosines(2.0, 2.0, 60.0).unwrap() - 2.0).abs() < 1e-12);
        // Never NaN for equal sides and a vanishing angle.
        let c = third_side_by_law_of_cosines(1.0, 1.0, 1e-9).unwrap();
        assert!(c.is_finite() && c >= 0.0);
    }

    #[test]
    fn huge_sides_stay_finite() {
        let g = law_of_cosines_angle(1e200, 1e200, 1e200).unwrap();
        assert!((g - 60.0).abs() < 1e-9, "angle {g}");
        let r = law_of_cosines_angle(5e300, 3e300, 4e300).unwrap();
        assert!((r - 90.0).abs() < 1e-9);
        let c = third_side_by_law_of_cosines(1e200, 1e200, 60.0).unwrap();
        assert!((c / 1e200 - 1.0).abs() < 1e-12, "side {c}");
    }

    #[test]
    fn non_finite_intermediates_are_degenerate() {
        let err = law_of_cosines_angle(f64::INFINITY, 1.0, 1.0).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
        let err = third_side_by_law_of_cosines(f64::NAN, 1.0, 60.0).unwrap_err();
        assert!(err.is_degenerate(), "{err}");
    }

    #[test]
    fn sines_side_and_degenerate_guard() {
        // 30-60-90: side opposite 30° is half the hypotenuse.
        let s = side_by_law_of_sines(10.0, 90.0, 30.0).unwrap();
        assert!((s - 5.0).abs() < 1e-12);
        assert!(side_by_law_of_sines(1.0, 0.0, 30.0).unwrap_err().is_degenerate());
        assert!(side_by_law_of_sines(1.0, 180.0, 30.0)
            .unwrap_err()
            .is_degenerate());
    }

    #[test]
    fn degree_radian_conversions_roundtrip_pi() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }
}
