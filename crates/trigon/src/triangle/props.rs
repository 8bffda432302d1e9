//! Property tests over the construction modes.

use super::*;
use proptest::prelude::*;

fn rel_close(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() <= tol * x.abs().max(y.abs()).max(1.0)
}

/// Side `c` strictly inside `(|a−b|, a+b)`, parameterized by `t ∈ (0,1)`.
fn third_side(a: f64, b: f64, t: f64) -> f64 {
    let lo = (a - b).abs();
    lo + t * (a + b - lo)
}

/// Powers of ten across most of the `f64` range. The lower end keeps every
/// `2·p·q` above `DIV_EPS` for the unit-scale sides the tests multiply.
fn magnitude() -> impl Strategy<Value = f64> {
    (-2.0f64..150.0).prop_map(|e| 10f64.powf(e))
}

proptest! {
    #[test]
    fn three_sides_angle_sum_and_cosine_roundtrip(
        a in 1.0f64..100.0,
        b in 1.0f64..100.0,
        t in 0.05f64..0.95,
        scale in magnitude(),
    ) {
        let c = third_side(a, b, t);
        let tri = Triangle::from_three_sides(a * scale, b * scale, c * scale).unwrap();
        // Compare in unit scale; the angles do not depend on it.
        let [a, b, c] = tri.sides().map(|s| s / scale);
        let [alpha, beta, gamma] = tri.angles();
        prop_assert!((alpha + beta + gamma - 180.0).abs() < 1e-6);

        let cos = |deg: f64| deg.to_radians().cos();
        let a2 = (b * b + c * c - 2.0 * b * c * cos(alpha)).sqrt();
        let b2 = (a * a + c * c - 2.0 * a * c * cos(beta)).sqrt();
        let c2 = (a * a + b * b - 2.0 * a * b * cos(gamma)).sqrt();
        prop_assert!(rel_close(a2, a, 1e-6), "a {a} vs {a2}");
        prop_assert!(rel_close(b2, b, 1e-6), "b {b} vs {b2}");
        prop_assert!(rel_close(c2, c, 1e-6), "c {c} vs {c2}");
    }

    #[test]
    fn right_legs_pythagoras_and_complementary_angles(
        l1 in 0.01f64..1000.0,
        l2 in 0.01f64..1000.0,
        scale in magnitude(),
    ) {
        let tri = Triangle::right_from_legs(l1 * scale, l2 * scale).unwrap();
        prop_assert!(rel_close(tri.side_c() / scale, (l1 * l1 + l2 * l2).sqrt(), 1e-12));
        prop_assert!((tri.angle_alpha() + tri.angle_beta() - 90.0).abs() < 1e-6);
        prop_assert_eq!(tri.angle_gamma(), 90.0);
    }

    #[test]
    fn two_sides_angle_closes(
        a in 1.0f64..100.0,
        b in 1.0f64..100.0,
        gamma in 5.0f64..175.0,
        scale in magnitude(),
    ) {
        let tri = Triangle::from_two_sides_angle(a * scale, b * scale, gamma).unwrap();
        prop_assert!(tri.angles().iter().all(|x| x.is_finite()));
        let sum: f64 = tri.angles().iter().sum();
        prop_assert!((sum - 180.0).abs() < 1e-6);
        // Law of Sines: every side/sin(opposite) ratio agrees.
        let ratio = |s: f64, deg: f64| s / deg.to_radians().sin();
        let r = ratio(tri.side_c(), tri.angle_gamma());
        prop_assert!(rel_close(ratio(tri.side_a(), tri.angle_alpha()), r, 1e-6));
        prop_assert!(rel_close(ratio(tri.side_b(), tri.angle_beta()), r, 1e-6));
    }

    #[test]
    fn two_angles_side_matches_three_sides(
        side in 0.5f64..50.0,
        a1 in 5.0f64..85.0,
        a2 in 5.0f64..85.0,
        scale in magnitude(),
    ) {
        let asa = Triangle::from_two_angles_side(side * scale, a1, a2).unwrap();
        let sss = Triangle::from_three_sides(asa.side_a(), asa.side_b(), asa.side_c()).unwrap();
        for (x, y) in asa.angles().into_iter().zip(sss.angles()) {
            prop_assert!((x - y).abs() < 1e-6, "{x} vs {y}");
        }
    }

    #[test]
    fn failed_reconfigure_keeps_prior_values(
        l1 in 0.1f64..10.0,
        l2 in 0.1f64..10.0,
        a1 in 1.0f64..80.0,
        off in 0.01f64..5.0,
    ) {
        let mut tri = Triangle::right_from_legs(l1, l2).unwrap();
        let before = tri;
        let res = tri.reconfigure(l2, l1, a1, 90.0 - a1 - off);
        prop_assert!(res.unwrap_err().is_invalid());
        prop_assert_eq!(tri, before);
    }

    #[test]
    fn isosceles_height_matches_area(
        leg in 0.5f64..50.0,
        frac in 0.01f64..0.99,
        scale in magnitude(),
    ) {
        let base = 2.0 * leg * frac;
        let tri = Triangle::isosceles_from_base_leg(base * scale, leg * scale).unwrap();
        let h = tri.height().unwrap() / scale;
        let area = 0.5 * leg * base * tri.angle_alpha().to_radians().sin();
        prop_assert!(rel_close(0.5 * base * h, area, 1e-9));
        let sum: f64 = tri.angles().iter().sum();
        prop_assert!((sum - 180.0).abs() < 1e-9);
    }
}
