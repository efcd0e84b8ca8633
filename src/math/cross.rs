//! Cross-product style area formulas on raw coordinates.
//!
//! All functions assume their inputs already have the dimension they
//! name; dimension checking is the caller's job.

use super::norm::max_abs;
use super::Vector3;

/// Returns the scalar (pseudo) cross product `u.x * v.y - u.y * v.x`.
///
/// This is the `z` component of the 3D cross product of the two vectors
/// embedded in the `xy` plane.
#[must_use]
pub fn cross_2d(u: &[f64], v: &[f64]) -> f64 {
    u[0] * v[1] - u[1] * v[0]
}

/// Returns the full 3D cross product `u × v`.
#[must_use]
pub fn cross_3d(u: &[f64], v: &[f64]) -> Vector3 {
    Vector3::new(u[0], u[1], u[2]).cross(&Vector3::new(v[0], v[1], v[2]))
}

/// Returns the area of the parallelogram spanned by `u` and `v` in any dimension.
///
/// Uses the Gram determinant of the two vectors:
/// `sqrt(|u|² |v|² - (u·v)²)`, evaluated on copies scaled to unit max
/// component so the squares neither overflow nor underflow. Rounding can
/// push the radicand slightly below zero for (nearly) parallel vectors, so
/// it is clamped at zero. NaN components yield NaN.
#[must_use]
pub fn parallelogram_area(u: &[f64], v: &[f64]) -> f64 {
    if u.iter().chain(v).any(|x| x.is_nan()) {
        return f64::NAN;
    }
    let (su, sv) = (max_abs(u), max_abs(v));
    if su <= 0.0 || sv <= 0.0 {
        return 0.0;
    }
    if su.is_infinite() || sv.is_infinite() {
        return f64::INFINITY;
    }
    let uu: f64 = u.iter().map(|a| (a / su) * (a / su)).sum();
    let vv: f64 = v.iter().map(|b| (b / sv) * (b / sv)).sum();
    let uv: f64 = u.iter().zip(v).map(|(a, b)| (a / su) * (b / sv)).sum();
    (uu * vv - uv * uv).max(0.0).sqrt() * su * sv
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn cross_2d_unit_axes() {
        assert!((cross_2d(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < TOL);
        assert!((cross_2d(&[0.0, 1.0], &[1.0, 0.0]) + 1.0).abs() < TOL);
    }

    #[test]
    fn cross_2d_parallel_is_zero() {
        assert!(cross_2d(&[2.0, 4.0], &[1.0, 2.0]).abs() < TOL);
    }

    #[test]
    fn cross_3d_right_handed() {
        let c = cross_3d(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert!((c - Vector3::new(0.0, 0.0, 1.0)).norm() < TOL);
    }

    #[test]
    fn cross_3d_general() {
        // (1,2,3) × (4,5,6) = (-3, 6, -3)
        let c = cross_3d(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert!((c - Vector3::new(-3.0, 6.0, -3.0)).norm() < TOL);
    }

    #[test]
    fn parallelogram_area_matches_cross_products() {
        let u = [1.0, 2.0, 3.0];
        let v = [4.0, 5.0, 6.0];
        let area = parallelogram_area(&u, &v);
        assert!((area - cross_3d(&u, &v).norm()).abs() < 1e-9, "area={area}");

        let area_2d = parallelogram_area(&[3.0, 1.0], &[1.0, 2.0]);
        assert!((area_2d - cross_2d(&[3.0, 1.0], &[1.0, 2.0]).abs()).abs() < 1e-9);
    }

    #[test]
    fn parallelogram_area_4d() {
        // Orthogonal vectors of length 2 and 3 span a 2x3 rectangle.
        let area = parallelogram_area(&[0.0, 0.0, 0.0, 2.0], &[0.0, 3.0, 0.0, 0.0]);
        assert!((area - 6.0).abs() < TOL, "area={area}");
    }

    #[test]
    fn parallelogram_area_of_extreme_magnitudes() {
        let area = parallelogram_area(&[1e300, 0.0, 0.0, 0.0], &[0.0, 0.5, 0.0, 0.0]);
        assert!((area / 5e299 - 1.0).abs() < TOL, "area={area}");
        let area = parallelogram_area(&[1e-200, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]);
        assert!((area / 1e-200 - 1.0).abs() < TOL, "area={area}");
    }

    #[test]
    fn parallelogram_area_propagates_nan() {
        assert!(parallelogram_area(&[1.0, f64::NAN, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]).is_nan());
    }

    #[test]
    fn parallelogram_area_parallel_clamps_to_zero() {
        let area = parallelogram_area(&[0.1, 0.2, 0.3, 0.4], &[0.3, 0.6, 0.9, 1.2]);
        assert!(area.abs() < 1e-6, "area={area}");
        assert!(!area.is_nan());
    }
}
