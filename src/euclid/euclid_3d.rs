use crate::error::Result;
use crate::geometry::Vector;
use crate::math::cross::cross_3d;
use crate::math::norm::scaled_norm;

use super::{check_vectors, Geometry};

/// Spatial Euclidean geometry using the full vector cross product.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclid3D;

impl Euclid3D {
    /// Creates the 3D geometry.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the cross product `u × v`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if either vector is not 3D.
    pub fn cross_product(&self, u: &Vector, v: &Vector) -> Result<Vector> {
        check_vectors(self, u, v)?;
        let c = cross_3d(u.as_slice(), v.as_slice());
        Ok(Vector::from([c.x, c.y, c.z]))
    }
}

impl Geometry for Euclid3D {
    fn dimension(&self) -> usize {
        3
    }

    fn cross_magnitude(&self, u: &Vector, v: &Vector) -> Result<f64> {
        check_vectors(self, u, v)?;
        Ok(scaled_norm(cross_3d(u.as_slice(), v.as_slice()).as_slice()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::euclid::Euclid2D;
    use crate::geometry::{Line, Point};

    const TOL: f64 = 1e-12;

    fn line(a: [f64; 3], b: [f64; 3]) -> Line {
        Line::new(Point::from(a), Point::from(b)).unwrap()
    }

    #[test]
    fn dimension_is_three() {
        assert_eq!(Euclid3D::new().dimension(), 3);
    }

    #[test]
    fn cross_product_of_axes() {
        let c = Euclid3D::new()
            .cross_product(&Vector::from([1.0, 0.0, 0.0]), &Vector::from([0.0, 1.0, 0.0]))
            .unwrap();
        assert_eq!(c.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_product_rejects_2d_vector() {
        let err = Euclid3D::new()
            .cross_product(&Vector::from([1.0, 2.0, 3.0]), &Vector::from([1.0, 2.0]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn cross_magnitude_general() {
        // |(1,2,3) × (4,5,6)| = |(-3,6,-3)| = sqrt(54)
        let m = Euclid3D::new()
            .cross_magnitude(&Vector::from([1.0, 2.0, 3.0]), &Vector::from([4.0, 5.0, 6.0]))
            .unwrap();
        assert!((m - 54.0_f64.sqrt()).abs() < TOL, "m={m}");
    }

    #[test]
    fn distance_to_x_axis() {
        let d = Euclid3D::new()
            .distance_point_to_line(&Point::from([0.0, 1.0, 0.0]), &line([0.0; 3], [10.0, 0.0, 0.0]))
            .unwrap();
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn in_plane_distance_matches_2d() {
        let d3 = Euclid3D::new()
            .distance_point_to_line(&Point::from([2.0, 5.0, 0.0]), &line([1.0, 1.0, 0.0], [4.0, 3.0, 0.0]))
            .unwrap();
        let line_2d = Line::new(Point::from([1.0, 1.0]), Point::from([4.0, 3.0])).unwrap();
        let d2 = Euclid2D::new()
            .distance_point_to_line(&Point::from([2.0, 5.0]), &line_2d)
            .unwrap();
        assert!((d3 - d2).abs() < TOL, "d3={d3}, d2={d2}");
    }

    #[test]
    fn distance_out_of_plane() {
        // (0,3,4) is 5 away from the x axis.
        let d = Euclid3D::new()
            .distance_point_to_line(&Point::from([7.0, 3.0, 4.0]), &line([0.0; 3], [1.0, 0.0, 0.0]))
            .unwrap();
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn distance_to_degenerate_line_fails() {
        let err = Euclid3D::new()
            .distance_point_to_line(&Point::from([0.0, 1.0, 0.0]), &line([1.0; 3], [1.0; 3]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateLine);
    }

    #[test]
    fn distance_with_huge_coordinates() {
        let axis = line([0.0; 3], [1e300, 0.0, 0.0]);
        let d = Euclid3D::new()
            .distance_point_to_line(&Point::from([0.0, 3e200, 4e200]), &axis)
            .unwrap();
        assert!((d / 5e200 - 1.0).abs() < TOL, "d={d}");
    }
}
