//! Dimension-specific distance formulas used by the decimator.
//!
//! A [`Geometry`] has a fixed dimension and rejects every operand of a
//! different dimension before doing any arithmetic.

mod euclid_2d;
mod euclid_3d;
mod euclid_nd;

pub use euclid_2d::Euclid2D;
pub use euclid_3d::Euclid3D;
pub use euclid_nd::EuclidN;

use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point, Vector};

/// Per-dimension strategy for triangle areas and point-to-line distances.
pub trait Geometry: fmt::Debug {
    /// Returns the dimension every operand must have.
    fn dimension(&self) -> usize;

    /// Returns the magnitude of the cross product of `u` and `v`, i.e. the
    /// area of the parallelogram they span.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if either vector does not
    /// have this geometry's dimension.
    fn cross_magnitude(&self, u: &Vector, v: &Vector) -> Result<f64>;

    /// Checks that an operand has this geometry's dimension.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` naming `operand` otherwise.
    fn check_dimension(&self, operand: &'static str, actual: usize) -> Result<()> {
        let expected = self.dimension();
        if actual == expected {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                operand,
                expected,
                actual,
            }
            .into())
        }
    }

    /// Returns twice the area of the triangle formed by `point` and the
    /// endpoints of `line`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the point or either line
    /// endpoint does not have this geometry's dimension.
    fn double_triangle_area(&self, point: &Point, line: &Line) -> Result<f64> {
        check_point_and_line(self, point, line)?;
        let to_point = point.displacement_from(line.p1())?;
        self.cross_magnitude(&to_point, &line.direction())
    }

    /// Returns the perpendicular distance from `point` to the infinite line
    /// through the endpoints of `line`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::DimensionMismatch` on a dimension mismatch.
    /// - `GeometryError::DegenerateLine` if the line's endpoints coincide.
    /// - `GeometryError::NonFinite` if a coordinate is NaN or the result overflows.
    fn distance_point_to_line(&self, point: &Point, line: &Line) -> Result<f64> {
        check_point_and_line(self, point, line)?;
        let unit = line.unit_direction()?;
        self.distance_along(point, line.p1(), &unit)
    }

    /// Returns the distance from `point` to the line through `origin` with
    /// unit direction `unit`.
    ///
    /// Callers measuring many points against one line compute `unit` once
    /// with [`crate::geometry::unit_direction`].
    ///
    /// # Errors
    ///
    /// - `GeometryError::DimensionMismatch` if an operand does not have this
    ///   geometry's dimension.
    /// - `GeometryError::NonFinite` if the distance is NaN or infinite.
    fn distance_along(&self, point: &Point, origin: &Point, unit: &Vector) -> Result<f64> {
        self.check_dimension("point", point.dimension())?;
        self.check_dimension("line start", origin.dimension())?;
        self.check_dimension("direction", unit.dimension())?;
        let to_point = point.displacement_from(origin)?;
        let distance = self.cross_magnitude(&to_point, unit)?;
        if distance.is_finite() {
            Ok(distance)
        } else {
            Err(GeometryError::NonFinite {
                quantity: "distance",
                subject: point.to_string(),
            }
            .into())
        }
    }
}

fn check_point_and_line<G: Geometry + ?Sized>(
    geometry: &G,
    point: &Point,
    line: &Line,
) -> Result<()> {
    geometry.check_dimension("point", point.dimension())?;
    geometry.check_dimension("line start", line.p1().dimension())?;
    geometry.check_dimension("line end", line.p2().dimension())
}

fn check_vectors<G: Geometry + ?Sized>(geometry: &G, u: &Vector, v: &Vector) -> Result<()> {
    geometry.check_dimension("first vector", u.dimension())?;
    geometry.check_dimension("second vector", v.dimension())
}

impl<G: Geometry + ?Sized> Geometry for Box<G> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn cross_magnitude(&self, u: &Vector, v: &Vector) -> Result<f64> {
        (**self).cross_magnitude(u, v)
    }

    fn check_dimension(&self, operand: &'static str, actual: usize) -> Result<()> {
        (**self).check_dimension(operand, actual)
    }

    fn double_triangle_area(&self, point: &Point, line: &Line) -> Result<f64> {
        (**self).double_triangle_area(point, line)
    }

    fn distance_point_to_line(&self, point: &Point, line: &Line) -> Result<f64> {
        (**self).distance_point_to_line(point, line)
    }

    fn distance_along(&self, point: &Point, origin: &Point, unit: &Vector) -> Result<f64> {
        (**self).distance_along(point, origin, unit)
    }
}

/// Returns the geometry for `dimension`.
///
/// 2D and 3D use their dedicated cross-product formulas; every other
/// positive dimension uses [`EuclidN`].
///
/// # Errors
///
/// Returns `GeometryError::UnsupportedDimension` for dimension zero.
pub fn geometry_for_dimension(dimension: usize) -> Result<Box<dyn Geometry>> {
    match dimension {
        2 => Ok(Box::new(Euclid2D::new())),
        3 => Ok(Box::new(Euclid3D::new())),
        d => Ok(Box::new(EuclidN::new(d)?)),
    }
}
