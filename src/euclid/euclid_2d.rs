use crate::error::Result;
use crate::geometry::Vector;
use crate::math::cross::cross_2d;

use super::{check_vectors, Geometry};

/// Planar Euclidean geometry.
///
/// The cross product of two planar vectors is the pseudo-scalar
/// `u.x * v.y - u.y * v.x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclid2D;

impl Euclid2D {
    /// Creates the 2D geometry.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the cross product of `u` and `v` embedded in 3D: `(0, 0, u × v)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if either vector is not 2D.
    pub fn cross_product(&self, u: &Vector, v: &Vector) -> Result<Vector> {
        check_vectors(self, u, v)?;
        Ok(Vector::from([0.0, 0.0, cross_2d(u.as_slice(), v.as_slice())]))
    }
}

impl Geometry for Euclid2D {
    fn dimension(&self) -> usize {
        2
    }

    fn cross_magnitude(&self, u: &Vector, v: &Vector) -> Result<f64> {
        check_vectors(self, u, v)?;
        Ok(cross_2d(u.as_slice(), v.as_slice()).abs())
    }
}
