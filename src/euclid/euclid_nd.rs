use crate::error::{GeometryError, Result};
use crate::geometry::Vector;
use crate::math::cross::parallelogram_area;

use super::{check_vectors, Geometry};

/// Euclidean geometry of arbitrary dimension.
///
/// The cross-product magnitude is replaced by the parallelogram area from
/// the Gram determinant, which agrees with the 2D and 3D formulas and also
/// covers trajectories such as `(x, y, z, t)` samples.
#[derive(Debug, Clone, Copy)]
pub struct EuclidN {
    dimension: usize,
}

impl EuclidN {
    /// Creates a geometry of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` for dimension zero.
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(GeometryError::UnsupportedDimension(dimension).into());
        }
        Ok(Self { dimension })
    }
}

impl Geometry for EuclidN {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn cross_magnitude(&self, u: &Vector, v: &Vector) -> Result<f64> {
        check_vectors(self, u, v)?;
        Ok(parallelogram_area(u.as_slice(), v.as_slice()))
    }
}
