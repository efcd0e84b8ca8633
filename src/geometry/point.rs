use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Coords;

use super::Vector;

/// A location in n-dimensional Euclidean space.
///
/// The dimension is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Coords,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coords: Coords) -> Self {
        Self { coords }
    }

    /// Creates a point by copying the given coordinates.
    #[must_use]
    pub fn from_slice(coords: &[f64]) -> Self {
        Self::new(Coords::from_column_slice(coords))
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns the underlying coordinate vector.
    #[must_use]
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.coords.as_slice()
    }

    /// Returns the displacement vector `self - origin`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the points have different dimensions.
    pub fn displacement_from(&self, origin: &Point) -> Result<Vector> {
        if self.dimension() != origin.dimension() {
            return Err(GeometryError::DimensionMismatch {
                operand: "subtrahend",
                expected: self.dimension(),
                actual: origin.dimension(),
            }
            .into());
        }
        Ok(Vector::new(&self.coords - &origin.coords))
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(Coords::from_vec(coords))
    }
}

impl From<&[f64]> for Point {
    fn from(coords: &[f64]) -> Self {
        Self::from_slice(coords)
    }
}

impl<const D: usize> From<[f64; D]> for Point {
    fn from(coords: [f64; D]) -> Self {
        Self::from_slice(&coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{{{}}}", super::join_coords(self.as_slice()))
    }
}
