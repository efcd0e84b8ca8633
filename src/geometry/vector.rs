use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::norm::scaled_norm;
use crate::math::Coords;

use super::Point;

/// A displacement in n-dimensional Euclidean space.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coords: Coords,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(coords: Coords) -> Self {
        Self { coords }
    }

    /// Creates a vector by copying the given components.
    #[must_use]
    pub fn from_slice(coords: &[f64]) -> Self {
        Self::new(Coords::from_column_slice(coords))
    }

    /// Returns the vector pointing from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the points have different dimensions.
    pub fn between(from: &Point, to: &Point) -> Result<Self> {
        to.displacement_from(from)
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns the underlying component vector.
    #[must_use]
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.coords.as_slice()
    }

    /// Returns the Euclidean norm. The zero vector has norm `0.0`.
    ///
    /// Finite components never overflow or underflow the result.
    #[must_use]
    pub fn norm(&self) -> f64 {
        scaled_norm(self.as_slice())
    }

    /// Returns the dot product with `other`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if the vectors have different dimensions.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::DimensionMismatch {
                operand: "second vector",
                expected: self.dimension(),
                actual: other.dimension(),
            }
            .into());
        }
        Ok(self.coords.dot(&other.coords))
    }
}

impl<const D: usize> From<[f64; D]> for Vector {
    fn from(coords: [f64; D]) -> Self {
        Self::from_slice(&coords)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{{{}}}", super::join_coords(self.as_slice()))
    }
}
