use std::fmt;

use crate::error::{GeometryError, Result};

use super::{Point, Vector};

/// A line through two points of the same dimension.
///
/// The endpoints may coincide; such a line is degenerate and has no
/// direction, so distance queries against it fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Creates a line from its two endpoints.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `p2` does not have the dimension of `p1`.
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if p1.dimension() != p2.dimension() {
            return Err(GeometryError::DimensionMismatch {
                operand: "line end",
                expected: p1.dimension(),
                actual: p2.dimension(),
            }
            .into());
        }
        Ok(Self { p1, p2 })
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn p1(&self) -> &Point {
        &self.p1
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn p2(&self) -> &Point {
        &self.p2
    }

    /// Returns the dimension shared by both endpoints.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.p1.dimension()
    }

    /// Returns the direction vector `p2 - p1`.
    #[must_use]
    pub fn direction(&self) -> Vector {
        Vector::new(self.p2.coords() - self.p1.coords())
    }

    /// Returns the distance between the endpoints (`0.0` for a degenerate line).
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns whether both endpoints coincide.
    ///
    /// This is exactly the case in which [`Line::unit_direction`] and
    /// distance computations fail with `GeometryError::DegenerateLine`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Returns the unit vector pointing from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Same as [`unit_direction`].
    pub fn unit_direction(&self) -> Result<Vector> {
        unit_direction(&self.p1, &self.p2)
    }
}

/// Returns the unit vector pointing from `from` to `to`.
///
/// # Errors
///
/// - `GeometryError::DimensionMismatch` if the points have different dimensions.
/// - `GeometryError::DegenerateLine` if the points coincide.
/// - `GeometryError::NonFinite` if a coordinate is NaN or the difference overflows.
pub fn unit_direction(from: &Point, to: &Point) -> Result<Vector> {
    let direction = to.displacement_from(from)?;
    if from == to {
        return Err(GeometryError::DegenerateLine {
            point: from.to_string(),
        }
        .into());
    }
    let length = direction.norm();
    if !length.is_finite() {
        return Err(GeometryError::NonFinite {
            quantity: "direction",
            subject: format!("Line{{{from}, {to}}}"),
        }
        .into());
    }
    Ok(Vector::new(direction.coords() / length))
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line{{{}, {}}}", self.p1, self.p2)
    }
}
