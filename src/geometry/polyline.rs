use crate::error::{PointDimension, PolylineError, Result};

use super::Point;

/// Minimum number of points a polyline needs to be simplified.
pub const MIN_POINTS: usize = 2;

/// An ordered sequence of points sampled along a trajectory.
///
/// Order encodes the sampling sequence; operations on a polyline may drop
/// points but never reorder them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline from its points.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polyline from raw coordinate tuples.
    #[must_use]
    pub fn from_coords<I, C>(coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[f64]>,
    {
        coords
            .into_iter()
            .map(|c| Point::from_slice(c.as_ref()))
            .collect()
    }

    /// Returns the points as raw coordinate tuples.
    #[must_use]
    pub fn to_coords(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.as_slice().to_vec()).collect()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Returns every point whose dimension differs from `expected`, in order.
    #[must_use]
    pub fn dimension_mismatches(&self, expected: usize) -> Vec<PointDimension> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.dimension() != expected)
            .map(|(index, p)| PointDimension {
                index,
                dimension: p.dimension(),
            })
            .collect()
    }

    /// Checks that the polyline has at least [`MIN_POINTS`] points, all of
    /// dimension `expected`.
    ///
    /// # Errors
    ///
    /// Returns `PolylineError::InsufficientPoints` for short polylines, and
    /// `PolylineError::DimensionMismatch` listing every offending point otherwise.
    pub fn validate(&self, expected: usize) -> Result<()> {
        if self.len() < MIN_POINTS {
            return Err(PolylineError::InsufficientPoints {
                required: MIN_POINTS,
                actual: self.len(),
            }
            .into());
        }
        let mismatches = self.dimension_mismatches(expected);
        if !mismatches.is_empty() {
            return Err(PolylineError::DimensionMismatch {
                expected,
                mismatches,
            }
            .into());
        }
        Ok(())
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{DecimateError, ErrorKind};

    #[test]
    fn coords_round_trip_preserves_order() {
        let coords = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let pline = Polyline::from_coords(&coords);
        assert_eq!(pline.len(), 3);
        assert_eq!(pline.first().unwrap().as_slice(), &[1.0, 2.0]);
        assert_eq!(pline.last().unwrap().as_slice(), &[5.0, 6.0]);
        assert_eq!(pline.to_coords(), coords);
    }

    #[test]
    fn validate_rejects_single_point() {
        let err = Polyline::from_coords([[1.0, 2.0]]).validate(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientPoints);
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn validate_rejects_empty() {
        let err = Polyline::default().validate(2).unwrap_err();
        assert!(matches!(
            err,
            DecimateError::Polyline(PolylineError::InsufficientPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn validate_reports_every_mismatch() {
        let pline = Polyline::from_coords(vec![
            vec![1.0, 2.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0],
            vec![4.0],
        ]);
        match pline.validate(2).unwrap_err() {
            DecimateError::Polyline(PolylineError::DimensionMismatch { mismatches, .. }) => {
                assert_eq!(
                    mismatches,
                    vec![
                        PointDimension {
                            index: 1,
                            dimension: 3
                        },
                        PointDimension {
                            index: 3,
                            dimension: 1
                        },
                    ]
                );
            }
            other => panic!("expected a dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_two_identical_points() {
        let pline = Polyline::from_coords([[1.0, 2.0], [1.0, 2.0]]);
        assert!(pline.validate(2).is_ok());
    }
}
