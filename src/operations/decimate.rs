use tracing::{debug, trace};

use crate::error::{PolylineError, Result};
use crate::euclid::{geometry_for_dimension, Geometry};
use crate::geometry::{unit_direction, Point, Polyline, MIN_POINTS};

/// Simplifies polylines with the Ramer–Douglas–Peucker algorithm.
///
/// Each range of the polyline is compared against its chord (the line
/// through its first and last point). If every interior point lies closer
/// than `epsilon` to the chord, the interior is dropped; otherwise the range
/// is split at the farthest point and both halves are processed the same
/// way. The result is always an order-preserving subsequence of the input
/// that keeps the first and last point.
///
/// Ranges are processed from an explicit work stack, so input length is not
/// limited by the call stack.
#[derive(Debug, Clone)]
pub struct Decimator<G = Box<dyn Geometry>> {
    geometry: G,
}

impl Decimator {
    /// Creates a decimator for points of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` for dimension zero.
    pub fn for_dimension(dimension: usize) -> Result<Self> {
        Ok(Self::new(geometry_for_dimension(dimension)?))
    }
}

impl<G: Geometry> Decimator<G> {
    /// Creates a decimator measuring distances with `geometry`.
    #[must_use]
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    /// Returns the geometry used for distance computations.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Simplifies `polyline`, dropping points closer than `epsilon` to the
    /// chord of their range.
    ///
    /// A point exactly `epsilon` away from its chord is kept.
    ///
    /// # Errors
    ///
    /// - `PolylineError::InsufficientPoints` if the polyline has fewer than 2 points.
    /// - `PolylineError::DimensionMismatch` if any point does not have the geometry's dimension.
    /// - `PolylineError::InvalidEpsilon` if `epsilon` is negative or NaN.
    /// - `GeometryError::DegenerateLine` if a chord that has interior points
    ///   starts and ends at the same location.
    /// - `GeometryError::NonFinite` if a coordinate is NaN or a chord or
    ///   distance overflows `f64`.
    pub fn simplify(&self, polyline: &Polyline, epsilon: f64) -> Result<Polyline> {
        let kept = self.keep_indices(polyline, epsilon)?;
        Ok(kept
            .into_iter()
            .map(|i| polyline.points[i].clone())
            .collect())
    }

    /// Simplifies a sequence of raw coordinate tuples.
    ///
    /// # Errors
    ///
    /// Same as [`Decimator::simplify`].
    pub fn simplify_coords<C: AsRef<[f64]>>(
        &self,
        coords: &[C],
        epsilon: f64,
    ) -> Result<Vec<Vec<f64>>> {
        let polyline = Polyline::from_coords(coords);
        Ok(self.simplify(&polyline, epsilon)?.to_coords())
    }

    /// Returns the ascending indices of the points [`Decimator::simplify`] keeps.
    ///
    /// # Errors
    ///
    /// Same as [`Decimator::simplify`].
    pub fn keep_indices(&self, polyline: &Polyline, epsilon: f64) -> Result<Vec<usize>> {
        self.validate(polyline, epsilon)?;

        let points = &polyline.points;
        let n = points.len();
        debug!(
            points = n,
            epsilon,
            dimension = self.geometry.dimension(),
            "simplifying polyline"
        );

        if n == MIN_POINTS {
            return Ok(vec![0, 1]);
        }

        let mut keep = vec![false; n];
        keep[0] = true;
        keep[n - 1] = true;

        let mut stack = vec![(0, n - 1)];
        while let Some((lo, hi)) = stack.pop() {
            if hi - lo < 2 {
                continue;
            }

            let (split, d_max) = self.farthest_from_chord(points, lo, hi)?;
            if d_max < epsilon {
                trace!(lo, hi, d_max, "interior pruned");
                continue;
            }

            trace!(lo, hi, split, d_max, "range split");
            keep[split] = true;
            // Left range on top so ranges are visited in sequence order.
            stack.push((split, hi));
            stack.push((lo, split));
        }

        let kept: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| k.then_some(i))
            .collect();
        debug!(points = n, kept = kept.len(), "polyline simplified");
        Ok(kept)
    }

    /// Checks point count, point dimensions and `epsilon`, in that order.
    fn validate(&self, polyline: &Polyline, epsilon: f64) -> Result<()> {
        polyline.validate(self.geometry.dimension())?;
        if epsilon.is_nan() || epsilon < 0.0 {
            return Err(PolylineError::InvalidEpsilon(epsilon).into());
        }
        Ok(())
    }

    /// Returns the interior index of `points[lo..=hi]` farthest from the
    /// chord `points[lo]`–`points[hi]`, with its distance.
    ///
    /// Ties go to the lowest index. Requires `hi - lo >= 2`.
    fn farthest_from_chord(
        &self,
        points: &[Point],
        lo: usize,
        hi: usize,
    ) -> Result<(usize, f64)> {
        let origin = &points[lo];
        let unit = unit_direction(origin, &points[hi])?;
        let mut split = lo + 1;
        let mut d_max = f64::NEG_INFINITY;
        for (i, point) in points.iter().enumerate().take(hi).skip(lo + 1) {
            let d = self.geometry.distance_along(point, origin, &unit)?;
            if d > d_max {
                d_max = d;
                split = i;
            }
        }
        Ok((split, d_max))
    }
}
