//! Exact and tolerance-based comparison of polylines.
//!
//! Used to check simplification results against expected coordinates.
//! Every differing coordinate is reported, not just the first.

use approx::relative_eq;

use crate::error::{ComparisonError, CoordinateMismatch, Result};
use crate::geometry::Polyline;

/// Tolerances for [`compare_approx`].
///
/// Two coordinates match when they are within `absolute` of each other, or
/// within `relative` of the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonTolerance {
    /// Maximum absolute difference.
    pub absolute: f64,
    /// Maximum difference relative to the larger magnitude.
    pub relative: f64,
}

impl ComparisonTolerance {
    /// Creates a tolerance from its absolute and relative parts.
    #[must_use]
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }
}

impl Default for ComparisonTolerance {
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 1e-15,
        }
    }
}

/// Checks that `actual` and `expected` have bitwise-equal values coordinate by coordinate.
///
/// # Errors
///
/// Returns `ComparisonError::LengthMismatch` or `ComparisonError::DimensionMismatch`
/// when the shapes differ, and `ComparisonError::ValueMismatch` listing every
/// differing coordinate otherwise.
#[allow(clippy::float_cmp)]
pub fn compare_exact(actual: &Polyline, expected: &Polyline) -> Result<()> {
    compare_with(actual, expected, |a, e| a == e)
}

/// Checks that `actual` and `expected` agree within `tolerance`, coordinate by coordinate.
///
/// # Errors
///
/// Same as [`compare_exact`].
pub fn compare_approx(
    actual: &Polyline,
    expected: &Polyline,
    tolerance: ComparisonTolerance,
) -> Result<()> {
    compare_with(actual, expected, |a, e| {
        relative_eq!(
            a,
            e,
            epsilon = tolerance.absolute,
            max_relative = tolerance.relative
        )
    })
}

fn compare_with<F>(actual: &Polyline, expected: &Polyline, matches: F) -> Result<()>
where
    F: Fn(f64, f64) -> bool,
{
    if actual.len() != expected.len() {
        return Err(ComparisonError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        }
        .into());
    }

    let mut mismatches = Vec::new();
    for (point, (a, e)) in actual.points.iter().zip(&expected.points).enumerate() {
        if a.dimension() != e.dimension() {
            return Err(ComparisonError::DimensionMismatch {
                point,
                expected: e.dimension(),
                actual: a.dimension(),
            }
            .into());
        }
        for (axis, (&av, &ev)) in a.as_slice().iter().zip(e.as_slice()).enumerate() {
            if !matches(av, ev) {
                mismatches.push(CoordinateMismatch {
                    point,
                    axis,
                    expected: ev,
                    actual: av,
                });
            }
        }
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(ComparisonError::ValueMismatch(mismatches).into())
    }
}
