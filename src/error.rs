use std::fmt;

use thiserror::Error;

/// Top-level error type for the decimation crate.
#[derive(Debug, Error)]
pub enum DecimateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polyline(#[from] PolylineError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

impl DecimateError {
    /// Returns the coarse kind of this error, independent of its context.
    ///
    /// Callers that translate failures into exit codes or status values can
    /// match on the kind instead of the nested enums.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Geometry(GeometryError::DimensionMismatch { .. })
            | Self::Polyline(PolylineError::DimensionMismatch { .. }) => {
                ErrorKind::DimensionMismatch
            }
            Self::Geometry(GeometryError::DegenerateLine { .. }) => ErrorKind::DegenerateLine,
            Self::Geometry(GeometryError::NonFinite { .. }) => ErrorKind::NonFinite,
            Self::Geometry(GeometryError::UnsupportedDimension(_)) => {
                ErrorKind::UnsupportedDimension
            }
            Self::Polyline(PolylineError::InsufficientPoints { .. }) => {
                ErrorKind::InsufficientPoints
            }
            Self::Polyline(PolylineError::InvalidEpsilon(_)) => ErrorKind::InvalidEpsilon,
            Self::Comparison(_) => ErrorKind::Comparison,
        }
    }
}

/// Coarse classification of [`DecimateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InsufficientPoints,
    DimensionMismatch,
    DegenerateLine,
    NonFinite,
    InvalidEpsilon,
    UnsupportedDimension,
    Comparison,
}

/// Errors raised by geometric primitives and [`crate::euclid::Geometry`] implementations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{operand} has dimension {actual}, expected dimension {expected}")]
    DimensionMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("degenerate line: both endpoints coincide at {point}")]
    DegenerateLine { point: String },

    #[error("non-finite {quantity} at {subject}")]
    NonFinite {
        quantity: &'static str,
        subject: String,
    },

    #[error("unsupported geometry dimension {0}")]
    UnsupportedDimension(usize),
}

/// Dimension of a single point inside a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointDimension {
    pub index: usize,
    pub dimension: usize,
}

impl fmt::Display for PointDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point at position {} has dimension {}",
            self.index, self.dimension
        )
    }
}

/// Errors raised while validating an input polyline.
#[derive(Debug, Error)]
pub enum PolylineError {
    #[error("at least {required} points are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error(
        "all points must have the geometry dimension {expected}: {}",
        join_mismatches(.mismatches)
    )]
    DimensionMismatch {
        expected: usize,
        mismatches: Vec<PointDimension>,
    },

    #[error("epsilon must be a non-negative number, got {0}")]
    InvalidEpsilon(f64),
}

impl PolylineError {
    /// Returns the first offending point of a dimension mismatch, if any.
    #[must_use]
    pub fn first_mismatch(&self) -> Option<PointDimension> {
        match self {
            Self::DimensionMismatch { mismatches, .. } => mismatches.first().copied(),
            _ => None,
        }
    }
}

fn join_mismatches(mismatches: &[PointDimension]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A coordinate that differs between two compared polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMismatch {
    pub point: usize,
    pub axis: usize,
    pub expected: f64,
    pub actual: f64,
}

impl fmt::Display for CoordinateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "at coordinates ({}, {}) expected value {}, but got {}",
            self.point, self.axis, self.expected, self.actual
        )
    }
}

/// Errors reported by the polyline comparison utilities.
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("expected {expected} points, but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("point {point} has dimension {actual}, expected dimension {expected}")]
    DimensionMismatch {
        point: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{} coordinate(s) differ: {}", .0.len(), join_coordinates(.0))]
    ValueMismatch(Vec<CoordinateMismatch>),
}

fn join_coordinates(mismatches: &[CoordinateMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for results using [`DecimateError`].
pub type Result<T> = std::result::Result<T, DecimateError>;
