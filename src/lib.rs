//! Ramer–Douglas–Peucker simplification of n-dimensional polylines.
//!
//! ```text
//! geometry    — points, vectors, lines, polylines
//! euclid      — per-dimension distance strategies (2D, 3D, n-D)
//! operations  — the decimator
//! compare     — exact and tolerance-based polyline comparison
//! ```

pub mod compare;
pub mod error;
pub mod euclid;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{DecimateError, ErrorKind, Result};
pub use euclid::{geometry_for_dimension, Euclid2D, Euclid3D, EuclidN, Geometry};
pub use geometry::{Line, Point, Polyline, Vector};
pub use operations::Decimator;
